//! Rule-based checks for [`AnalysisSpec`]s.
//!
//! Every rule registered with a [`ValidationEngine`] runs, and all findings
//! end up in one [`ValidationReport`]. A spec with a negative `top_n` and an
//! unknown stop-word language reports both problems, not just the first.
//!
//! ```
//! use rapid_textstats::AnalysisSpec;
//!
//! let spec = AnalysisSpec::from_json(r#"{ "v": 1, "top_n": -1, "min_word_length": 0 }"#).unwrap();
//! let report = spec.validate();
//! assert_eq!(report.errors().count(), 2);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::{AnalysisSpec, SPEC_VERSION};
use crate::nlp::stopwords::StopwordFilter;

/// Errors reject the spec; warnings are reported and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding of one rule.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(error: SpecError) -> Self {
        Self::with_severity(Severity::Error, error)
    }

    pub fn warning(error: SpecError) -> Self {
        Self::with_severity(Severity::Warning, error)
    }

    fn with_severity(severity: Severity, error: SpecError) -> Self {
        Self { severity, error }
    }
}

/// Everything the rules found, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A check over an [`AnalysisSpec`].
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"top_n"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic>;
}

/// Runs a set of [`ValidationRule`]s against an [`AnalysisSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(MinWordLengthRule));
        engine.add_rule(Box::new(TopNRule));
        engine.add_rule(Box::new(StopwordSourceRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &AnalysisSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── 1. Only v1 is understood ───────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. min_word_length >= 1 ────────────────────────────────────────────────

struct MinWordLengthRule;

impl ValidationRule for MinWordLengthRule {
    fn name(&self) -> &str {
        "min_word_length"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        match spec.min_word_length {
            Some(n) if n < 1 => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidParameter,
                    "/min_word_length",
                    format!("min_word_length must be at least 1 (got {n})"),
                )
                .with_hint("Use 1 to count every token"),
            )],
            _ => vec![],
        }
    }
}

// ─── 3. top_n >= 0 ──────────────────────────────────────────────────────────

struct TopNRule;

impl ValidationRule for TopNRule {
    fn name(&self) -> &str {
        "top_n"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        match spec.top_n {
            Some(n) if n < 0 => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidParameter,
                    "/top_n",
                    format!("top_n must not be negative (got {n})"),
                )
                .with_hint("Use 0 to skip ranking"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Stop-word source is unambiguous and known ───────────────────────────

struct StopwordSourceRule;

impl ValidationRule for StopwordSourceRule {
    fn name(&self) -> &str {
        "stopword_source"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let sw = &spec.stopwords;
        let mut out = Vec::new();

        if sw.file.is_some() && sw.language.is_some() {
            out.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/stopwords",
                    "file and language are mutually exclusive",
                )
                .with_hint("Keep either \"file\" or \"language\""),
            ));
        }

        if let Some(language) = &sw.language {
            if StopwordFilter::parse_language(language).is_none() {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidParameter,
                        "/stopwords/language",
                        format!("no built-in stop-word list for \"{language}\""),
                    )
                    .with_hint("Use a code such as en, de, fr, es"),
                ));
            }
        }

        if !sw.enabled && (sw.file.is_some() || sw.language.is_some()) {
            out.push(ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/stopwords/enabled",
                    "a stop-word source is set but filtering is disabled",
                )
                .with_hint("Set \"enabled\": true to apply it"),
            ));
        }

        out
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out
    }
}
