//! Rendering of [`AnalysisReport`]s for people.
//!
//! Nothing here feeds back into the analysis; these helpers only read a
//! finished report.

pub mod chart;

use std::fmt;

use crate::pipeline::artifacts::AnalysisReport;

pub use chart::{ChartSink, TextBarChart};

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Plain-text summary for a terminal.
pub fn render_text(report: &AnalysisReport) -> String {
    TextSummary(report).to_string()
}

/// HTML fragment with the statistics and the ranked words.
pub fn render_html(report: &AnalysisReport) -> String {
    HtmlSummary(report).to_string()
}

struct TextSummary<'a>(&'a AnalysisReport);

impl fmt::Display for TextSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let s = &report.stats;
        writeln!(f, "Total words: {}", s.words_count)?;
        writeln!(f, "Unique words: {}", s.unique_words_count)?;
        writeln!(f, "Average word length: {:.2}", s.average_word_length)?;
        writeln!(f, "Sentence count: {}", s.sentence_count)?;
        writeln!(
            f,
            "Average sentence length: {:.2} words",
            s.average_sentence_length
        )?;
        writeln!(f, "Top {} words:", report.top_n)?;

        let width = report
            .top_words
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &report.top_words {
            writeln!(f, "  {:<width$}  {}", entry.word, entry.count)?;
        }
        Ok(())
    }
}

struct HtmlSummary<'a>(&'a AnalysisReport);

impl fmt::Display for HtmlSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let s = &report.stats;
        writeln!(f, "<p>Total words: {}</p>", s.words_count)?;
        writeln!(f, "<p>Unique words: {}</p>", s.unique_words_count)?;
        writeln!(f, "<p>Average word length: {:.2}</p>", s.average_word_length)?;
        writeln!(f, "<p>Sentence count: {}</p>", s.sentence_count)?;
        writeln!(
            f,
            "<p>Average sentence length: {:.2} words</p>",
            s.average_sentence_length
        )?;
        writeln!(f, "<p>Top {} words:</p>", report.top_n)?;
        writeln!(f, "<ul>")?;
        for entry in &report.top_words {
            writeln!(f, "<li>{}: {}</li>", escape_html(&entry.word), entry.count)?;
        }
        writeln!(f, "</ul>")
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::runner::Pipeline;

    fn sample() -> AnalysisReport {
        Pipeline::builder()
            .top_n(2)
            .build()
            .unwrap()
            .run("The cat sat. The dog ran!")
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&sample());

        assert!(text.contains("Total words: 6\n"));
        assert!(text.contains("Unique words: 5\n"));
        assert!(text.contains("Average word length: 3.00\n"));
        assert!(text.contains("Sentence count: 2\n"));
        assert!(text.contains("Average sentence length: 3.00 words\n"));
        assert!(text.contains("Top 2 words:\n"));
        assert!(text.contains("  the  2\n"));
    }

    #[test]
    fn test_text_report_layout() {
        let expected = "Total words: 6\n\
                        Unique words: 5\n\
                        Average word length: 3.00\n\
                        Sentence count: 2\n\
                        Average sentence length: 3.00 words\n\
                        Top 2 words:\n  \
                        the  2\n  \
                        cat  1\n";
        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn test_html_report() {
        let html = render_html(&sample());

        assert!(html.starts_with("<p>Total words: 6</p>"));
        assert!(html.contains("<p>Average sentence length: 3.00 words</p>"));
        assert!(html.contains("<li>the: 2</li>"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.trim_end().ends_with("</ul>"));
    }

    #[test]
    fn test_html_escapes_words() {
        let report = Pipeline::builder()
            .ignored_characters("")
            .build()
            .unwrap()
            .run("<b>bold</b> &amp");
        let html = render_html(&report);

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("&amp;amp"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_report_renders() {
        let report = AnalysisReport::default();
        assert!(render_text(&report).contains("Total words: 0"));
        assert!(render_html(&report).contains("<ul>\n</ul>"));
    }
}
