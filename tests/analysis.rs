use std::io::Write;

use rapid_textstats::pipeline::{StageTimingObserver, STAGE_SCAN};
use rapid_textstats::{
    analyze, analyze_document, AnalysisConfig, AnalysisError, AnalysisSpec, InMemoryText,
    Pipeline, PlainTextFile, StopwordSource,
};

const SAMPLE: &str = "The cat sat. The dog ran!";

const PASSAGE: &str = "\
It was the best of times, it was the worst of times.
It was the age of wisdom, it was the age of foolishness!

Was it? It was.
";

fn stopword_file(words: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{words}").unwrap();
    file
}

#[test]
fn sample_without_stopwords() {
    let cfg = AnalysisConfig::default().with_top_n(2);
    let report = analyze(SAMPLE, &cfg).unwrap();

    assert_eq!(report.stats.words_count, 6);
    assert_eq!(report.stats.unique_words_count, 5);
    assert_eq!(report.stats.sentence_count, 2);
    assert_eq!(report.stats.average_sentence_length, 3.0);
    assert_eq!(report.top_words.len(), 2);
    assert_eq!(report.top_words.pairs()[0], ("the", 2));
}

#[test]
fn sample_with_stopword_file() {
    let file = stopword_file("the\n");
    let cfg = AnalysisConfig::default()
        .with_top_n(2)
        .with_stopwords(StopwordSource::File(file.path().to_path_buf()));
    let report = analyze(SAMPLE, &cfg).unwrap();

    assert_eq!(report.stats.words_count, 6);
    assert_eq!(report.stats.unique_words_count, 4);
    assert!(report.top_words.iter().all(|e| e.word != "the"));
}

#[test]
fn empty_text_is_all_zero() {
    let report = analyze("", &AnalysisConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["words_count"], 0);
    assert_eq!(json["unique_words_count"], 0);
    assert_eq!(json["average_word_length"], 0.0);
    assert_eq!(json["sentence_count"], 0);
    assert_eq!(json["average_sentence_length"], 0.0);
    assert_eq!(json["top_words"], serde_json::json!([]));
}

#[test]
fn top_zero_is_empty() {
    let cfg = AnalysisConfig::default().with_top_n(0);
    let report = analyze(PASSAGE, &cfg).unwrap();

    assert!(report.top_words.is_empty());
    assert!(report.stats.unique_words_count > 0);
}

#[test]
fn unique_count_matches_full_ranking() {
    let cfg = AnalysisConfig::default().with_top_n(usize::MAX);
    let report = analyze(PASSAGE, &cfg).unwrap();

    assert_eq!(report.top_words.len(), report.stats.unique_words_count);
}

#[test]
fn word_count_bounds_table_total() {
    let cfg = AnalysisConfig::default().with_top_n(1000);

    let report = analyze(PASSAGE, &cfg).unwrap();
    let total: usize = report.top_words.values().iter().sum();
    // "it", "of" are shorter than 3 and filtered
    assert!(report.stats.words_count > total);

    let report = analyze(PASSAGE, &cfg.clone().with_min_word_length(1)).unwrap();
    let total: usize = report.top_words.values().iter().sum();
    assert_eq!(report.stats.words_count, total);
}

#[test]
fn passage_statistics() {
    let report = analyze(PASSAGE, &AnalysisConfig::default().with_top_n(3)).unwrap();

    assert_eq!(report.stats.words_count, 28);
    // ". ! ? ." across the lines
    assert_eq!(report.stats.sentence_count, 4);
    assert_eq!(report.stats.average_sentence_length, 7.0);
    assert_eq!(report.top_words.pairs(), vec![("was", 6), ("the", 4), ("times", 2)]);
}

#[test]
fn repeated_runs_are_identical() {
    let file = stopword_file("the was");
    let cfg = AnalysisConfig::default()
        .with_top_n(50)
        .with_stopwords(StopwordSource::File(file.path().to_path_buf()));

    let first = analyze(PASSAGE, &cfg).unwrap();
    let second = analyze(PASSAGE, &cfg).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn missing_stopword_file_aborts() {
    let cfg = AnalysisConfig::default()
        .with_stopwords(StopwordSource::File("/nonexistent/stop_words.txt".into()));
    let err = analyze(SAMPLE, &cfg).unwrap_err();

    assert!(matches!(err, AnalysisError::ResourceUnavailable { .. }));
}

#[test]
fn stopword_membership_is_case_sensitive() {
    let file = stopword_file("The");
    let cfg = AnalysisConfig::default()
        .with_stopwords(StopwordSource::File(file.path().to_path_buf()));
    let report = analyze(SAMPLE, &cfg).unwrap();

    // tokens are lower-cased, so "The" never matches
    assert_eq!(report.top_words.pairs()[0], ("the", 2));
}

#[test]
fn builtin_english_stopwords() {
    let cfg = AnalysisConfig::default().with_stopwords(StopwordSource::BuiltIn("en".into()));
    let report = analyze(SAMPLE, &cfg).unwrap();

    assert!(report.top_words.iter().all(|e| e.word != "the"));
    assert_eq!(report.stats.words_count, 6);
}

#[test]
fn spec_rejects_negative_values() {
    for json in [r#"{"v":1,"top_n":-1}"#, r#"{"v":1,"min_word_length":-2}"#] {
        let err = AnalysisSpec::from_json(json)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter { .. }), "{json}");
    }
}

#[test]
fn document_sources() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "{SAMPLE}").unwrap();

    let cfg = AnalysisConfig::default();
    let from_file = analyze_document(&PlainTextFile::new(file.path()), &cfg).unwrap();
    let from_memory = analyze_document(&InMemoryText(SAMPLE.to_string()), &cfg).unwrap();
    assert_eq!(from_file, from_memory);
}

#[test]
fn batch_runs_are_isolated() {
    let pipeline = Pipeline::from_config(&AnalysisConfig::default()).unwrap();
    let reports = pipeline.run_batch(&[SAMPLE, PASSAGE, SAMPLE]);

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0], reports[2]);
    assert_eq!(reports[0].stats.words_count, 6);
    assert_eq!(reports[1].stats.words_count, 28);
}

#[test]
fn observer_reports_scan_counts() {
    let pipeline = Pipeline::from_config(&AnalysisConfig::default()).unwrap();
    let mut obs = StageTimingObserver::new();
    let report = pipeline.run_with_observer(PASSAGE, &mut obs);

    let scan = obs.report(STAGE_SCAN).unwrap();
    assert_eq!(scan.lines, Some(3));
    assert_eq!(scan.tokens, Some(report.stats.words_count));
    assert_eq!(scan.entries, Some(report.stats.unique_words_count));
}
