use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::Level;

use rapid_textstats::report::{render_html, render_text, ChartSink, OutputFormat, TextBarChart};
use rapid_textstats::{open_document, AnalysisError, AnalysisSpec, Pipeline, Result, TextSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Word statistics and frequency ranking for text", long_about = None)]
struct Args {
    /// Text file to analyse; reads stdin when omitted
    path: Option<PathBuf>,

    /// Number of top words to report [default: 20]
    #[arg(long, allow_negative_numbers = true)]
    top: Option<i64>,

    /// Shortest word counted in the ranking [default: 3]
    #[arg(long, allow_negative_numbers = true)]
    min_length: Option<i64>,

    /// Characters stripped before splitting words [default: ASCII punctuation]
    #[arg(long, value_name = "CHARS")]
    ignore: Option<String>,

    /// Exclude stop-words from the ranking
    #[arg(long)]
    remove_stop_words: bool,

    /// Stop-word list, whitespace-delimited [default: stop_words.txt]
    #[arg(long, value_name = "FILE")]
    stop_words: Option<PathBuf>,

    /// Use a built-in stop-word list instead of a file
    #[arg(long, value_name = "LANG", conflicts_with = "stop_words")]
    stop_words_language: Option<String>,

    /// JSON analysis spec; other flags override its values
    #[arg(long, value_name = "FILE")]
    spec: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Append a bar chart of the top words (text output only)
    #[arg(long)]
    chart: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn analysis_spec(&self) -> Result<AnalysisSpec> {
        let mut spec = match &self.spec {
            Some(path) => AnalysisSpec::from_file(path)?,
            None => AnalysisSpec::default(),
        };
        if let Some(top) = self.top {
            spec.top_n = Some(top);
        }
        if let Some(min_length) = self.min_length {
            spec.min_word_length = Some(min_length);
        }
        if let Some(ignore) = &self.ignore {
            spec.ignored_characters = Some(ignore.clone());
        }
        if self.remove_stop_words {
            spec.stopwords.enabled = true;
        }
        if let Some(path) = &self.stop_words {
            spec.stopwords.file = Some(path.clone());
            spec.stopwords.language = None;
        }
        if let Some(language) = &self.stop_words_language {
            spec.stopwords.language = Some(language.clone());
            spec.stopwords.file = None;
        }
        Ok(spec)
    }

    fn read_text(&self) -> Result<String> {
        match &self.path {
            Some(path) => open_document(path)?.extract(),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|source| AnalysisError::DocumentUnreadable {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(buffer)
            }
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let spec = args.analysis_spec()?;
    for warning in spec.validate().warnings() {
        tracing::warn!(path = %warning.path, "{}", warning.message);
    }
    let cfg = spec.into_config()?;

    // Load stop-words before touching the document.
    let pipeline = Pipeline::from_config(&cfg)?;
    let text = args.read_text()?;
    tracing::info!(bytes = text.len(), "analysing document");
    let report = pipeline.run(&text);

    let output = match args.format {
        OutputFormat::Text => {
            let mut out = render_text(&report);
            if args.chart {
                let title = format!("Top {} frequent words", report.top_n);
                let chart = TextBarChart::default().render(&title, &report.chart_series());
                match chart {
                    Ok(chart) => {
                        out.push('\n');
                        out.push_str(&chart);
                    }
                    Err(never) => match never {},
                }
            }
            out
        }
        OutputFormat::Html => render_html(&report),
        OutputFormat::Json => report.to_json()? + "\n",
    };
    Ok(output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(code = %err.code(), "analysis failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
