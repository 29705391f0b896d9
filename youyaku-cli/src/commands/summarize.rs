//! Summarize command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, SummaryFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use youyaku_core::{Config, SummaryExtractor};

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config file, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum sentences per summary (default: from config file, otherwise 3)
    #[arg(short = 'm', long, value_name = "N")]
    pub max_sentences: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one summary per document
    Text,
    /// JSON array of document summaries
    Json,
    /// Markdown section per document
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// A resolved input document
#[derive(Debug, PartialEq, Eq)]
enum Source {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Source::Stdin => "-".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => FileReader::read_stdin(),
            Source::File(path) => FileReader::read_text(path),
        }
    }
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting summary extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let max_sentences = self
            .max_sentences
            .unwrap_or(file_config.summary.max_sentences);
        let format = match self.format {
            Some(format) => format,
            None => file_config.output.default_format.parse()?,
        };

        let sources = self.resolve_sources()?;
        log::info!("Summarizing {} document(s)", sources.len());

        let extractor = SummaryExtractor::with_config(
            Config::builder().max_sentences(max_sentences).build(),
        );

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let show_source = sources.len() > 1;
        let mut formatter: Box<dyn SummaryFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, show_source)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(sources.len() as u64);

        for source in &sources {
            let name = source.name();
            let text = source.read()?;

            let output = extractor
                .extract_text(&text)
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;

            log::debug!(
                "{name}: kept {} of {} sentences",
                output.metadata.selected_count,
                output.metadata.total_sentences
            );

            formatter.format_document(&name, &output)?;
            progress.document_completed(&name);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    /// Resolve input arguments into readable sources.
    ///
    /// A single `-` means stdin; it cannot be mixed with file patterns.
    fn resolve_sources(&self) -> Result<Vec<Source>> {
        let wants_stdin = self.input.iter().any(|i| i == "-");

        if wants_stdin {
            if self.input.len() > 1 {
                return Err(CliError::ConfigError(
                    "stdin input '-' cannot be combined with file patterns".to_string(),
                )
                .into());
            }
            return Ok(vec![Source::Stdin]);
        }

        let files = resolve_patterns(&self.input)?;
        Ok(files.into_iter().map(Source::File).collect())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Vec<&str>) -> SummarizeArgs {
        SummarizeArgs {
            input: input.into_iter().map(String::from).collect(),
            output: None,
            format: None,
            max_sentences: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn format_parses_from_config_strings() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn unknown_format_is_config_error() {
        let error = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(error.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn lone_dash_resolves_to_stdin() {
        let sources = args(vec!["-"]).resolve_sources().unwrap();
        assert_eq!(sources, vec![Source::Stdin]);
    }

    #[test]
    fn dash_mixed_with_patterns_is_rejected() {
        let result = args(vec!["-", "story.txt"]).resolve_sources();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be combined"));
    }

    #[test]
    fn missing_patterns_are_an_error() {
        let result = args(vec!["/nonexistent/*.txt"]).resolve_sources();
        assert!(result.is_err());
    }
}
