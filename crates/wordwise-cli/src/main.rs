use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use text_modify::{GeminiClient, GeminiConfig, Modification, Modifier, ModifyRequest};
use text_report::{render, ComparisonReport, ExportFormat, OutputArtifact};
use text_stats::{analyze, AnalysisOptions, AnalysisResult, RawAnalysisOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod display;

/// wordwise – word counts, readability and AI rewrites for any text.
/// Commands:
///   - analyze      statistics for a text (from --text, --input or STDIN)
///   - modify       chained rewrites through the text service, analyzed side by side
///   - summarize    concise summary
///   - check        writing-quality tests
///   - export       original/modified comparison as JSON and/or CSV
#[derive(Parser, Debug)]
#[command(name = "wordwise", version, about = "Text statistics and AI-assisted rewriting")]
struct Cli {
    /// Directory for exported files
    #[arg(long, global = true, default_value = "outputs")]
    out_dir: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct TextSource {
    /// The text; read from --input or STDIN when absent
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// File to read the text from
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct OptionArgs {
    /// Do not count whitespace toward the character count
    #[arg(long)]
    no_spaces: bool,

    /// Strip punctuation before splitting into words
    #[arg(long)]
    ignore_punctuation: bool,

    /// Drop stopwords of the detected language
    #[arg(long)]
    ignore_stopwords: bool,

    /// Highlight words at least this long (non-numeric values are ignored)
    #[arg(long, default_value = "")]
    min_length: String,

    /// Highlight words at most this long (non-numeric values are ignored)
    #[arg(long, default_value = "")]
    max_length: String,
}

impl OptionArgs {
    fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions::from(RawAnalysisOptions {
            include_spaces: !self.no_spaces,
            ignore_punctuation: self.ignore_punctuation,
            ignore_stopwords: self.ignore_stopwords,
            min_word_length: self.min_length.clone(),
            max_word_length: self.max_length.clone(),
        })
    }
}

/// Analysis options for the modified side; each side is configured on its own.
#[derive(Args, Debug, Clone)]
struct ModifiedOptionArgs {
    /// --no-spaces for the modified text
    #[arg(long)]
    modified_no_spaces: bool,

    /// --ignore-punctuation for the modified text
    #[arg(long)]
    modified_ignore_punctuation: bool,

    /// --ignore-stopwords for the modified text
    #[arg(long)]
    modified_ignore_stopwords: bool,

    /// --min-length for the modified text
    #[arg(long, default_value = "")]
    modified_min_length: String,

    /// --max-length for the modified text
    #[arg(long, default_value = "")]
    modified_max_length: String,
}

impl ModifiedOptionArgs {
    fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions::from(RawAnalysisOptions {
            include_spaces: !self.modified_no_spaces,
            ignore_punctuation: self.modified_ignore_punctuation,
            ignore_stopwords: self.modified_ignore_stopwords,
            min_word_length: self.modified_min_length.clone(),
            max_word_length: self.modified_max_length.clone(),
        })
    }
}

#[derive(Args, Debug)]
struct ServiceArgs {
    /// API key for the text service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model used by the text service
    #[arg(long, env = "WORDWISE_MODEL")]
    model: Option<String>,
}

impl ServiceArgs {
    fn modifier(&self) -> Result<Modifier<GeminiClient>> {
        let mut config = GeminiConfig::from_env();
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        let client = GeminiClient::new(config).context("failed to build HTTP client")?;
        Ok(Modifier::new(client))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Word, character, syllable and readability statistics
    Analyze {
        #[command(flatten)]
        source: TextSource,
        #[command(flatten)]
        options: OptionArgs,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply rewrite steps in order, e.g. --step change-length:100 --step humanize
    Modify {
        #[command(flatten)]
        source: TextSource,
        /// Step as `type` or `type:length`
        #[arg(long = "step", required = true)]
        steps: Vec<Modification>,
        #[command(flatten)]
        options: OptionArgs,
        #[command(flatten)]
        modified_options: ModifiedOptionArgs,
        #[command(flatten)]
        service: ServiceArgs,
        /// Also write the comparison as json and/or csv
        #[arg(long, value_parser = parse_format)]
        export: Vec<ExportFormat>,
    },

    /// Summarize the text
    Summarize {
        #[command(flatten)]
        source: TextSource,
        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Run writing-quality tests on the text
    Check {
        #[command(flatten)]
        source: TextSource,
        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Write a comparison of two texts as json and/or csv
    Export {
        #[command(flatten)]
        source: TextSource,
        /// File holding the modified text
        #[arg(long)]
        modified: Option<PathBuf>,
        #[command(flatten)]
        options: OptionArgs,
        #[command(flatten)]
        modified_options: ModifiedOptionArgs,
        #[arg(long, value_parser = parse_format, default_value = "json")]
        format: Vec<ExportFormat>,
    },
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "csv" => Ok(ExportFormat::Csv),
        other => Err(format!("unknown export format `{other}` (expected json or csv)")),
    }
}

fn write_artifacts(out_dir: &Path, prefix: &str, artifacts: &[OutputArtifact]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed creating {}", out_dir.display()))?;
    for art in artifacts {
        let (format, contents) = match art {
            OutputArtifact::Json { data } => (ExportFormat::Json, serde_json::to_string_pretty(data)?),
            OutputArtifact::Csv { data } => (ExportFormat::Csv, data.clone()),
        };
        let p = out_dir.join(format!("{prefix}.{}", format.extension()));
        fs::write(&p, contents).with_context(|| format!("failed writing {}", p.display()))?;
        eprintln!("✓ wrote {}", p.display());
    }
    Ok(())
}

fn read_stdin_string() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed reading STDIN")?;
    Ok(buf)
}

impl TextSource {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(t), _) => Ok(t.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("failed reading text: {}", path.display())),
            (None, None) => {
                if io::stdin().is_terminal() {
                    eprintln!("reading text from STDIN (Ctrl-D to finish)");
                }
                read_stdin_string()
            }
        }
    }
}

fn print_analysis(title: &str, a: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(a)?);
    } else {
        print!("{}", display::summary(title, a));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Analyze { source, options, json } => {
            let text = source.read()?;
            let analysis = analyze(&text, &options.to_options());
            print_analysis("Analysis", &analysis, json)?;
        }

        Commands::Modify { source, steps, options, modified_options, service, export } => {
            let text = source.read()?;
            // The original analysis is computed up front and stays valid if the rewrite fails.
            let original = analyze(&text, &options.to_options());
            print_analysis("Original", &original, false)?;

            let modifier = service.modifier()?;
            let req = ModifyRequest { text: text.clone(), modifications: steps };
            let modified = modifier.modify(&req).await?;
            let modified_analysis = analyze(&modified.text, &modified_options.to_options());

            println!("\n--- Modified text ---\n{}\n", modified.text);
            print_analysis("Modified", &modified_analysis, false)?;

            if !export.is_empty() {
                let report = ComparisonReport::new(text, original)
                    .with_modified(modified.text, modified_analysis);
                write_artifacts(&cli.out_dir, "comparison", &render(&report, &export)?)?;
            }
        }

        Commands::Summarize { source, service } => {
            let text = source.read()?;
            let summary = service.modifier()?.summarize(&text).await?;
            println!("{}", summary.summary);
        }

        Commands::Check { source, service } => {
            let text = source.read()?;
            let report = service.modifier()?.check_quality(&text).await?;
            print!("{}", display::quality(&report));
        }

        Commands::Export { source, modified, options, modified_options, format } => {
            let text = source.read()?;
            let mut report =
                ComparisonReport::new(text.clone(), analyze(&text, &options.to_options()));
            if let Some(path) = modified {
                let modified_text = fs::read_to_string(&path)
                    .with_context(|| format!("failed reading modified text: {}", path.display()))?;
                let analysis = analyze(&modified_text, &modified_options.to_options());
                report = report.with_modified(modified_text, analysis);
            }
            write_artifacts(&cli.out_dir, "comparison", &render(&report, &format)?)?;
        }
    }

    Ok(())
}
