use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use jira2md::{Config, Dialect, IssueDraft, Pipeline};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jira2md")]
#[command(about = "Convert Jira wiki markup to GitHub-flavored Markdown")]
struct Cli {
    /// Input file with Jira markup (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "jira2md.toml")]
    config: PathBuf,

    /// Rule chain to use: legacy or corrected (overrides the config file)
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Jira key; wraps the output into a GitHub issue body with the footer
    #[arg(long)]
    ticket: Option<String>,

    /// Issue title; with --ticket, prints the dry-run preview
    #[arg(long, requires = "ticket")]
    title: Option<String>,

    /// Render the result to HTML
    #[arg(long)]
    html: bool,

    /// Log each conversion stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// The input file, or `None` when reading stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Load the config file and apply command-line overrides.
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;
        if let Some(dialect) = self.dialect {
            config.converter.dialect = dialect;
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(exit_status(run(&cli)));
}

fn exit_status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("reading stdin")?;
            Ok(content)
        }
    }
}

/// Convert `jira` and shape it as the flags ask: plain Markdown, an issue
/// body, a dry-run preview, or HTML of any of those.
fn render(cli: &Cli, config: &Config, jira: &str) -> String {
    let pipeline = Pipeline::new(config.converter.dialect);

    let rendered = match &cli.ticket {
        Some(key) => {
            let draft = IssueDraft::from_jira(
                key,
                cli.title.as_deref().unwrap_or_default(),
                jira,
                &pipeline,
                &config.issue,
            );
            if cli.title.is_some() {
                draft.dry_run_preview()
            } else {
                draft.body
            }
        }
        None => pipeline.run(jira.into()).to_text(),
    };

    if cli.html {
        jira2md::markdown_to_html(&rendered, &config.preview)
    } else {
        rendered
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    tracing::debug!(dialect = %config.converter.dialect, "converting");

    let jira = read_input(cli)?;
    let rendered = render(cli, &config, &jira);

    match &cli.output {
        Some(output) => {
            fs::write(output, &rendered)
                .with_context(|| format!("writing {}", output.display()))?;
            tracing::info!(path = %output.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
