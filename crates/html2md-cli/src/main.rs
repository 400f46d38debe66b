use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use html2md::{ConvertOptions, MarkdownConverter};
use log::{info, LevelFilter};

/// Convert an HTML document to Markdown.
#[derive(Debug, Parser)]
#[command(name = "html2md", version, about, long_about = None)]
struct Cli {
    /// HTML file to convert (UTF-8)
    input: PathBuf,

    /// Markdown file to write [default: INPUT with an .md extension]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nested list level
    #[arg(long, default_value_t = 2)]
    list_indent: usize,

    /// Additional element to drop before conversion (repeatable)
    #[arg(long = "strip", value_name = "TAG")]
    strip: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Do not print the confirmation line
    #[arg(short, long)]
    quiet: bool,
}

/// Absolute form of `path` for identity checks. Files that do not exist yet
/// resolve through their parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

impl Cli {
    fn output_path(&self) -> Result<PathBuf> {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("md"));
        if resolve(&output) == resolve(&self.input) {
            bail!(
                "Output path would overwrite the input: {}",
                self.input.display()
            );
        }
        Ok(output)
    }

    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions {
            list_indent: self.list_indent,
            ..Default::default()
        };
        for tag in &self.strip {
            let tag = tag.to_lowercase();
            if !options.strip_tags.contains(&tag) {
                options.strip_tags.push(tag);
            }
        }
        options
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let output = cli.output_path()?;
    let converter = MarkdownConverter::with_options(cli.options());

    info!(
        "converting {} -> {}",
        cli.input.display(),
        output.display()
    );
    converter
        .convert_file(&cli.input, &output)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    if !cli.quiet {
        println!("Converted: {}", output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
