use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use env_logger::Target;
use log::{error, info, warn, Level};
use scripture_slides::esv::EsvClient;
use scripture_slides::layout::{paginate_all, LayoutContext, Pagination};
use scripture_slides::output::{output_filename, passage_filename};
use scripture_slides::settings::{self, Loaded, Settings};
use scripture_slides::{pdf, FontFamily, FontMetrics, Pt, SlidesError, StandardMetrics};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

const EXAMPLES: &str = r#"Examples:
  scripture-slides "John 3:16-21"
  scripture-slides "John 3:16-21" "Romans 8:28-30"
  scripture-slides --input-file references.txt
  scripture-slides "Psalm 23" --output-file my-slides.pdf
  scripture-slides "Romans 8" --font-size 72 --separate"#;

/// Generate presentation-ready PDF slides from scripture passages
#[derive(Parser, Debug)]
#[command(name = "scripture-slides", version, after_help = EXAMPLES)]
struct Cli {
    /// Scripture reference(s) to generate slides for; commas separate several in one argument
    references: Vec<String>,

    /// Read scripture references from a text file (one reference per line)
    #[arg(short = 'f', long = "input-file", value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Custom output filename (default: scripture_YYYY-MM-DD_HHMM.pdf)
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    output_file: Option<String>,

    /// Directory where PDFs will be saved (default: from the config file)
    #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Generate a separate PDF file for each passage instead of combining them
    #[arg(short = 's', long)]
    separate: bool,

    /// Exclude section headings from slides (e.g. "The Beatitudes")
    #[arg(long)]
    no_headings: bool,

    /// Font family: Helvetica, Times-Roman or Courier
    #[arg(long, value_name = "NAME")]
    font: Option<FontFamily>,

    /// Body text size in points; every other size scales with it
    #[arg(long, value_name = "SIZE")]
    font_size: Option<f32>,

    /// Open the generated PDF after creation
    #[arg(long)]
    open: bool,

    /// Log progress to stderr instead of the log file
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Split each argument at commas, dropping empty pieces
fn split_references(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|reference| !reference.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// One reference per non-blank line
fn read_reference_file(path: &Path) -> Result<Vec<String>, SlidesError> {
    let text = fs::read_to_string(path).map_err(|err| SlidesError::InputFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let references: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();
    if references.is_empty() {
        return Err(SlidesError::InputFile {
            path: path.to_path_buf(),
            reason: "file is empty, add scripture references (one per line)".to_string(),
        });
    }
    Ok(references)
}

fn collect_references(cli: &Cli) -> Result<Vec<String>> {
    let mut references = split_references(&cli.references);
    if let Some(path) = &cli.input_file {
        references.extend(read_reference_file(path)?);
    }
    if references.is_empty() {
        bail!("no scripture reference provided, usage: scripture-slides \"John 3:16-21\"");
    }
    Ok(references)
}

fn write_pdf(
    path: &Path,
    paginations: &[Pagination],
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    pdf::write_slides(paginations, ctx, metrics, &mut writer)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.flush()?;
    info!("saved {}", path.display());
    Ok(())
}

fn open_file(path: &Path) {
    let status = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).status()
    } else {
        Command::new("xdg-open").arg(path).status()
    };
    match status {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("opening {} exited with {status}", path.display()),
        Err(err) => warn!("can't open {}: {err}", path.display()),
    }
}

/// Load the settings file, or write the default one and return `None` so the
/// user can fill in their API key first
fn load_settings(config_path: &Path) -> Result<Option<Settings>> {
    match Settings::load_or_init(config_path)? {
        Loaded::Ready(settings) => {
            settings.validate(config_path)?;
            Ok(Some(settings))
        }
        Loaded::Created(path) => {
            println!("Config file created at {}", path.display());
            println!("Please add your ESV API key and run again.");
            println!("\nGet your free API key at: https://api.esv.org");
            Ok(None)
        }
    }
}

fn run(cli: Cli, sink: LogSink) -> Result<ExitCode> {
    let references = collect_references(&cli)?;
    info!("processing {} reference(s)", references.len());

    let config_path = settings::config_path()?;
    let Some(settings) = load_settings(&config_path)? else {
        return Ok(ExitCode::FAILURE);
    };

    let mut config = settings.layout_config();
    if cli.no_headings {
        config.include_headings = false;
    }
    if let Some(font) = cli.font {
        config.font_family = font;
    }
    if let Some(size) = cli.font_size {
        config.body_font_size = Pt(size);
    }
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output_directory.clone());
    let separate = cli.separate || !settings.combine_passages;
    let auto_open = cli.open || settings.auto_open;

    let client = EsvClient::new(
        &settings.api_endpoint,
        &settings.api_key,
        config.include_headings,
    )?;
    println!("Fetching {} passage(s)...", references.len());
    let mut passages = Vec::with_capacity(references.len());
    for reference in references.iter() {
        let fetched = client
            .fetch(reference)
            .with_context(|| format!("failed to fetch `{reference}`"))?;
        println!("  ✓ {}", fetched.reference);
        passages.push(fetched.into_passage(config.poetry_indent_unit));
    }

    let ctx = LayoutContext::new(&config);
    let metrics = StandardMetrics;
    let paginations = paginate_all(&passages, &ctx, &metrics)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    for pagination in paginations.iter() {
        for warning in pagination.warnings.iter() {
            warn!("{}: {warning}", pagination.reference);
            if sink == LogSink::File {
                eprintln!("Warning: {}: {warning}", pagination.reference);
            }
        }
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    println!("\nGenerating PDF(s)...");
    let mut generated = Vec::new();
    if separate {
        for pagination in paginations.iter() {
            let path = output_dir.join(passage_filename(&pagination.reference));
            write_pdf(&path, std::slice::from_ref(pagination), &ctx, &metrics)?;
            println!("  ✓ {}", path.display());
            generated.push(path);
        }
        println!("\nSuccessfully generated {} PDF(s)!", generated.len());
    } else {
        let name = output_filename(cli.output_file.as_deref(), Local::now().naive_local());
        let path = output_dir.join(name);
        write_pdf(&path, &paginations, &ctx, &metrics)?;
        println!("  ✓ {}", path.display());
        println!("\nSuccessfully generated PDF: {}", path.display());
        generated.push(path);
    }

    if auto_open {
        if let Some(first) = generated.first() {
            open_file(first);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Where log records end up
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LogSink {
    /// The log file in the config directory; the console only shows errors
    /// and layout warnings
    File,
    Stderr,
}

/// Crate records down to debug, everything else from warn
const FILE_FILTER: &str = "warn,scripture_slides=debug";

/// One log file line, e.g. `2024-03-07 09:05:00 [INFO] loaded config file`
fn log_line(now: NaiveDateTime, level: Level, message: impl Display) -> String {
    format!("{} [{level}] {message}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// `--verbose` logs to stderr. Otherwise records go to the log file, falling
/// back to stderr when the file can't be opened.
fn init_logging(verbose: bool) -> LogSink {
    let env = env_logger::Env::default();
    if verbose {
        env_logger::Builder::from_env(env.default_filter_or("info")).init();
        return LogSink::Stderr;
    }

    match settings::log_path().and_then(|path| settings::open_log(&path)) {
        Ok(file) => {
            env_logger::Builder::from_env(env.default_filter_or(FILE_FILTER))
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "{}",
                        log_line(Local::now().naive_local(), record.level(), record.args())
                    )
                })
                .target(Target::Pipe(Box::new(file)))
                .init();
            LogSink::File
        }
        Err(err) => {
            env_logger::Builder::from_env(env.default_filter_or("warn")).init();
            warn!("can't open the log file, logging to stderr: {err}");
            LogSink::Stderr
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let sink = init_logging(cli.verbose);

    match run(cli, sink) {
        Ok(code) => code,
        Err(err) => {
            if sink == LogSink::File {
                error!("{err:#}");
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
