//! CLI entrypoint for `discover-report`.
//!
//! Parses command-line arguments, validates the input file, scans it for
//! embedded credentials, runs the extraction engine, prints a terminal
//! summary (or JSON), and optionally writes a CSV export when an output
//! directory is provided.
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use discover_report::{
    engine::Engine,
    export::save_hosts_csv,
    io::{contains_sensitive_data, read_input, read_stdin},
    report::render_summary,
};
use log::{LevelFilter, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "discover-report",
    version,
    about = "NetAlly discovery.json host reporter (Rust)"
)]
struct Args {
    /// Path to the NetAlly discovery JSON export, or '-' for stdin
    #[arg(short = 'i', long = "input", default_value = "discovery.json")]
    input: PathBuf,

    /// Path to the output directory for the CSV export
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the report as JSON instead of the terminal summary
    #[arg(long = "json")]
    json: bool,

    /// Mirror log output to this file instead of stderr
    #[arg(long = "logfile")]
    logfile: Option<PathBuf>,

    /// Skip the pre-parse scan for embedded credentials
    #[arg(long = "skip-scrub-check")]
    skip_scrub_check: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress summary output (still writes exports if -o is provided)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn init_logger(verbosity: u8, logfile: Option<&Path>) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    if let Some(path) = logfile {
        let file =
            File::create(path).with_context(|| format!("create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn verify_inputs(args: &Args) -> Result<()> {
    if is_stdin(&args.input) {
        return Ok(());
    }
    if !args.input.is_file() {
        bail!("input file does not exist: {}", args.input.display());
    }
    let is_json = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        bail!("input file must be a JSON file: {}", args.input.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logger(args.verbose, args.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }
    // Configure color policy
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    info!("starting parsing of input: {}", args.input.display());
    let contents = match if is_stdin(&args.input) {
        read_stdin()
    } else {
        read_input(&args.input)
    } {
        Ok(c) => c,
        Err(e) => {
            error!("failed to read input: {}", e);
            std::process::exit(2);
        }
    };

    if !args.skip_scrub_check && contains_sensitive_data(&contents) {
        error!(
            "potential sensitive data detected in {}; aborting",
            args.input.display()
        );
        std::process::exit(1);
    }

    let engine = Engine::new();
    let report = match engine.parse_str(&contents) {
        Ok(r) => r,
        Err(e) => {
            error!("failed to parse input: {}", e);
            std::process::exit(3);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("failed to serialize report: {}", e);
                std::process::exit(3);
            }
        }
    } else if !args.quiet {
        println!("{}", render_summary(&report));
    }

    if let Some(outdir) = args.output {
        if let Err(e) = fs::create_dir_all(&outdir) {
            error!(
                "failed to create output directory {}: {}",
                outdir.display(),
                e
            );
            std::process::exit(4);
        }
        let ts = chrono::Local::now().format("%Y.%m.%d_%H.%M.%S");
        let csv = outdir.join(format!("discover_report_hosts_{}.csv", ts));
        if let Err(e) = save_hosts_csv(&report, &csv) {
            error!("failed to write {}: {}", csv.display(), e);
            std::process::exit(5);
        }
        info!("wrote CSV export: {}", csv.display());
    }

    info!(
        "parsing completed: {} valid IPv4 addresses found",
        report.valid_ipv4_count
    );
}
