//! `luic` — command-line compiler for LUI stylesheets.
//!
//! Resolves the entry file's import graph, compiles it, and writes the
//! generated CSS next to the input (or wherever `--output` points).

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use lui::{ClassNameFormat, CompileOptions, ImportResolver, LuiError, RenderMode, compile};

#[derive(Parser, Debug)]
#[command(name = "luic", version, about = "Compile LUI stylesheets to CSS")]
struct Cli {
    /// Entry stylesheet (.lui)
    input: PathBuf,

    /// Output path; defaults to the input with a .css extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class-name format: minimalistic, standard or full-name
    #[arg(long, default_value = "minimalistic")]
    class_format: ClassNameFormat,

    /// Render mode: minimalistic, standard or pretty
    #[arg(long, default_value = "standard")]
    mode: RenderMode,

    /// Emit @layer blocks for imported files
    #[arg(long)]
    layers: bool,

    /// Keep min-width media conditions instead of rewriting to max-width
    #[arg(long)]
    mobile_first: bool,

    /// Root directory for TEMPLATE directives (defaults to ./assets)
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let started = Instant::now();
    match run(&cli) {
        Ok(()) => {
            log::info!("finished in {:.3}s", started.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), LuiError> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("css"));
    let output_stem = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output")
        .to_string();

    let templates_root = match &cli.templates {
        Some(root) => root.clone(),
        None => std::env::current_dir()?.join("assets"),
    };

    let mut resolver = ImportResolver::new(templates_root, output_stem);
    let resolved = resolver.resolve(&cli.input)?;
    for file in &resolved.files {
        log::debug!("source file: {}", file.display());
    }

    let options = CompileOptions {
        class_format: cli.class_format,
        mode: cli.mode,
        layers: cli.layers,
        mobile_first: cli.mobile_first,
    };
    let result = compile(&resolved.text, &options)?;

    for (name, value) in &result.variables {
        log::debug!("variable {name} = {value}");
    }

    std::fs::write(&output, &result.css)?;
    log::info!("CSS written to {}", output.display());
    log::info!("generated {} CSS records", result.record_count);
    Ok(())
}
