//! Stream Deck+ profile generator.
//!
//! Thin wrapper over the `sdprofile` library: parse arguments, set up
//! logging, run one build and print its report.
#![forbid(unsafe_code)]

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use sdprofile::builder::{build_to_file, build_to_file_async};
use sdprofile::cli::{BuildArgs, Cli, Commands, IconArgs, PresetArgs, resolve_output};
use sdprofile::config::{ProfileConfig, load_config, save_config};
use sdprofile::error::{ProfileError, Result};
use sdprofile::icon::{IconRasterizer, IconRenderer};
use sdprofile::ids::IdGenerator;
use sdprofile::logging::init_logging;
use sdprofile::package::BuildReport;
use sdprofile::presets::Preset;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.robot, cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Build(args) => cmd_build(cli, args).await,
        Commands::Preset(args) => cmd_preset(cli, args).await,
        Commands::Icon(args) => cmd_icon(cli, args),
    }
}

async fn cmd_build(cli: &Cli, args: &BuildArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let path = resolve_output(args.output.as_deref(), &config.name);
    let report = build(cli, &config, &path).await?;
    print_report(cli, &report)
}

async fn cmd_preset(cli: &Cli, args: &PresetArgs) -> Result<()> {
    let preset = Preset::from(args.name);
    let config = preset.load()?;

    if let Some(export) = &args.export {
        save_config(&config, export)?;
        return print_output(
            cli,
            &ExportReport {
                preset: preset.name(),
                path: export,
            },
            &format!("Exported {preset} to {}", export.display()),
        );
    }

    let path = resolve_output(args.output.as_deref(), &config.name);
    let report = build(cli, &config, &path).await?;
    print_report(cli, &report)
}

fn cmd_icon(cli: &Cli, args: &IconArgs) -> Result<()> {
    let png = IconRenderer::new().render_by_name(&args.symbol, &args.palette, args.label.as_deref())?;
    std::fs::write(&args.output, &png).map_err(|source| ProfileError::Write {
        path: args.output.clone(),
        source,
    })?;
    info!(path = %args.output.display(), bytes = png.len(), "Wrote icon");
    print_output(
        cli,
        &IconReport {
            path: &args.output,
            size: png.len(),
        },
        &format!("Wrote {} ({} bytes)", args.output.display(), png.len()),
    )
}

async fn build(cli: &Cli, config: &ProfileConfig, path: &Path) -> Result<BuildReport> {
    let mut ids = IdGenerator::secure();
    if cli.sequential {
        build_to_file(config, path, &mut ids, &IconRenderer::new())
    } else {
        let renderer: Arc<dyn IconRasterizer> = Arc::new(IconRenderer::new());
        build_to_file_async(config, path, &mut ids, renderer).await
    }
}

#[derive(Serialize)]
struct ExportReport<'a> {
    preset: &'static str,
    path: &'a Path,
}

#[derive(Serialize)]
struct IconReport<'a> {
    path: &'a Path,
    size: usize,
}

fn print_report(cli: &Cli, report: &BuildReport) -> Result<()> {
    let summary = format!(
        "Wrote {} ({} pages, {} actions, {} icons, {} KB)",
        report.path.display(),
        report.pages,
        report.actions,
        report.icons,
        report.size.div_ceil(1024)
    );
    print_output(cli, report, &summary)
}

fn print_output<T: Serialize>(cli: &Cli, value: &T, human: &str) -> Result<()> {
    if cli.use_compact_json() {
        println!("{}", serde_json::to_string(value)?);
    } else if cli.use_json() {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{human}");
    }
    Ok(())
}

fn output_error(cli: &Cli, error: &ProfileError) {
    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!("{json:#}");
    } else {
        eprintln!("Error: {error}");
        if let Some(suggestion) = error.suggestion() {
            eprintln!("Hint: {suggestion}");
        }
    }
}
