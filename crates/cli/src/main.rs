// goxgrid CLI - labeled column grid generator
// Computes grid geometry from user measurements and renders it as JSON or SVG.

mod exit_codes;
mod resolve;
mod svg;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use goxgrid_config::{SettingsRecord, SettingsStore};
use goxgrid_engine::{layout, BoundingRegion, DisplayUnit, GridSpec, LayoutResult};
use resolve::{parse_artboard, resolve};

#[derive(Parser)]
#[command(name = "goxgrid")]
#[command(about = "Generate a labeled column grid: one row of columns, shared height")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the grid layout and print it as JSON
    #[command(after_help = "\
Examples:
  goxgrid layout --widths 20,30,40,20,60 --height 20
  goxgrid layout --widths 50,80 --height 25 --unit mm --gap 5
  goxgrid layout   (reuses the widths and height from the previous run)")]
    Layout {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Compute the grid layout and render it as an SVG document
    #[command(after_help = "\
Examples:
  goxgrid svg --widths 20,30,40 --height 20 -o grid.svg
  goxgrid svg --widths 12,12,24 --height 6 --unit in --font 'Helvetica'")]
    Svg {
        #[command(flatten)]
        grid: GridArgs,

        /// Output file (omit to write to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the path of the active settings file
    SettingsPath,
}

/// Grid input flags. Omitted flags fall back to the values remembered from
/// the previous run.
#[derive(Args)]
struct GridArgs {
    /// Comma-separated column widths in display units, e.g. 20,30,40
    #[arg(long)]
    widths: Option<String>,

    /// Shared column height in display units
    #[arg(long)]
    height: Option<String>,

    /// Display unit: pt, pc, in, mm, cm, px (anything else is taken as pt)
    #[arg(long, default_value = "pt")]
    unit: String,

    /// Label font size in points (default 12)
    #[arg(long)]
    font_size: Option<String>,

    /// Gap between grid and labels, in display units (default 10)
    #[arg(long)]
    gap: Option<String>,

    /// Label font name, passed through to the renderer
    #[arg(long)]
    font: Option<String>,

    /// Artboard as left,bottom,right,top in points (default 0,0,1000,1000)
    #[arg(long)]
    artboard: Option<String>,

    /// Do not remember this input for the next run
    #[arg(long)]
    no_save: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Layout { grid } => cmd_layout(grid),
        Commands::Svg { grid, output } => cmd_svg(grid, output),
        Commands::SettingsPath => cmd_settings_path(),
    };
    ExitCode::from(code)
}

fn cmd_layout(grid: GridArgs) -> u8 {
    let (result, _, _, _) = match compute(grid, &SettingsStore::new()) {
        Ok(computed) => computed,
        Err(code) => return code,
    };
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_ERROR
        }
    }
}

fn cmd_svg(grid: GridArgs, output: Option<PathBuf>) -> u8 {
    let (result, region, font, font_size_pt) = match compute(grid, &SettingsStore::new()) {
        Ok(computed) => computed,
        Err(code) => return code,
    };
    let document = svg::render(&result, region, font.as_deref(), font_size_pt);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, document) {
                eprintln!("error: cannot write {}: {e}", path.display());
                return EXIT_ERROR;
            }
            EXIT_SUCCESS
        }
        None => {
            print!("{document}");
            EXIT_SUCCESS
        }
    }
}

fn cmd_settings_path() -> u8 {
    match SettingsStore::new().active_path() {
        Some(path) => {
            println!("{}", path.display());
            EXIT_SUCCESS
        }
        None => {
            eprintln!("error: no settings location available");
            EXIT_ERROR
        }
    }
}

/// Shared pipeline: resolve input against saved settings, validate, lay the
/// grid out, and remember the input for the next run. The store is passed
/// in so the flow can run against any settings location.
fn compute(
    grid: GridArgs,
    store: &SettingsStore,
) -> Result<(LayoutResult, BoundingRegion, Option<String>, f64), u8> {
    let region = match grid.artboard.as_deref() {
        Some(text) => parse_artboard(text).map_err(|e| {
            eprintln!("error: {e}");
            EXIT_USAGE
        })?,
        None => BoundingRegion::DEFAULT,
    };

    // Unknown or misspelled units convert as identity (points).
    let unit: DisplayUnit = grid.unit.parse().unwrap_or(DisplayUnit::Unknown);

    let saved = store.load();
    let input = resolve(
        grid.widths,
        grid.height,
        grid.font_size,
        grid.gap,
        grid.font,
        saved.as_ref(),
    );

    let spec = GridSpec::from_input(
        &input.width_text,
        &input.height_text,
        &input.font_size_text,
        &input.gap_text,
        input.font.clone(),
    )
    .map_err(|e| {
        eprintln!("error: {e}");
        EXIT_USAGE
    })?;

    let result = layout(&spec, region, unit);

    // Settings are best-effort: a failed save never fails the command.
    if !grid.no_save {
        let _ = store.save(&SettingsRecord {
            width_text: Some(input.width_text),
            height_text: Some(input.height_text),
            font_name: spec.font.clone(),
            font_size_pt: Some(spec.font_size_pt),
            gap_value: Some(spec.gap_value),
        });
    }

    Ok((result, region, spec.font, spec.font_size_pt))
}
