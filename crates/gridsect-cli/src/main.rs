use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use gridsect_algo::compute_sections;
use gridsect_core::geom::{GridRect, Vec2};
use gridsect_core::model::Scene;
use gridsect_core::polygon::Section;
use gridsect_core::report::SectionReport;

#[derive(Debug, Parser)]
#[command(name = "gridsect")]
#[command(about = "Partition a bounded coordinate grid with one or two lines.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the sections a scene's lines cut the grid into.
    Sections {
        input: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Resolve a point to the section that contains it.
    Hit {
        input: PathBuf,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
}

#[derive(Debug, Serialize)]
struct SectionsOutput {
    generated_at: String,
    grid: GridRect,
    report: SectionReport,
}

#[derive(Debug, Serialize)]
struct HitOutput {
    point: Vec2,
    section_index: Option<usize>,
    section: Option<Section>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sections { input, report } => sections(&input, report.as_deref()),
        Command::Hit { input, x, y } => hit(&input, Vec2::new(x, y)),
    }
}

fn sections(input: &Path, report_path: Option<&Path>) -> Result<()> {
    let scene = load_scene(input)?;
    let report = compute_sections(&scene.line_set, &scene.grid);

    let output = SectionsOutput {
        generated_at: chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
        grid: scene.grid,
        report,
    };
    let json = serde_json::to_string_pretty(&output).context("serialize report")?;

    if let Some(path) = report_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, &json).with_context(|| format!("write report: {path:?}"))?;
    } else {
        println!("{json}");
    }

    Ok(())
}

fn hit(input: &Path, point: Vec2) -> Result<()> {
    let scene = load_scene(input)?;
    let report = compute_sections(&scene.line_set, &scene.grid);
    if report.is_empty() {
        bail!("scene has no sections yet; finish drawing the line(s) first");
    }

    let section_index = report.hit(point);
    let output = HitOutput {
        point,
        section_index,
        section: section_index.map(|i| report.sections[i].clone()),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("serialize hit result")?
    );

    Ok(())
}

fn load_scene(input: &Path) -> Result<Scene> {
    ensure_input_file(input)?;
    let raw = std::fs::read_to_string(input).with_context(|| format!("read scene: {input:?}"))?;
    let scene: Scene =
        serde_json::from_str(&raw).with_context(|| format!("parse scene JSON: {input:?}"))?;
    scene
        .validate()
        .with_context(|| format!("invalid scene: {input:?}"))?;
    Ok(scene)
}

fn ensure_input_file(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) => {
            if meta.is_file() {
                Ok(())
            } else {
                bail!("input is not a file: {input:?}");
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("input not found: {input:?} (cwd: {cwd:?})");
        }
        Err(err) => Err(err).with_context(|| format!("stat input: {input:?}")),
    }
}
