use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decomp::{DecompCfg, Engine, InputVertex};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "decomp-cli")]
#[command(about = "Convex decomposition of simple polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decompose a polygon into convex pieces, writing id-lists as JSON.
    Decompose {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Check a polygon's preconditions without running the DP.
    Validate {
        #[arg(long)]
        input: String,
    },
}

/// On-disk polygon fixture: `{"vertices": [{"x":.., "y":..}, ...]}`.
/// Ids are assigned by input order, matching `InputVertex::id`.
#[derive(Deserialize)]
struct PolygonFile {
    vertices: Vec<RawVertex>,
}

#[derive(Deserialize)]
struct RawVertex {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct DecomposeOutput {
    pieces: Vec<Vec<usize>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Decompose { input, out } => decompose(input, out),
        Action::Validate { input } => validate(input),
    }
}

fn load_polygon(input: &str) -> Result<Vec<InputVertex>> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let parsed: PolygonFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {input} as polygon JSON"))?;
    Ok(parsed
        .vertices
        .into_iter()
        .enumerate()
        .map(|(id, v)| InputVertex { id, x: v.x, y: v.y })
        .collect())
}

fn decompose(input: String, out: Option<String>) -> Result<()> {
    tracing::info!(input, out = ?out, "decompose");
    let vertices = load_polygon(&input)?;
    let engine = Engine::new(vertices, DecompCfg::default())
        .context("polygon failed precondition checks")?;
    let pieces = engine.decompose().context("decomposition failed")?;
    let payload = DecomposeOutput { pieces };
    let rendered = serde_json::to_string_pretty(&payload)?;

    match out {
        Some(out_path) => {
            let path = Path::new(&out_path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn validate(input: String) -> Result<()> {
    tracing::info!(input, "validate");
    let vertices = load_polygon(&input)?;
    match Engine::new(vertices, DecompCfg::default()) {
        Ok(_) => {
            println!("ok");
            Ok(())
        }
        Err(e) => {
            println!("invalid: {e}");
            std::process::exit(1);
        }
    }
}
