use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::{classify_segments, intersect_rays, Affine2, LineHit, Vec2};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod ops;
mod points;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Apply 2D affine transforms and intersection tests to point data")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Transform a CSV of `x`,`y` points with a JSON transform program
    Apply {
        #[arg(long)]
        ops: String,
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Intersect the lines p0→p1 and p2→p3 (points as `x,y`)
    Intersect {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p0: Vec2,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p1: Vec2,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p2: Vec2,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p3: Vec2,
        /// Treat the point pairs as bounded segments instead of infinite lines
        #[arg(long)]
        segments: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Apply { ops, input, out } => apply(ops, input, out, cmd.tag),
        Action::Intersect {
            p0,
            p1,
            p2,
            p3,
            segments,
        } => intersect(p0, p1, p2, p3, segments),
        Action::Report => report(cmd.tag),
    }
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn apply(ops_path: String, input: String, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(ops = %ops_path, input, out, tag = ?tag, "apply");
    let program = ops::load(&ops_path)?;
    let m = ops::build_transform(&program)?;
    if Affine2::is_equal(&m, &Affine2::identity()) {
        tracing::info!("transform_is_identity");
    }
    tracing::info!(matrix = ?m.to_array(), det = m.determinant(), "transform_built");

    let pts = points::read_csv(&input)?;
    let moved = m.apply_to_points(&pts);
    points::write_csv(&out, &moved)?;
    tracing::info!(points = moved.len(), "points_written");

    let payload = Payload::new(json!({
        "ops_file": ops_path,
        "ops": program,
        "input": input,
        "transform": m.to_array(),
        "points": moved.len(),
    }))
    .with_tag(tag);
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

#[derive(Debug, PartialEq, Serialize)]
struct HitReport {
    kind: &'static str,
    x: Option<f64>,
    y: Option<f64>,
}

impl From<LineHit> for HitReport {
    fn from(hit: LineHit) -> Self {
        match hit {
            LineHit::Point(p) => HitReport {
                kind: "point",
                x: Some(p.x),
                y: Some(p.y),
            },
            LineHit::Parallel => HitReport {
                kind: "parallel",
                x: None,
                y: None,
            },
            LineHit::OutOfBounds => HitReport {
                kind: "out_of_bounds",
                x: None,
                y: None,
            },
        }
    }
}

fn hit_report(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, segments: bool) -> HitReport {
    if segments {
        classify_segments(p0, p1, p2, p3).into()
    } else {
        intersect_rays(p0, p1, p2, p3)
            .map_or(LineHit::Parallel, LineHit::Point)
            .into()
    }
}

fn intersect(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, segments: bool) -> Result<()> {
    let report = hit_report(p0, p1, p2, p3, segments);
    tracing::info!(segments, kind = report.kind, "intersect");
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("encoding intersection")?
    );
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_point_accepts_signed_pairs() {
        assert_eq!(parse_point("1,2").unwrap(), Vec2::new(1.0, 2.0));
        assert_eq!(parse_point(" -1.5 , 3e2 ").unwrap(), Vec2::new(-1.5, 300.0));
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("x,2").is_err());
    }

    #[test]
    fn cli_parses_intersect_with_negative_points() {
        let cmd = Cmd::try_parse_from([
            "cli", "intersect", "--p0", "-1,0", "--p1", "1,0", "--p2", "0,-1", "--p3", "0,1",
            "--segments",
        ])
        .unwrap();
        match cmd.action {
            Action::Intersect { p0, segments, .. } => {
                assert_eq!(p0, Vec2::new(-1.0, 0.0));
                assert!(segments);
            }
            _ => panic!("expected intersect"),
        }
    }

    #[test]
    fn hit_reports_distinguish_outcomes() {
        let o = Vec2::new(0.0, 0.0);
        let hit = hit_report(o, Vec2::new(4.0, 4.0), Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0), true);
        assert_eq!(
            hit,
            HitReport {
                kind: "point",
                x: Some(2.0),
                y: Some(2.0)
            }
        );
        let par = hit_report(o, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), false);
        assert_eq!(par.kind, "parallel");
        let oob = hit_report(o, Vec2::new(1.0, 1.0), Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0), true);
        assert_eq!(oob.kind, "out_of_bounds");
        // the same pair as infinite lines does meet
        let ray = hit_report(o, Vec2::new(1.0, 1.0), Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0), false);
        assert_eq!(ray.kind, "point");
    }

    #[test]
    fn apply_writes_points_and_sidecar() {
        let dir = tempdir().unwrap();
        let ops_path = dir.path().join("ops.json");
        let input = dir.path().join("in.csv");
        let out = dir.path().join("out/moved.csv");
        fs::write(
            &ops_path,
            r#"[{"op": "translate", "dx": 1, "dy": 2}, {"op": "scale", "sx": 10}]"#,
        )
        .unwrap();
        fs::write(&input, "x,y\n0,0\n1,1\n").unwrap();

        apply(
            ops_path.to_string_lossy().into_owned(),
            input.to_string_lossy().into_owned(),
            out.to_string_lossy().into_owned(),
            Some("unit".into()),
        )
        .unwrap();

        let moved = points::read_csv(out.to_str().unwrap()).unwrap();
        assert_eq!(moved, vec![Vec2::new(1.0, 2.0), Vec2::new(11.0, 12.0)]);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("out/moved.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["tag"], "unit");
        assert_eq!(prov["params"]["points"], 2);
        assert_eq!(prov["params"]["ops"][1]["op"], "scale");
    }
}
