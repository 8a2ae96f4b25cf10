use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ductgeom::duct::{
    can_be_next_point_in_duct_polyline, joint_angle_deg, nearest_joint_angle,
    possible_points_for_next_duct_in_polyline, suggest_possible_leg_placement,
    DUCT_JOINT_ANGLES_DEG,
};
use ductgeom::outline::{calculate_rect_union, rounded_path, to_svg_path};
use ductgeom::{KernelCfg, Point, Rect};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "ductgeom")]
#[command(about = "Duct-layout geometry kernel: routing suggestions and outlines")]
struct Cmd {
    /// Candidate ray length for routing (world units at zoom 1)
    #[arg(long)]
    ray_length: Option<f64>,
    /// Allowed deviation from a canonical joint angle, in degrees
    #[arg(long)]
    angle_tolerance: Option<f64>,
    /// Corner inset for rounded outlines
    #[arg(long)]
    margin: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Suggest the next duct endpoint for a cursor position
    Suggest {
        /// Committed points, "x,y;x,y;..."
        #[arg(long)]
        points: String,
        /// Cursor, "x,y"
        #[arg(long)]
        cursor: String,
        /// Viewport zoom
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Check whether a point can extend a duct polyline
    Check {
        #[arg(long)]
        points: String,
        #[arg(long)]
        next: String,
    },
    /// Stair-step outline of a rect stack
    Union(RectSource),
    /// Write the rounded outline of a rect stack as SVG (plus provenance sidecar)
    Path {
        #[command(flatten)]
        source: RectSource,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and default configuration as JSON
    Report,
}

#[derive(Args)]
struct RectSource {
    /// Inline rects, "x,y,w,h;..."
    #[arg(long, conflicts_with = "input")]
    rects: Option<String>,
    /// CSV file with columns x,y,width,height
    #[arg(long)]
    input: Option<PathBuf>,
}

impl RectSource {
    fn load(&self) -> Result<Vec<Rect>> {
        match (&self.rects, &self.input) {
            (Some(inline), None) => input::parse_rects(inline),
            (None, Some(path)) => input::read_rects_csv(path),
            _ => bail!("pass exactly one of --rects or --input"),
        }
    }
}

#[derive(Serialize)]
struct Xy {
    x: f64,
    y: f64,
}

impl From<Point> for Xy {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

fn xy_list(points: &[Point]) -> Vec<Xy> {
    points.iter().copied().map(Xy::from).collect()
}

#[derive(Serialize)]
struct SuggestOut {
    candidates: Vec<Xy>,
    suggestion: Option<Xy>,
    joint_angle_deg: Option<f64>,
}

#[derive(Serialize)]
struct CheckOut {
    accepted: bool,
    joint_angle_deg: Option<f64>,
    nearest_canonical_deg: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = kernel_cfg(&cmd);
    match cmd.action {
        Action::Suggest {
            points,
            cursor,
            scale,
        } => suggest(&cfg, &points, &cursor, scale),
        Action::Check { points, next } => check(&cfg, &points, &next),
        Action::Union(source) => union(&source),
        Action::Path { source, out } => path(&cfg, &source, &out),
        Action::Report => report(&cfg),
    }
}

fn kernel_cfg(cmd: &Cmd) -> KernelCfg {
    let mut cfg = KernelCfg::default();
    if let Some(v) = cmd.ray_length {
        cfg.duct_ray_length = v;
    }
    if let Some(v) = cmd.angle_tolerance {
        cfg.angle_tolerance_deg = v;
    }
    if let Some(v) = cmd.margin {
        cfg.corner_margin = v;
    }
    cfg
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn suggest(cfg: &KernelCfg, points: &str, cursor: &str, scale: f64) -> Result<()> {
    let points = input::parse_points(points)?;
    let cursor = input::parse_point(cursor)?;
    tracing::info!(points = points.len(), scale, "suggest");
    let candidates = possible_points_for_next_duct_in_polyline(&points, cursor, cfg, scale);
    let suggestion = suggest_possible_leg_placement(cursor, &points, cfg, scale);
    let angle = suggestion.and_then(|s| joint_angle_deg(&points, s));
    print_json(&SuggestOut {
        candidates: xy_list(&candidates),
        suggestion: suggestion.map(Xy::from),
        joint_angle_deg: angle,
    })
}

fn check(cfg: &KernelCfg, points: &str, next: &str) -> Result<()> {
    let points = input::parse_points(points)?;
    let next = input::parse_point(next)?;
    let accepted = can_be_next_point_in_duct_polyline(&points, next, cfg);
    let angle = joint_angle_deg(&points, next);
    tracing::info!(points = points.len(), accepted, "check");
    print_json(&CheckOut {
        accepted,
        joint_angle_deg: angle,
        nearest_canonical_deg: angle.and_then(|a| nearest_joint_angle(a, cfg.angle_tolerance_deg)),
    })
}

fn union(source: &RectSource) -> Result<()> {
    let rects = source.load()?;
    tracing::info!(rects = rects.len(), "union");
    print_json(&xy_list(&calculate_rect_union(&rects)))
}

fn path(cfg: &KernelCfg, source: &RectSource, out: &Path) -> Result<()> {
    let rects = source.load()?;
    tracing::info!(rects = rects.len(), out = %out.display(), "path");
    let outline = calculate_rect_union(&rects);
    let d = to_svg_path(&rounded_path(&outline, cfg.corner_margin));
    if d.is_empty() {
        bail!("outline is empty; nothing to write");
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, svg_document(&outline, &d))
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = provenance::Sidecar::new(
        "path",
        serde_json::json!({
            "rects": rects.len(),
            "margin": cfg.corner_margin,
            "vertices": outline.len(),
        }),
        out,
    )
    .write()?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn svg_document(outline: &[Point], d: &str) -> String {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in outline {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n  \
         <path d=\"{d}\" fill=\"none\" stroke=\"black\"/>\n</svg>\n",
        min_x,
        min_y,
        max_x - min_x,
        max_y - min_y
    )
}

fn report(cfg: &KernelCfg) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "kernel_version": ductgeom::VERSION,
        "cfg": {
            "hit_threshold": cfg.hit_threshold,
            "duct_ray_length": cfg.duct_ray_length,
            "angle_tolerance_deg": cfg.angle_tolerance_deg,
            "corner_margin": cfg.corner_margin,
            "select_bbox_size": cfg.select_bbox_size,
        },
        "joint_angles_deg": DUCT_JOINT_ANGLES_DEG,
    });
    print_json(&obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "ductgeom",
            "--margin",
            "5",
            "suggest",
            "--points",
            "0,0;100,0",
            "--cursor",
            "150,100",
        ])
        .unwrap();
        assert_eq!(kernel_cfg(&cmd).corner_margin, 5.0);
        assert!(matches!(cmd.action, Action::Suggest { scale, .. } if scale == 1.0));

        let clash = Cmd::try_parse_from([
            "ductgeom", "union", "--rects", "0,0,1,1", "--input", "a.csv",
        ]);
        assert!(clash.is_err());
    }

    #[test]
    fn path_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("svg").join("outline.svg");
        let source = RectSource {
            rects: Some("0,0,100,50;0,50,200,50".to_string()),
            input: None,
        };
        path(&KernelCfg::default(), &source, &out).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("viewBox=\"0 0 200 100\""));
        assert!(svg.contains("M 10 0 L 90 0 Q 100 0 100 10"));
        assert!(dir.path().join("svg").join("outline.provenance.json").exists());
    }

    #[test]
    fn empty_source_is_rejected() {
        let source = RectSource {
            rects: None,
            input: None,
        };
        assert!(source.load().is_err());
        let empty = RectSource {
            rects: Some(String::new()),
            input: None,
        };
        let dir = tempdir().unwrap();
        assert!(path(&KernelCfg::default(), &empty, &dir.path().join("x.svg")).is_err());
    }
}
