//! SVG export
//!
//! Serializes a [`PatternPass`] onto a fixed-size canvas as stroked,
//! unfilled SVG elements, one per motif.

use crate::path::MotifPath;
use crate::pattern::PatternPass;
use kerfkit_core::{catmull_rom_segments, ExportError, Point, Result};
use std::path::{Path, PathBuf};

/// Stroke and canvas settings for SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgExporter {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Fill color of a full-canvas background rectangle, if any
    pub background: Option<String>,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 400.0,
            stroke_width: 1.0,
            stroke_color: "black".to_string(),
            background: Some("white".to_string()),
        }
    }
}

impl SvgExporter {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    fn style(&self) -> String {
        format!(
            "fill:none;stroke:{};stroke-width:{}",
            self.stroke_color,
            fmt_num(self.stroke_width)
        )
    }

    /// Render the pass as a complete SVG document.
    pub fn to_svg(&self, pass: &PatternPass) -> String {
        let w = fmt_num(self.canvas_width);
        let h = fmt_num(self.canvas_height);
        let style = self.style();

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">
"#
        ));

        if let Some(background) = &self.background {
            svg.push_str(&format!(
                r#"<rect x="0" y="0" width="{w}" height="{h}" style="fill:{background};stroke:none" />
"#
            ));
        }

        for path in &pass.paths {
            if let Some(element) = path_element(path, &style) {
                svg.push_str(&element);
                svg.push('\n');
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write `{file_stem}.svg` into `dir` and return its path.
    pub fn write_svg(&self, pass: &PatternPass, dir: &Path) -> Result<PathBuf> {
        if !dir.is_dir() {
            return Err(ExportError::DirectoryNotFound {
                path: dir.display().to_string(),
            }
            .into());
        }

        let path = dir.join(format!("{}.svg", pass.file_stem()));
        std::fs::write(&path, self.to_svg(pass))?;
        tracing::info!(path = %path.display(), motifs = pass.len(), "exported SVG");
        Ok(path)
    }
}

fn path_element(path: &MotifPath, style: &str) -> Option<String> {
    match path {
        MotifPath::Line { from, to } => Some(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="{}" />"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            style
        )),
        MotifPath::Polyline { points, .. } => {
            if points.is_empty() {
                return None;
            }
            Some(format!(
                r#"<polyline points="{}" style="{};stroke-linejoin:round" />"#,
                points_attr(points),
                style
            ))
        }
        MotifPath::Curve { control_points } => {
            let d = curve_data(control_points)?;
            Some(format!(
                r#"<path d="{}" style="{};stroke-linejoin:round" />"#,
                d, style
            ))
        }
        MotifPath::Ellipse {
            center,
            width,
            height,
        } => Some(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" style="{}" />"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(width.abs() / 2.0),
            fmt_num(height.abs() / 2.0),
            style
        )),
        MotifPath::Empty => None,
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Path data for a Catmull-Rom curve as chained cubic Béziers.
fn curve_data(control_points: &[Point]) -> Option<String> {
    let segments = catmull_rom_segments(control_points);
    let first = segments.first()?;

    let mut d = format!("M {} {}", fmt_num(first.from.x), fmt_num(first.from.y));
    for seg in &segments {
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            fmt_num(seg.ctrl1.x),
            fmt_num(seg.ctrl1.y),
            fmt_num(seg.ctrl2.x),
            fmt_num(seg.ctrl2.y),
            fmt_num(seg.to.x),
            fmt_num(seg.to.y)
        ));
    }
    Some(d)
}

/// Up to three decimals with trailing zeros removed.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
