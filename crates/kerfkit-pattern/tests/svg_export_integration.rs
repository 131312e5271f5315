// Integration tests for SVG export of kerf patterns

use kerfkit_core::{CanvasRegion, Error, MotifType};
use kerfkit_pattern::{LayoutBounds, PatternConfig, PatternGenerator, PatternPass, SvgExporter};
use tempfile::TempDir;

fn pass_for(motif: MotifType) -> PatternPass {
    let region = CanvasRegion::full(400.0, 400.0);
    let config = PatternConfig {
        motif,
        columns: 3,
        rows: 2,
        relative_width: 0.5,
        relative_height: 0.8,
    };
    PatternGenerator::new().generate(&config, &region, &LayoutBounds::for_region(&region))
}

#[test]
fn test_line_pattern_svg() {
    let svg = SvgExporter::default().to_svg(&pass_for(MotifType::Line));

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"<svg width="400" height="400" viewBox="0 0 400 400""#));
    assert!(svg.contains(r#"style="fill:white;stroke:none""#));
    assert_eq!(svg.matches("<line ").count(), 5);
    assert!(svg.contains(r#"<line x1="33.333" y1="20" x2="100" y2="180""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_element_kinds_per_motif() {
    let exporter = SvgExporter::default();

    let svg = exporter.to_svg(&pass_for(MotifType::Quad));
    assert_eq!(svg.matches("<polyline ").count(), 5);
    assert!(svg.contains("stroke-linejoin:round"));

    let svg = exporter.to_svg(&pass_for(MotifType::Curly));
    assert_eq!(svg.matches("<path ").count(), 5);
    // Five visible spans between the eight control points.
    let first_path = svg.lines().find(|l| l.starts_with("<path ")).unwrap();
    assert_eq!(first_path.matches(" C ").count(), 5);

    let svg = exporter.to_svg(&pass_for(MotifType::Ellipse));
    assert_eq!(svg.matches("<ellipse ").count(), 5);

    let svg = exporter.to_svg(&pass_for(MotifType::Custom));
    assert!(!svg.contains("<line") && !svg.contains("<polyline") && !svg.contains("<path"));
}

#[test]
fn test_every_element_unfilled() {
    let exporter = SvgExporter {
        background: None,
        ..SvgExporter::default()
    };
    let svg = exporter.to_svg(&pass_for(MotifType::Star));
    let elements: Vec<&str> = svg.lines().filter(|l| l.starts_with("<polyline")).collect();
    assert_eq!(elements.len(), 5);
    assert!(elements.iter().all(|e| e.contains("fill:none")));
    assert!(!svg.contains("<rect"));
}

#[test]
fn test_write_svg_uses_file_stem() {
    let dir = TempDir::new().unwrap();
    let pass = pass_for(MotifType::Zigzag);
    let path = SvgExporter::default().write_svg(&pass, dir.path()).unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("kerf-bending-pattern-zigzag-66.7x160.0.svg")
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, SvgExporter::default().to_svg(&pass));
}

#[test]
fn test_write_svg_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = SvgExporter::default()
        .write_svg(&pass_for(MotifType::Line), &missing)
        .unwrap_err();
    assert!(matches!(err, Error::Export(_)));
}
