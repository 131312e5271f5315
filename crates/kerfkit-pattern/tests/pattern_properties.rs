// Property tests for pattern generation

use kerfkit_core::{CanvasRegion, Direction, MotifType, Point};
use kerfkit_pattern::{layout_cells, render_motif, LayoutBounds, PatternConfig, PatternGenerator};
use proptest::prelude::*;

fn motif_strategy() -> impl Strategy<Value = MotifType> {
    prop::sample::select(MotifType::ALL.to_vec())
}

fn config_strategy() -> impl Strategy<Value = PatternConfig> {
    (
        motif_strategy(),
        2u32..=40,
        2u32..=16,
        0u32..=9,
        0u32..=9,
    )
        .prop_map(|(motif, columns, rows, rw, rh)| PatternConfig {
            motif,
            columns,
            rows,
            relative_width: rw as f64 / 10.0,
            relative_height: rh as f64 / 10.0,
        })
}

proptest! {
    #[test]
    fn prop_generation_is_deterministic(
        config in config_strategy(),
        width in 50.0f64..1000.0,
        height in 50.0f64..1000.0,
    ) {
        let region = CanvasRegion::full(width, height);
        let bounds = LayoutBounds::for_region(&region);
        let generator = PatternGenerator::new();
        let a = generator.generate(&config, &region, &bounds);
        let b = generator.generate(&config, &region, &bounds);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.file_stem(), b.file_stem());
    }

    #[test]
    fn prop_cell_count_bounded(
        columns in 2u32..=60,
        rows in 2u32..=16,
        width in 50.0f64..1000.0,
        height in 50.0f64..1000.0,
    ) {
        let region = CanvasRegion::full(width, height);
        let cells = layout_cells(&region, columns, rows, &LayoutBounds::for_region(&region));
        prop_assert!(cells.len() <= (columns * rows) as usize);
        // Even columns never overflow; at most the last row of each odd column is lost.
        prop_assert!(cells.len() >= (columns * rows - columns / 2) as usize);
        prop_assert!(cells.iter().all(|c| c.center.x > 0.0 && c.center.y < height));
    }

    #[test]
    fn prop_symmetric_motifs_ignore_direction(
        motif in prop::sample::select(vec![MotifType::Quad, MotifType::Ellipse, MotifType::Star]),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.0f64..100.0,
        h in 0.0f64..100.0,
    ) {
        let c = Point::new(x, y);
        prop_assert_eq!(
            render_motif(motif, c, w, h, Direction::Forward),
            render_motif(motif, c, w, h, Direction::Reverse)
        );
    }

    #[test]
    fn prop_wave_motifs_mirror_about_center(
        motif in prop::sample::select(vec![MotifType::Line, MotifType::Zigzag, MotifType::Curly]),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.0f64..100.0,
        h in 0.0f64..100.0,
    ) {
        let c = Point::new(x, y);
        let fwd = render_motif(motif, c, w, h, Direction::Forward).points();
        let rev = render_motif(motif, c, w, h, Direction::Reverse).points();
        prop_assert_eq!(fwd.len(), rev.len());
        for (a, b) in fwd.iter().zip(rev.iter()) {
            prop_assert!(((a.x - c.x) + (b.x - c.x)).abs() < 1e-9);
            prop_assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn prop_closed_motifs_close_exactly(
        motif in prop::sample::select(vec![MotifType::Quad, MotifType::Star]),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.0f64..100.0,
        h in 0.0f64..100.0,
    ) {
        let pts = render_motif(motif, Point::new(x, y), w, h, Direction::Forward).points();
        prop_assert_eq!(pts.first(), pts.last());
    }
}
