//! # KerfKit Pattern
//!
//! Procedural kerf bending patterns: rows and columns of cut-slot motifs
//! that let rigid sheet material flex once laser cut.
//!
//! ## Components
//!
//! - **Layout**: grid cells with alternating column direction, a half-cell
//!   vertical interleave on odd columns, and an explicit culling bound
//! - **Motifs**: line, quad, zigzag, curly, ellipse, and star shapes
//! - **Renderer**: dispatch by motif type with a registrable custom slot
//! - **Pattern**: one complete layout-and-render pass plus export naming
//! - **Cache**: memoizes the last pass for redundant redraws
//! - **SVG Export**: stroked vector output

pub mod cache;
pub mod layout;
pub mod motifs;
pub mod path;
pub mod pattern;
pub mod renderer;
pub mod svg_export;

pub use cache::PatternCache;
pub use layout::{cell_size, layout_cells, GridCell, LayoutBounds};
pub use path::MotifPath;
pub use pattern::{KerfSize, PatternConfig, PatternGenerator, PatternPass, FILE_PREFIX};
pub use renderer::{render_motif, FnMotif, MotifGenerator, MotifRenderer};
pub use svg_export::SvgExporter;
