//! Motif Renderer
//!
//! Dispatches a [`MotifType`] to the matching shape function. The six
//! named motifs are fixed; the custom slot delegates to whatever
//! [`MotifGenerator`] has been registered.

use crate::motifs;
use crate::path::MotifPath;
use kerfkit_core::{Direction, MotifType, Point};
use std::fmt;

/// Anything that can turn a cell's center, size, and direction into a path.
pub trait MotifGenerator {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn generate(&self, center: Point, width: f64, height: f64, direction: Direction)
        -> MotifPath;
}

/// Adapts a closure into a [`MotifGenerator`].
pub struct FnMotif<F> {
    name: String,
    f: F,
}

impl<F> FnMotif<F>
where
    F: Fn(Point, f64, f64, Direction) -> MotifPath,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> MotifGenerator for FnMotif<F>
where
    F: Fn(Point, f64, f64, Direction) -> MotifPath,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(
        &self,
        center: Point,
        width: f64,
        height: f64,
        direction: Direction,
    ) -> MotifPath {
        (self.f)(center, width, height, direction)
    }
}

/// Renders motifs by type, with an optional generator in the custom slot.
#[derive(Default)]
pub struct MotifRenderer {
    custom: Option<Box<dyn MotifGenerator>>,
}

impl MotifRenderer {
    /// A renderer with an empty custom slot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom(mut self, generator: impl MotifGenerator + 'static) -> Self {
        self.register_custom(generator);
        self
    }

    /// Install a custom generator, returning the one it replaces.
    pub fn register_custom(
        &mut self,
        generator: impl MotifGenerator + 'static,
    ) -> Option<Box<dyn MotifGenerator>> {
        tracing::debug!(name = generator.name(), "registered custom motif");
        self.custom.replace(Box::new(generator))
    }

    pub fn clear_custom(&mut self) -> Option<Box<dyn MotifGenerator>> {
        self.custom.take()
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.custom.as_ref().map(|g| g.name())
    }

    /// Render one motif. Total for every input; an empty custom slot
    /// yields [`MotifPath::Empty`].
    pub fn render(
        &self,
        motif: MotifType,
        center: Point,
        width: f64,
        height: f64,
        direction: Direction,
    ) -> MotifPath {
        match motif {
            MotifType::Line => motifs::line(center, width, height, direction),
            MotifType::Quad => motifs::quad(center, width, height, direction),
            MotifType::Zigzag => motifs::zigzag(center, width, height, direction),
            MotifType::Curly => motifs::curly(center, width, height, direction),
            MotifType::Ellipse => motifs::ellipse(center, width, height, direction),
            MotifType::Star => motifs::star(center, width, height, direction),
            MotifType::Custom => match &self.custom {
                Some(generator) => generator.generate(center, width, height, direction),
                None => {
                    tracing::trace!("no custom motif registered");
                    MotifPath::Empty
                }
            },
        }
    }
}

impl fmt::Debug for MotifRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotifRenderer")
            .field("custom", &self.custom_name())
            .finish()
    }
}

/// Render one motif with no custom generator installed.
pub fn render_motif(
    motif: MotifType,
    center: Point,
    width: f64,
    height: f64,
    direction: Direction,
) -> MotifPath {
    MotifRenderer::new().render(motif, center, width, height, direction)
}
