//! Pass cache
//!
//! Hosts often redraw with unchanged parameters. The cache keeps the last
//! pass and hands it back while the config, region, and culling bound are
//! exactly equal to the previous call. Any field change regenerates.

use crate::layout::LayoutBounds;
use crate::pattern::{PatternConfig, PatternGenerator, PatternPass};
use kerfkit_core::CanvasRegion;

#[derive(Debug, Clone, PartialEq)]
struct PassKey {
    config: PatternConfig,
    region: CanvasRegion,
    bounds: LayoutBounds,
}

/// Memoizes the most recent [`PatternPass`].
///
/// The cache cannot see the generator's custom slot; call
/// [`PatternCache::invalidate`] after registering a new custom motif.
#[derive(Debug, Default)]
pub struct PatternCache {
    entry: Option<(PassKey, PatternPass)>,
    hits: u64,
    misses: u64,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached pass for these inputs, generating it on a miss.
    pub fn get_or_generate(
        &mut self,
        generator: &PatternGenerator,
        config: &PatternConfig,
        region: &CanvasRegion,
        bounds: &LayoutBounds,
    ) -> &PatternPass {
        let key = PassKey {
            config: config.clone(),
            region: *region,
            bounds: *bounds,
        };

        match self.entry.take() {
            Some((cached_key, pass)) if cached_key == key => {
                self.hits += 1;
                &self.entry.insert((cached_key, pass)).1
            }
            _ => {
                self.misses += 1;
                tracing::trace!(misses = self.misses, "pattern cache miss");
                let pass = generator.generate(config, region, bounds);
                &self.entry.insert((key, pass)).1
            }
        }
    }

    /// The cached pass, if any.
    pub fn current(&self) -> Option<&PatternPass> {
        self.entry.as_ref().map(|(_, pass)| pass)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
