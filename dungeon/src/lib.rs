//! Procedural multi-layer dungeon generation.
//!
//! Each layer is carved as a perfect maze with a randomized depth-first walk,
//! loosened by reopening a fraction of its inner walls, and finally populated
//! with altars, chests and portals.

use std::panic::resume_unwind;

use futures::future::join_all;
use rand::SeedableRng;
use rand_wyrand::WyRand;

mod geometry;
pub use geometry::{ColRow, Orientation, Shape, Side, WallId};

mod walls;
pub use walls::{WallSet, Walls};

mod room;
pub use room::{Content, Room};

mod layer;
pub use layer::{Layer, LayerParams};

mod content;
pub use content::ContentCounts;

mod maze;
mod tune;

mod error;
pub use error::{Error, ParseShapeError, Result};

pub mod config;
pub use config::{Config, PartialConfig};

/// An ordered stack of independently generated layers
#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    /// Seed the layers were generated from
    seed: u64,
    layers: Vec<Layer>,
}

impl Dungeon {
    /// Generate every layer in order, on the calling thread
    pub fn generate(config: &Config) -> Result<Self> {
        config.validate()?;
        let layers = config
            .layer_params()
            .enumerate()
            .map(|(i, (shape, params))| {
                log::debug!("Generating layer {i} ({shape})");
                Layer::generate(shape, &params, &mut layer_rng(config.seed, i))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            seed: config.seed,
            layers,
        })
    }

    /// Generate the layers concurrently, one task each.
    ///
    /// Must be called inside a tokio runtime. The result is identical to [`Dungeon::generate`].
    pub async fn generate_concurrent(config: &Config) -> Result<Self> {
        config.validate()?;
        let seed = config.seed;
        let layers = join_all(config.layer_params().enumerate().map(|(i, (shape, params))| {
            log::debug!("Spawning layer {i} ({shape})");
            tokio::spawn(async move { Layer::generate(shape, &params, &mut layer_rng(seed, i)) })
        }))
        .await
        .into_iter()
        .map(|joined| match joined {
            Ok(layer) => layer,
            Err(err) => match err.try_into_panic() {
                Ok(payload) => resume_unwind(payload),
                Err(err) => panic!("Layer generation task failed: {err}"),
            },
        })
        .collect::<Result<Vec<_>>>()?;
        Ok(Self { seed, layers })
    }

    #[inline(always)]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline(always)]
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline(always)]
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }
}

/// Independent random stream for the layer at `index`
fn layer_rng(seed: u64, index: usize) -> WyRand {
    WyRand::seed_from_u64(seed.wrapping_add(index as u64))
}
