use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    content::ContentCounts,
    error::{check_ratio, check_shape, Result},
    geometry::Shape,
    layer::LayerParams,
};

/// Layers generated when none are given
pub const DEFAULT_LAYERS_STRUCTURE: [Shape; 4] = [
    Shape::new(10, 10),
    Shape::new(7, 7),
    Shape::new(4, 4),
    Shape::new(1, 1),
];

/// Config for a dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed of the dungeon
    pub seed: u64,
    /// Size of each layer, top to bottom
    pub layers_structure: Vec<Shape>,
    /// Fraction of the optional walls to keep standing
    /// -> 0 opens every inner wall
    /// -> 1 keeps the perfect maze
    pub optional_walls_part: f64,
    /// Fraction of the rooms of each layer holding an altar
    pub altars_part: f64,
    /// Fraction of the rooms of each layer holding a chest
    pub chests_part: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            layers_structure: DEFAULT_LAYERS_STRUCTURE.to_vec(),
            optional_walls_part: 1.,
            altars_part: 0.1,
            chests_part: 0.3,
        }
    }
}

impl Config {
    /// Check every ratio lies within `[0, 1]` and every layer has a valid shape
    pub fn validate(&self) -> Result<()> {
        for shape in &self.layers_structure {
            check_shape(shape)?;
        }
        check_ratio("optional_walls_part", self.optional_walls_part)?;
        check_ratio("altars_part", self.altars_part)?;
        check_ratio("chests_part", self.chests_part)?;
        Ok(())
    }

    /// Generation parameters of each layer, in order
    pub fn layer_params(&self) -> impl Iterator<Item = (Shape, LayerParams)> + '_ {
        let layers = self.layers_structure.len();
        self.layers_structure
            .iter()
            .enumerate()
            .map(move |(i, &shape)| {
                // part * cols * rows, multiplied in that order
                let scaled =
                    |part: f64| (part * shape.cols as f64 * shape.rows as f64).floor() as usize;
                let params = LayerParams {
                    filled_part: self.optional_walls_part,
                    content: ContentCounts {
                        altars: scaled(self.altars_part),
                        chests: scaled(self.chests_part),
                        portals: portals_count(i, layers),
                    },
                };
                (shape, params)
            })
    }
}

/// Portals placed in the layer at `index` out of `layers`: one in the last layer, two elsewhere
/// ```
/// use dungeon::config::portals_count;
///
/// assert_eq!(portals_count(0, 1), 1);
/// assert_eq!(portals_count(0, 4), 2);
/// assert_eq!(portals_count(3, 4), 1);
/// ```
#[inline(always)]
#[must_use]
pub const fn portals_count(index: usize, layers: usize) -> usize {
    if index + 1 == layers {
        1
    } else {
        2
    }
}

/// Partial config for a dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Parser, Default)]
pub struct PartialConfig {
    /// Seed of the dungeon
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Size of each layer, as a comma separated list of COLSxROWS
    #[clap(long = "layers", value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers_structure: Option<Vec<Shape>>,
    /// Fraction of the optional walls to keep standing
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_walls_part: Option<f64>,
    /// Fraction of the rooms of each layer holding an altar
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altars_part: Option<f64>,
    /// Fraction of the rooms of each layer holding a chest
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chests_part: Option<f64>,
}
impl PartialConfig {
    pub fn merge(self, other: PartialConfig) -> Self {
        Self {
            seed: other.seed.or(self.seed),
            layers_structure: other.layers_structure.or(self.layers_structure),
            optional_walls_part: other.optional_walls_part.or(self.optional_walls_part),
            altars_part: other.altars_part.or(self.altars_part),
            chests_part: other.chests_part.or(self.chests_part),
        }
    }
    pub fn or_defaults(self) -> Config {
        let default = Config::default();
        Config {
            seed: self.seed.unwrap_or(default.seed),
            layers_structure: self.layers_structure.unwrap_or(default.layers_structure),
            optional_walls_part: self
                .optional_walls_part
                .unwrap_or(default.optional_walls_part),
            altars_part: self.altars_part.unwrap_or(default.altars_part),
            chests_part: self.chests_part.unwrap_or(default.chests_part),
        }
    }
}
