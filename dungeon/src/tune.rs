use rand::Rng;

use crate::{
    error::{check_ratio, Result},
    geometry::WallId,
    layer::Layer,
};

impl Layer {
    /// Standing walls that are not on the outer perimeter
    pub fn optional_walls(&self) -> Vec<WallId> {
        self.walls
            .iter()
            .filter(|w| !w.is_boundary(&self.shape))
            .collect()
    }

    /// Reopen optional walls, keeping `ceil(optional * filled_part)` of them standing.
    ///
    /// The removed walls are sampled uniformly without replacement. Only walls
    /// are removed, so every room stays reachable. Returns the number of walls removed.
    pub fn tune<R>(&mut self, filled_part: f64, rng: &mut R) -> Result<usize>
    where
        R: Rng + ?Sized,
    {
        let filled_part = check_ratio("optional_walls_part", filled_part)?;
        let optional = self.optional_walls();
        let keep = (optional.len() as f64 * filled_part).ceil() as usize;
        let amount = optional.len() - keep.min(optional.len());
        log::trace!(
            "{}: Removing {amount} of {} optional walls.",
            self.shape,
            optional.len()
        );

        for idx in rand::seq::index::sample(rng, optional.len(), amount) {
            let was_standing = self.walls.remove(&optional[idx]);
            debug_assert!(was_standing);
        }
        self.filled_part = filled_part;
        Ok(amount)
    }
}
