use rand::Rng;

use crate::{
    geometry::{ColRow, Side, WallId},
    layer::Layer,
};

impl Layer {
    /// Carve a perfect maze with a randomized depth-first walk from `(0, 0)`.
    ///
    /// Every room ends up visited and exactly one wall is removed per tree edge.
    /// Returns the number of walls removed, `cols * rows - 1` on a fresh layer.
    pub fn carve<R>(&mut self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let mut current = ColRow::new(0, 0);
        self.room_mut(current).mark_visited();
        let mut stack = Vec::with_capacity(self.shape.area());
        let mut removed = 0;

        loop {
            // unvisited neighbours of the current room
            let mut candidates = [(Side::Top, current); 4];
            let mut len = 0;
            for side in Side::ALL {
                if let Some(next) = self.shape.neighbour(current, side) {
                    if !self.room(next).visited() {
                        candidates[len] = (side, next);
                        len += 1;
                    }
                }
            }

            if len > 0 {
                let (side, next) = candidates[rng.gen_range(0..len)];
                log::trace!("{:?} -> {:?}", current, next);
                self.room_mut(next).mark_visited();
                stack.push(current);
                let was_standing = self.walls.remove(&WallId::around(current, side));
                debug_assert!(was_standing, "tree edges cross standing walls only");
                removed += 1;
                current = next;
            } else if let Some(prev) = stack.pop() {
                current = prev;
            } else {
                break;
            }
        }

        debug_assert!(self.rooms.iter().all(|r| r.visited()));
        removed
    }
}
