use bitflags::bitflags;

use crate::geometry::{Orientation, Shape, Side, WallId};

bitflags! {
    /// Walls standing around a room
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Walls: u8 {
        const Top    = 0b1000;
        const Left   = 0b0100;
        const Bottom = 0b0010;
        const Right  = 0b0001;
    }
}

impl From<Side> for Walls {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Walls::Top,
            Side::Right => Walls::Right,
            Side::Bottom => Walls::Bottom,
            Side::Left => Walls::Left,
        }
    }
}

/// The walls currently standing in a layer.
///
/// Stored as two dense grids, one per orientation: `(cols + 1) x rows`
/// horizontal walls and `cols x (rows + 1)` vertical ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallSet {
    shape: Shape,
    horizontal: Box<[bool]>,
    vertical: Box<[bool]>,
    standing: usize,
}

impl WallSet {
    /// A wall set with every wall of the grid standing
    /// ```
    /// use dungeon::{Shape, WallSet};
    ///
    /// let walls = WallSet::full(Shape::new(3, 2));
    /// assert_eq!(walls.len(), 4 * 2 + 3 * 3);
    /// ```
    pub fn full(shape: Shape) -> Self {
        let horizontal = vec![true; (shape.cols + 1) * shape.rows].into_boxed_slice();
        let vertical = vec![true; shape.cols * (shape.rows + 1)].into_boxed_slice();
        Self {
            shape,
            standing: horizontal.len() + vertical.len(),
            horizontal,
            vertical,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Slot of a wall in its grid, `None` if the wall is outside the layer
    fn slot(&self, wall: &WallId) -> Option<(Orientation, usize)> {
        let Shape { cols, rows } = self.shape;
        match wall.orientation {
            Orientation::Horizontal if wall.col <= cols && wall.row < rows => Some((
                Orientation::Horizontal,
                wall.row * (cols + 1) + wall.col,
            )),
            Orientation::Vertical if wall.col < cols && wall.row <= rows => {
                Some((Orientation::Vertical, wall.row * cols + wall.col))
            }
            _ => None,
        }
    }

    /// Check if a wall is standing
    #[must_use]
    pub fn contains(&self, wall: &WallId) -> bool {
        match self.slot(wall) {
            Some((Orientation::Horizontal, idx)) => self.horizontal[idx],
            Some((Orientation::Vertical, idx)) => self.vertical[idx],
            None => false,
        }
    }

    /// Remove a wall, returning whether it was standing
    pub fn remove(&mut self, wall: &WallId) -> bool {
        let cell = match self.slot(wall) {
            Some((Orientation::Horizontal, idx)) => &mut self.horizontal[idx],
            Some((Orientation::Vertical, idx)) => &mut self.vertical[idx],
            None => return false,
        };
        let was_standing = std::mem::replace(cell, false);
        if was_standing {
            self.standing -= 1;
        }
        was_standing
    }

    /// Number of standing walls
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.standing
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.standing == 0
    }

    /// Standing walls, horizontal ones first, each grid in row-major order
    pub fn iter(&self) -> impl Iterator<Item = WallId> + '_ {
        let Shape { cols, .. } = self.shape;
        let horizontal = self
            .horizontal
            .iter()
            .enumerate()
            .filter(|(_, standing)| **standing)
            .map(move |(idx, _)| {
                WallId::new(Orientation::Horizontal, idx % (cols + 1), idx / (cols + 1))
            });
        let vertical = self
            .vertical
            .iter()
            .enumerate()
            .filter(|(_, standing)| **standing)
            .map(move |(idx, _)| WallId::new(Orientation::Vertical, idx % cols, idx / cols));
        horizontal.chain(vertical)
    }
}
