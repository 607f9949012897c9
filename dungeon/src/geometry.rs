use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseShapeError;

/// Position of a room inside a layer
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColRow {
    pub col: usize,
    pub row: usize,
}

impl ColRow {
    #[inline(always)]
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Side of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}
impl Side {
    /// All sides, clockwise from the top
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Size of a layer, in rooms
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Shape {
    pub cols: usize,
    pub rows: usize,
}

impl Shape {
    #[inline(always)]
    #[must_use]
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Check if a room position is inside this shape
    /// ```
    /// use dungeon::{ColRow, Shape};
    ///
    /// let shape = Shape::new(3, 2);
    /// assert!(shape.contains(&ColRow::new(2, 1)));
    /// assert!(!shape.contains(&ColRow::new(3, 0)));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn contains(&self, pos: &ColRow) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    /// Number of rooms
    #[inline(always)]
    #[must_use]
    pub const fn area(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// The room next to `pos` on the given side, if it is inside the shape
    /// ```
    /// use dungeon::{ColRow, Shape, Side};
    ///
    /// let shape = Shape::new(3, 2);
    /// assert_eq!(shape.neighbour(ColRow::new(0, 0), Side::Right), Some(ColRow::new(1, 0)));
    /// assert_eq!(shape.neighbour(ColRow::new(0, 0), Side::Top), None);
    /// assert_eq!(shape.neighbour(ColRow::new(2, 1), Side::Bottom), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn neighbour(&self, pos: ColRow, side: Side) -> Option<ColRow> {
        let (col, row) = match side {
            Side::Top => match pos.row.checked_sub(1) {
                Some(row) => (pos.col, row),
                None => return None,
            },
            Side::Left => match pos.col.checked_sub(1) {
                Some(col) => (col, pos.row),
                None => return None,
            },
            Side::Right => (pos.col + 1, pos.row),
            Side::Bottom => (pos.col, pos.row + 1),
        };
        let next = ColRow { col, row };
        if self.contains(&next) {
            Some(next)
        } else {
            None
        }
    }

    /// Convert a room position to its row-major index
    ///
    /// ```
    /// use dungeon::{ColRow, Shape};
    ///
    /// let shape = Shape::new(4, 3);
    /// assert_eq!(shape.to_linear(&ColRow::new(1, 2)), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn to_linear(&self, pos: &ColRow) -> usize {
        debug_assert!(self.contains(pos));
        pos.row * self.cols + pos.col
    }

    /// Convert a row-major index back to a room position
    ///
    /// ```
    /// use dungeon::{ColRow, Shape};
    ///
    /// let shape = Shape::new(4, 3);
    /// assert_eq!(shape.from_linear(9), ColRow::new(1, 2));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn from_linear(&self, idx: usize) -> ColRow {
        debug_assert!(idx < self.area());
        ColRow {
            col: idx % self.cols,
            row: idx / self.cols,
        }
    }

    /// All room positions, in row-major order
    pub fn positions(&self) -> impl Iterator<Item = ColRow> {
        let Shape { cols, rows } = *self;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| ColRow { col, row }))
    }
}

impl From<(usize, usize)> for Shape {
    fn from((cols, rows): (usize, usize)) -> Self {
        Self { cols, rows }
    }
}
impl From<Shape> for (usize, usize) {
    fn from(Shape { cols, rows }: Shape) -> Self {
        (cols, rows)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Parse a shape from `COLSxROWS`
/// ```
/// use dungeon::Shape;
///
/// assert_eq!("10x7".parse::<Shape>().unwrap(), Shape::new(10, 7));
/// assert!("10".parse::<Shape>().is_err());
/// ```
impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cols, rows) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ParseShapeError::Format(s.to_owned()))?;
        Ok(Self {
            cols: cols.trim().parse()?,
            rows: rows.trim().parse()?,
        })
    }
}

/// Orientation of a wall.
///
/// Named after the axis along which walls of that kind are indexed:
/// a `Horizontal` wall at `(col, row)` stands between the rooms `(col - 1, row)`
/// and `(col, row)`, a `Vertical` one between `(col, row - 1)` and `(col, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Identity of a wall
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallId {
    pub orientation: Orientation,
    pub col: usize,
    pub row: usize,
}

impl WallId {
    #[inline(always)]
    #[must_use]
    pub const fn new(orientation: Orientation, col: usize, row: usize) -> Self {
        Self {
            orientation,
            col,
            row,
        }
    }

    /// The wall on the given side of a room
    /// ```
    /// use dungeon::{ColRow, Orientation, Side, WallId};
    ///
    /// let pos = ColRow::new(2, 3);
    /// assert_eq!(WallId::around(pos, Side::Left), WallId::new(Orientation::Horizontal, 2, 3));
    /// assert_eq!(WallId::around(pos, Side::Right), WallId::new(Orientation::Horizontal, 3, 3));
    /// assert_eq!(WallId::around(pos, Side::Bottom), WallId::new(Orientation::Vertical, 2, 4));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn around(pos: ColRow, side: Side) -> Self {
        let ColRow { col, row } = pos;
        match side {
            Side::Top => Self::new(Orientation::Vertical, col, row),
            Side::Bottom => Self::new(Orientation::Vertical, col, row + 1),
            Side::Left => Self::new(Orientation::Horizontal, col, row),
            Side::Right => Self::new(Orientation::Horizontal, col + 1, row),
        }
    }

    /// Check if this wall lies on the outer perimeter of a layer
    /// ```
    /// use dungeon::{Orientation, Shape, WallId};
    ///
    /// let shape = Shape::new(3, 2);
    /// assert!(WallId::new(Orientation::Horizontal, 3, 1).is_boundary(&shape));
    /// assert!(WallId::new(Orientation::Vertical, 1, 0).is_boundary(&shape));
    /// assert!(!WallId::new(Orientation::Vertical, 1, 1).is_boundary(&shape));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn is_boundary(&self, shape: &Shape) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.col == 0 || self.col == shape.cols,
            Orientation::Vertical => self.row == 0 || self.row == shape.rows,
        }
    }
}
