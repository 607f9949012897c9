use rand::Rng;

use crate::{
    content::ContentCounts,
    error::{check_ratio, check_shape, Result},
    geometry::{ColRow, Orientation, Shape, Side, WallId},
    room::{Content, Room},
    walls::{WallSet, Walls},
};

/// Parameters for generating a single layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    /// Fraction of the optional walls to keep standing
    pub filled_part: f64,
    /// Content to place in the rooms
    pub content: ContentCounts,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            filled_part: 1.,
            content: ContentCounts::default(),
        }
    }
}

/// A rectangular grid of rooms, separated by walls
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) shape: Shape,
    pub(crate) rooms: Box<[Room]>,
    pub(crate) walls: WallSet,
    pub(crate) filled_part: f64,
    pub(crate) requested: ContentCounts,
    pub(crate) allocated: bool,
}

impl Layer {
    /// A layer with every wall standing and no room visited
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        let shape = check_shape(&Shape::new(cols, rows))?;
        Ok(Self {
            shape,
            rooms: vec![Room::default(); shape.area()].into_boxed_slice(),
            walls: WallSet::full(shape),
            filled_part: 1.,
            requested: ContentCounts::default(),
            allocated: false,
        })
    }

    /// Build a complete layer: carve the maze, open up loops, then place content
    pub fn generate<R>(shape: Shape, params: &LayerParams, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        check_ratio("optional_walls_part", params.filled_part)?;
        let mut layer = Self::new(shape.cols, shape.rows)?;
        log::debug!("{shape}: Carving maze.");
        let carved = layer.carve(rng);
        log::debug!("{shape}: Tuning with filled part {}.", params.filled_part);
        let opened = layer.tune(params.filled_part, rng)?;
        let placed = layer.allocate_content(params.content, rng)?;
        log::debug!(
            "{shape}: {carved} walls carved, {opened} reopened, {} walls standing, content {placed:?}.",
            layer.walls.len()
        );
        Ok(layer)
    }

    #[inline(always)]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.shape.cols, self.shape.rows)
    }

    #[inline(always)]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Fraction of the optional walls kept by the last tuning
    #[inline(always)]
    #[must_use]
    pub const fn filled_part(&self) -> f64 {
        self.filled_part
    }

    /// Content asked for when the rooms were allocated, before capping
    #[inline(always)]
    #[must_use]
    pub const fn requested_content(&self) -> ContentCounts {
        self.requested
    }

    #[must_use]
    pub fn wall_exists(&self, orientation: Orientation, col: usize, row: usize) -> bool {
        self.walls.contains(&WallId::new(orientation, col, row))
    }

    #[inline(always)]
    #[must_use]
    pub const fn walls(&self) -> &WallSet {
        &self.walls
    }

    #[must_use]
    pub fn room_at(&self, col: usize, row: usize) -> Option<Room> {
        let pos = ColRow::new(col, row);
        self.shape
            .contains(&pos)
            .then(|| self.rooms[self.shape.to_linear(&pos)])
    }

    /// All rooms, in row-major order
    pub fn rooms(&self) -> impl Iterator<Item = (ColRow, Room)> + '_ {
        self.shape.positions().zip(self.rooms.iter().copied())
    }

    /// Number of rooms holding the given content
    #[must_use]
    pub fn count(&self, content: Content) -> usize {
        self.rooms.iter().filter(|r| r.content() == content).count()
    }

    /// Walls standing around a room, empty if the room is outside the layer
    #[must_use]
    pub fn walls_around(&self, col: usize, row: usize) -> Walls {
        let pos = ColRow::new(col, row);
        if !self.shape.contains(&pos) {
            return Walls::empty();
        }
        Side::ALL
            .into_iter()
            .filter(|side| self.walls.contains(&WallId::around(pos, *side)))
            .map(Walls::from)
            .collect()
    }

    /// Rooms directly reachable from the given one
    pub fn passages(&self, col: usize, row: usize) -> impl Iterator<Item = ColRow> + '_ {
        let pos = ColRow::new(col, row);
        Side::ALL.into_iter().filter_map(move |side| {
            self.shape
                .neighbour(pos, side)
                .filter(|_| !self.walls.contains(&WallId::around(pos, side)))
        })
    }

    pub(crate) fn room_mut(&mut self, pos: ColRow) -> &mut Room {
        &mut self.rooms[self.shape.to_linear(&pos)]
    }

    pub(crate) fn room(&self, pos: ColRow) -> &Room {
        &self.rooms[self.shape.to_linear(&pos)]
    }
}
