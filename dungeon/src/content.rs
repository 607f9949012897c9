use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Error, Result},
    layer::Layer,
    room::Content,
};

/// Number of rooms per kind of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentCounts {
    pub altars: usize,
    pub chests: usize,
    pub portals: usize,
}

impl ContentCounts {
    #[inline(always)]
    #[must_use]
    pub const fn get(&self, content: Content) -> usize {
        match content {
            Content::Altar => self.altars,
            Content::Chest => self.chests,
            Content::Portal => self.portals,
            Content::NoContent => 0,
        }
    }

    fn get_mut(&mut self, content: Content) -> Option<&mut usize> {
        match content {
            Content::Altar => Some(&mut self.altars),
            Content::Chest => Some(&mut self.chests),
            Content::Portal => Some(&mut self.portals),
            Content::NoContent => None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.altars + self.chests + self.portals
    }
}

impl Layer {
    /// Place content in a random subset of the rooms.
    ///
    /// Rooms are taken from a random permutation: first the altars, then the
    /// chests, then the portals. When the rooms run out the remaining requests
    /// are dropped. Every other room is tagged `NoContent`.
    /// Returns what was actually placed.
    pub fn allocate_content<R>(&mut self, requested: ContentCounts, rng: &mut R) -> Result<ContentCounts>
    where
        R: Rng + ?Sized,
    {
        if self.allocated {
            return Err(Error::ContentAlreadyAllocated);
        }

        let mut order: Vec<usize> = (0..self.rooms.len()).collect();
        order.shuffle(rng);
        let mut order = order.into_iter();

        let mut placed = ContentCounts::default();
        for content in Content::PRIORITY {
            for idx in order.by_ref().take(requested.get(content)) {
                log::trace!("{}: {content} at {:?}", self.shape, self.shape.from_linear(idx));
                self.rooms[idx].set_content(content);
                if let Some(n) = placed.get_mut(content) {
                    *n += 1;
                }
            }
        }
        for idx in order {
            self.rooms[idx].set_content(Content::NoContent);
        }

        if placed != requested {
            log::debug!(
                "{}: Requested {requested:?} but only {} rooms available.",
                self.shape,
                self.rooms.len()
            );
        }
        self.requested = requested;
        self.allocated = true;
        Ok(placed)
    }
}
