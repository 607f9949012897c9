use std::fmt::Display;

/// Special marker placed in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Content {
    #[default]
    NoContent,
    Altar,
    Chest,
    Portal,
}

impl Content {
    /// Placement priority, highest first
    pub const PRIORITY: [Content; 3] = [Content::Altar, Content::Chest, Content::Portal];

    /// Glyph used when drawing the room
    #[inline(always)]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Content::NoContent => ' ',
            Content::Altar => 'A',
            Content::Chest => 'C',
            Content::Portal => 'P',
        }
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Content::NoContent => "no content",
            Content::Altar => "altar",
            Content::Chest => "chest",
            Content::Portal => "portal",
        })
    }
}

/// A single cell of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Room {
    visited: bool,
    content: Content,
}

impl Room {
    /// Whether the carver already reached this room
    #[inline(always)]
    #[must_use]
    pub const fn visited(&self) -> bool {
        self.visited
    }

    #[inline(always)]
    #[must_use]
    pub const fn content(&self) -> Content {
        self.content
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn set_content(&mut self, content: Content) {
        self.content = content;
    }
}
