use crate::common::GameError;

/// Board construction parameters: playable size and mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: usize,
    height: usize,
    mines: usize,
}

impl GameConfig {
    /// Validate and build a configuration. Rejects empty axes and mine
    /// counts that would fill every interior cell, since mine placement
    /// retries until it finds a free cell.
    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self, GameError> {
        if width == 0 {
            return Err(GameError::InvalidWidth);
        }
        if height == 0 {
            return Err(GameError::InvalidHeight);
        }
        if mines >= width * height {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Number of playable cells inside the sentinel border.
    pub fn interior_cells(&self) -> usize {
        self.width * self.height
    }

    /// Row stride of the bordered grid.
    pub(crate) fn span(&self) -> usize {
        self.width + 2
    }

    /// Total bordered-grid length, border ring included.
    pub(crate) fn grid_len(&self) -> usize {
        (self.width + 2) * (self.height + 2)
    }
}
