use anyhow::{bail, Result};

use crate::{search::SearchMode, HEIGHT, WIDTH};

/// The search depth used when none is given
pub const DEFAULT_DEPTH: usize = 4;
/// No game lasts longer than one ply per cell
pub const MAX_DEPTH: usize = WIDTH * HEIGHT;

/// Settings for the automated player
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EngineConfig {
    /// Plies searched below the current position
    pub depth: usize,
    pub mode: SearchMode,
    /// Print search statistics after every engine move
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            mode: SearchMode::default(),
            verbose: false,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("search depth must be at least 1");
        }
        if self.depth > MAX_DEPTH {
            bail!(
                "search depth {} exceeds the maximum of {}",
                self.depth,
                MAX_DEPTH
            );
        }
        Ok(())
    }
}
