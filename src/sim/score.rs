//! Lives and score bookkeeping

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    initial_lives: i32,
    pub lives: i32,
    /// Rocks destroyed by missiles this run
    pub score: u64,
}

impl Score {
    pub fn new(initial_lives: i32) -> Self {
        Self {
            initial_lives,
            lives: initial_lives,
            score: 0,
        }
    }

    pub fn initial_lives(&self) -> i32 {
        self.initial_lives
    }

    pub fn lose_life(&mut self) {
        self.lives -= 1;
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives <= 0
    }

    pub fn reset(&mut self) {
        self.lives = self.initial_lives;
        self.score = 0;
    }
}
