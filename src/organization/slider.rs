// src/organization/slider.rs
use serde::Serialize;

pub const INTERVAL_MS: u64 = 4000;

/// Rotation state for a division card's images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub count: usize,
    pub index: usize,
    pub interval_ms: u64,
    pub auto_advance: bool,
    #[serde(skip)]
    paused: bool,
}

impl Slider {
    pub fn new(count: usize) -> Self {
        Slider {
            count,
            index: 0,
            interval_ms: INTERVAL_MS,
            auto_advance: count > 1,
            paused: false,
        }
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }

    /// Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.index = index;
        }
    }

    /// Timer callback. Returns whether the slide moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || !self.auto_advance {
            return false;
        }
        self.next();
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.paused = false;
    }
}
