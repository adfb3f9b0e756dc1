// render.rs - Serialize grid columns to SVG path strings
//
// One "M x y L x y ..." polyline per grid column, newline-separated in
// a flat UTF-8 buffer the host reads through ptr/len. Coordinates are
// already rounded to one decimal by the sim.

use std::fmt::Write;

use crate::sim::WaveSim;

pub struct PathBuffer {
    out: String,
    lines: usize,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            lines: 0,
        }
    }

    /// Re-encode every column from the current frame. Buffer capacity
    /// is retained across frames.
    pub fn encode(&mut self, sim: &WaveSim) {
        self.out.clear();
        self.lines = sim.cols();

        for col in 0..sim.cols() {
            if col > 0 {
                self.out.push('\n');
            }
            for row in 0..sim.rows() {
                let (x, y) = sim.drawn(col, row);
                let cmd = if row == 0 { "M" } else { " L" };
                let _ = write!(self.out, "{cmd} {x} {y}");
            }
        }
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Path string for one column.
    pub fn line(&self, i: usize) -> Option<&str> {
        if i < self.lines {
            self.out.split('\n').nth(i)
        } else {
            None
        }
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}
