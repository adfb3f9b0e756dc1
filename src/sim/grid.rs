// grid.rs - Wave point lattice
//
// Structure-of-Arrays layout for cache-friendly per-frame iteration.
// Column-major: point (col, row) lives at index col * rows + row.
// Rest positions are fixed at construction; wave displacement is
// overwritten every frame; cursor offset/velocity persist across frames.

use super::WaveConfig;

pub struct Grid {
    pub cols: usize,
    pub rows: usize,

    // Rest position (never changes after construction)
    pub rest_x: Vec<f32>,
    pub rest_y: Vec<f32>,

    // Ambient noise displacement
    pub wave_x: Vec<f32>,
    pub wave_y: Vec<f32>,

    // Pointer spring-damper state
    pub cur_x: Vec<f32>,
    pub cur_y: Vec<f32>,
    pub cur_vx: Vec<f32>,
    pub cur_vy: Vec<f32>,
}

impl Grid {
    /// Build a fresh lattice for a container of the given size.
    ///
    /// The lattice covers an oversized virtual canvas centered on the
    /// container, so animated excursions near the edges never reveal
    /// gaps. A degenerate container yields an empty grid.
    pub fn new(w: f32, h: f32, config: &WaveConfig) -> Self {
        if w <= 0.0 || h <= 0.0 {
            return Self::empty();
        }

        let o_width = w + config.overscan_x;
        let o_height = h + config.overscan_y;

        let total_lines = (o_width / config.x_gap).ceil() as usize;
        let total_points = (o_height / config.y_gap).ceil() as usize;

        let x_start = (w - config.x_gap * total_lines as f32) / 2.0;
        let y_start = (h - config.y_gap * total_points as f32) / 2.0;

        let cols = total_lines + 1;
        let rows = total_points + 1;
        let n = cols * rows;

        let mut rest_x = Vec::with_capacity(n);
        let mut rest_y = Vec::with_capacity(n);
        for i in 0..cols {
            for j in 0..rows {
                rest_x.push(x_start + config.x_gap * i as f32);
                rest_y.push(y_start + config.y_gap * j as f32);
            }
        }

        Self {
            cols,
            rows,
            rest_x,
            rest_y,
            wave_x: vec![0.0; n],
            wave_y: vec![0.0; n],
            cur_x: vec![0.0; n],
            cur_y: vec![0.0; n],
            cur_vx: vec![0.0; n],
            cur_vy: vec![0.0; n],
        }
    }

    pub fn empty() -> Self {
        Self {
            cols: 0,
            rows: 0,
            rest_x: Vec::new(),
            rest_y: Vec::new(),
            wave_x: Vec::new(),
            wave_y: Vec::new(),
            cur_x: Vec::new(),
            cur_y: Vec::new(),
            cur_vx: Vec::new(),
            cur_vy: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }
}
