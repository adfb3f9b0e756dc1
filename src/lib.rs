// lib.rs - wasm boundary for the wave background engine
//
// The host page owns mounting, the rAF loop, and the DOM: it measures
// the container, forwards pointer/touch/resize events, calls tick each
// frame, then reads the path buffer and writes one `d` attribute per
// line element. The smoothed pointer accessors feed the host's CSS
// custom properties.

use wasm_bindgen::prelude::*;

mod noise;
mod render;
pub mod sim;

pub use noise::NoiseField;
pub use render::PathBuffer;
pub use sim::{Grid, PointerState, WaveConfig, WaveSim};

#[wasm_bindgen]
pub struct WaveWorld {
    sim: WaveSim,
    paths: PathBuffer,

    // Container origin in page coordinates, for event conversion
    left: f32,
    top: f32,
}

#[wasm_bindgen]
impl WaveWorld {
    /// `left`/`top` are the container's bounding-box origin. Without a
    /// seed the field is randomized per mount.
    #[wasm_bindgen(constructor)]
    pub fn new(w: f32, h: f32, left: f32, top: f32, seed: Option<f64>) -> Self {
        let seed = seed.unwrap_or_else(random_seed);
        Self {
            sim: WaveSim::new(w, h, seed),
            paths: PathBuffer::new(),
            left,
            top,
        }
    }

    /// Rebuild the lattice at new dimensions, discarding animation
    /// state. The host calls this from its resize observer.
    pub fn resize(&mut self, w: f32, h: f32, left: f32, top: f32) {
        self.left = left;
        self.top = top;
        self.sim.resize(w, h);
    }

    /// Mouse sample in page coordinates.
    pub fn pointer_move(&mut self, page_x: f32, page_y: f32, scroll_y: f32) {
        self.sim
            .pointer_move(page_x - self.left, page_y - self.top + scroll_y);
    }

    /// First touch point in client coordinates.
    pub fn touch_move(&mut self, client_x: f32, client_y: f32, scroll_y: f32) {
        self.sim
            .pointer_move(client_x - self.left, client_y - self.top + scroll_y);
    }

    /// Advance one frame and re-encode the column paths.
    pub fn tick(&mut self, time_ms: f64) {
        self.sim.tick(time_ms);
        self.paths.encode(&self.sim);
    }

    // Output buffer: newline-separated SVG path strings, one per column
    pub fn paths_ptr(&self) -> *const u8 {
        self.paths.ptr()
    }

    pub fn paths_len(&self) -> usize {
        self.paths.len()
    }

    pub fn line_count(&self) -> usize {
        self.paths.line_count()
    }

    /// Smoothed pointer position, element-local coordinates.
    pub fn pointer_x(&self) -> f32 {
        self.sim.pointer().sx
    }

    pub fn pointer_y(&self) -> f32 {
        self.sim.pointer().sy
    }

    // Tuning knobs; see WaveConfig for defaults
    pub fn set_wave_amplitude(&mut self, x: f32, y: f32) {
        self.sim.config_mut().amp_x = x;
        self.sim.config_mut().amp_y = y;
    }

    pub fn set_noise_scale(&mut self, x: f32, y: f32) {
        self.sim.config_mut().noise_scale_x = x;
        self.sim.config_mut().noise_scale_y = y;
    }

    pub fn set_time_scale(&mut self, x: f32, y: f32) {
        self.sim.config_mut().time_scale_x = x;
        self.sim.config_mut().time_scale_y = y;
    }
}

#[cfg(target_arch = "wasm32")]
fn random_seed() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_seed() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as f64 / 1.0e9
}
