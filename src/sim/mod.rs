// sim/ - Wave surface simulation
//
// A lattice of points drifts on a seeded noise field and reacts to the
// pointer through a per-point spring-damper. One tick advances the
// whole surface one frame; the host schedules ticks.

mod grid;
mod pointer;

pub use grid::Grid;
pub use pointer::PointerState;

use crate::noise::NoiseField;

/// Motion constants. Two ancestral tunings of this effect exist with
/// different amplitudes and sampling scales, so everything is a named
/// knob rather than a hardcoded constant; defaults are the 32x16 tuning.
#[derive(Clone, Copy)]
pub struct WaveConfig {
    // Lattice spacing and overscan (take effect on the next rebuild)
    pub x_gap: f32,
    pub y_gap: f32,
    pub overscan_x: f32,
    pub overscan_y: f32,

    // Noise sampling: time drift and spatial frequency per axis
    pub time_scale_x: f32,
    pub time_scale_y: f32,
    pub noise_scale_x: f32,
    pub noise_scale_y: f32,
    pub noise_gain: f32,

    // Wave displacement ellipse
    pub amp_x: f32,
    pub amp_y: f32,

    // Pointer reaction
    pub influence_min: f32,
    pub impulse_gain: f32,

    // Spring-damper integration
    pub tension: f32,
    pub friction: f32,
    pub step: f32,
    pub max_offset: f32,

    // Pointer smoothing
    pub pointer_smoothing: f32,
    pub max_pointer_speed: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            x_gap: 10.0,
            y_gap: 32.0,
            overscan_x: 200.0,
            overscan_y: 30.0,
            time_scale_x: 0.0125,
            time_scale_y: 0.005,
            noise_scale_x: 0.002,
            noise_scale_y: 0.0015,
            noise_gain: 12.0,
            amp_x: 32.0,
            amp_y: 16.0,
            influence_min: 175.0,
            impulse_gain: 0.00065,
            tension: 0.005,
            friction: 0.925,
            step: 2.0,
            max_offset: 100.0,
            pointer_smoothing: 0.1,
            max_pointer_speed: 100.0,
        }
    }
}

/// The animated wave surface.
pub struct WaveSim {
    config: WaveConfig,
    noise: NoiseField,
    grid: Grid,
    pointer: PointerState,
}

impl WaveSim {
    pub fn new(w: f32, h: f32, seed: f64) -> Self {
        Self::with_config(w, h, seed, WaveConfig::default())
    }

    pub fn with_config(w: f32, h: f32, seed: f64, config: WaveConfig) -> Self {
        Self {
            grid: Grid::new(w, h, &config),
            noise: NoiseField::new(seed),
            pointer: PointerState::new(),
            config,
        }
    }

    /// Rebuild the lattice at new dimensions. Intentionally lossy: the
    /// point count changes with size, so cursor and wave state start
    /// from zero.
    pub fn resize(&mut self, w: f32, h: f32) {
        self.grid = Grid::new(w, h, &self.config);
    }

    /// Latest pointer sample, element-local coordinates.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.record(x, y);
    }

    /// Advance one frame. `time_ms` is the host's animation clock.
    pub fn tick(&mut self, time_ms: f64) {
        self.pointer.begin_frame(
            self.config.pointer_smoothing,
            self.config.max_pointer_speed,
        );
        self.move_points(time_ms);
    }

    fn move_points(&mut self, time: f64) {
        let c = self.config;
        let (sx, sy, vs, angle) = (
            self.pointer.sx,
            self.pointer.sy,
            self.pointer.vs,
            self.pointer.a,
        );
        let radius = vs.max(c.influence_min);
        let (ix, iy) = (angle.cos(), angle.sin());

        for i in 0..self.grid.len() {
            let rx = self.grid.rest_x[i];
            let ry = self.grid.rest_y[i];

            // Ambient drift from the noise field
            let m = self.noise.sample(
                (rx as f64 + time * c.time_scale_x as f64) * c.noise_scale_x as f64,
                (ry as f64 + time * c.time_scale_y as f64) * c.noise_scale_y as f64,
            ) as f32
                * c.noise_gain;
            self.grid.wave_x[i] = m.cos() * c.amp_x;
            self.grid.wave_y[i] = m.sin() * c.amp_y;

            // Pointer impulse inside the influence radius
            let dx = rx - sx;
            let dy = ry - sy;
            let d = dx.hypot(dy);
            if d < radius {
                let s = 1.0 - d / radius;
                let f = (d * 0.001).cos() * s;
                self.grid.cur_vx[i] += ix * f * radius * vs * c.impulse_gain;
                self.grid.cur_vy[i] += iy * f * radius * vs * c.impulse_gain;
            }

            // Spring back toward rest, then friction
            self.grid.cur_vx[i] += -self.grid.cur_x[i] * c.tension;
            self.grid.cur_vy[i] += -self.grid.cur_y[i] * c.tension;
            self.grid.cur_vx[i] *= c.friction;
            self.grid.cur_vy[i] *= c.friction;

            // Integrate and clamp the excursion
            self.grid.cur_x[i] = (self.grid.cur_x[i] + self.grid.cur_vx[i] * c.step)
                .clamp(-c.max_offset, c.max_offset);
            self.grid.cur_y[i] = (self.grid.cur_y[i] + self.grid.cur_vy[i] * c.step)
                .clamp(-c.max_offset, c.max_offset);
        }
    }

    /// Drawn position of a point: rest + wave + cursor, each axis
    /// rounded to one decimal. The last point of a column ignores the
    /// cursor term so the line stays pinned at that end.
    pub fn drawn(&self, col: usize, row: usize) -> (f32, f32) {
        let i = self.grid.index(col, row);
        let pinned = row + 1 == self.grid.rows;
        let (cx, cy) = if pinned {
            (0.0, 0.0)
        } else {
            (self.grid.cur_x[i], self.grid.cur_y[i])
        };
        (
            round1(self.grid.rest_x[i] + self.grid.wave_x[i] + cx),
            round1(self.grid.rest_y[i] + self.grid.wave_y[i] + cy),
        )
    }

    pub fn cols(&self) -> usize {
        self.grid.cols
    }

    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // Test hook only: outside callers must not be able to bypass the
    // excursion clamp.
    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Lattice knobs take effect on the next resize.
    pub fn config_mut(&mut self) -> &mut WaveConfig {
        &mut self.config
    }
}

#[inline]
pub(crate) fn round1(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn energy(sim: &WaveSim) -> f64 {
        let g = sim.grid();
        (0..g.len())
            .map(|i| (g.cur_x[i] as f64).powi(2) + (g.cur_y[i] as f64).powi(2))
            .sum()
    }

    #[test]
    fn parked_pointer_leaves_field_at_rest() {
        let mut sim = WaveSim::new(400.0, 300.0, 0.42);
        // The first sample snaps smoothed and last-frame state, so a
        // pointer parked outside every influence radius has zero speed
        // forever and no impulse ever lands
        sim.pointer_move(1.0e6, 1.0e6);
        for t in 0..30 {
            sim.tick(t as f64 * 16.0);
        }
        assert_eq!(energy(&sim), 0.0);
    }

    #[test]
    fn sentinel_startup_kick_rings_down() {
        // With no input at all, the sentinel raw position (-10, 0)
        // against the zeroed last-frame position reads as motion on the
        // first frame and kicks points near the container's left edge.
        // The effect's original startup does the same; the transient
        // must decay on its own.
        let mut sim = WaveSim::new(400.0, 300.0, 0.42);
        sim.tick(0.0);
        assert!(energy(&sim) > 0.0);

        let mut e100 = 0.0;
        for t in 1..300 {
            sim.tick(t as f64 * 16.0);
            if t == 99 {
                e100 = energy(&sim);
            }
        }
        assert!(e100 > 0.0);
        assert!(energy(&sim) < e100);
    }

    #[test]
    fn pointer_sweep_excites_then_decays() {
        let mut sim = WaveSim::new(400.0, 300.0, 0.42);

        // Sweep the pointer across the field
        for t in 0..30 {
            sim.pointer_move(t as f32 * 12.0, 150.0 + t as f32 * 3.0);
            sim.tick(t as f64 * 16.0);
        }
        assert!(energy(&sim) > 0.0);

        // Park far outside every influence radius and let it ring down
        sim.pointer_move(1.0e6, 1.0e6);
        let mut e60 = 0.0;
        for t in 0..120 {
            sim.tick((30 + t) as f64 * 16.0);
            if t == 59 {
                e60 = energy(&sim);
            }
        }
        let e120 = energy(&sim);
        assert!(e60 > 0.0);
        assert!(e120 < e60, "no decay: {e120} >= {e60}");
    }

    #[test]
    fn wave_displacement_stays_inside_amplitude() {
        let mut sim = WaveSim::new(400.0, 300.0, 0.42);
        let (ax, ay) = (sim.config().amp_x, sim.config().amp_y);
        for t in 0..60 {
            sim.tick(t as f64 * 16.0);
        }
        let g = sim.grid();
        for i in 0..g.len() {
            assert!(g.wave_x[i].abs() <= ax);
            assert!(g.wave_y[i].abs() <= ay);
        }
    }

    #[test]
    fn last_row_is_pinned() {
        let mut sim = WaveSim::new(100.0, 100.0, 0.1);
        let rows = sim.rows();
        let i = sim.grid().index(2, rows - 1);
        sim.grid_mut().cur_x[i] = 50.0;
        sim.grid_mut().cur_y[i] = -40.0;

        let (x, y) = sim.drawn(2, rows - 1);
        let g = sim.grid();
        assert_eq!(x, round1(g.rest_x[i] + g.wave_x[i]));
        assert_eq!(y, round1(g.rest_y[i] + g.wave_y[i]));
    }

    #[test]
    fn drawn_coordinates_are_rounded() {
        let mut sim = WaveSim::new(200.0, 150.0, 0.7);
        sim.pointer_move(100.0, 75.0);
        for t in 0..10 {
            sim.tick(t as f64 * 16.0);
        }
        for col in 0..sim.cols() {
            for row in 0..sim.rows() {
                let (x, y) = sim.drawn(col, row);
                assert!((x * 10.0 - (x * 10.0).round()).abs() < 1e-3);
                assert!((y * 10.0 - (y * 10.0).round()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn resize_rebuilds_with_fresh_state() {
        let mut sim = WaveSim::new(400.0, 300.0, 0.42);
        for t in 0..30 {
            sim.pointer_move(t as f32 * 10.0, 150.0);
            sim.tick(t as f64 * 16.0);
        }
        sim.resize(200.0, 100.0);
        assert_eq!(energy(&sim), 0.0);
        assert_eq!(sim.cols(), (400.0f32 / 10.0).ceil() as usize + 1);
        assert_eq!(sim.rows(), (130.0f32 / 32.0).ceil() as usize + 1);
    }

    #[test]
    fn empty_grid_ticks_are_noops() {
        let mut sim = WaveSim::new(0.0, 0.0, 0.42);
        sim.pointer_move(10.0, 10.0);
        sim.tick(16.0);
        assert_eq!(sim.cols(), 0);
    }

    proptest! {
        // Arbitrary pointer event streams never push a cursor offset
        // past the clamp.
        #[test]
        fn cursor_offsets_stay_clamped(
            events in prop::collection::vec(
                (-500.0f32..1500.0, -500.0f32..1500.0),
                1..60,
            )
        ) {
            let mut sim = WaveSim::new(150.0, 120.0, 0.42);
            let limit = sim.config().max_offset;
            for (t, (x, y)) in events.iter().enumerate() {
                sim.pointer_move(*x, *y);
                sim.tick(t as f64 * 16.0);
                let g = sim.grid();
                for i in 0..g.len() {
                    prop_assert!(g.cur_x[i].abs() <= limit);
                    prop_assert!(g.cur_y[i].abs() <= limit);
                }
            }
        }
    }
}
