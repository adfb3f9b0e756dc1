// pointer.rs - Pointer sample smoothing and velocity tracking
//
// Input handlers only write the latest raw sample; all derived state
// (smoothed position, speed, motion angle) is advanced once per tick.

pub struct PointerState {
    // Latest raw sample, element-local coordinates
    pub x: f32,
    pub y: f32,

    // Raw sample at the previous frame
    pub lx: f32,
    pub ly: f32,

    // Low-pass filtered position
    pub sx: f32,
    pub sy: f32,

    // Frame-to-frame speed, raw and smoothed
    pub v: f32,
    pub vs: f32,

    // Motion angle, radians
    pub a: f32,

    set: bool,
}

impl PointerState {
    /// Starts at an off-screen sentinel so the field idles until the
    /// first real input arrives.
    pub fn new() -> Self {
        Self {
            x: -10.0,
            y: 0.0,
            lx: 0.0,
            ly: 0.0,
            sx: 0.0,
            sy: 0.0,
            v: 0.0,
            vs: 0.0,
            a: 0.0,
            set: false,
        }
    }

    /// Store a raw sample. The first sample since construction snaps
    /// the smoothed and last-frame positions to it, so there is no
    /// visible interpolation from the sentinel.
    pub fn record(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;

        if !self.set {
            self.sx = x;
            self.sy = y;
            self.lx = x;
            self.ly = y;
            self.set = true;
        }
    }

    /// Advance derived state one frame.
    pub fn begin_frame(&mut self, smoothing: f32, max_speed: f32) {
        self.sx += (self.x - self.sx) * smoothing;
        self.sy += (self.y - self.sy) * smoothing;

        let dx = self.x - self.lx;
        let dy = self.y - self.ly;
        let d = dx.hypot(dy);

        self.v = d;
        self.vs += (d - self.vs) * smoothing;
        self.vs = self.vs.min(max_speed);

        self.lx = self.x;
        self.ly = self.y;

        self.a = dy.atan2(dx);
    }

    pub fn is_set(&self) -> bool {
        self.set
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
