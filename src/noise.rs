// noise.rs - Seeded 2D Perlin gradient noise
//
// Classic Perlin: gradients hashed from a shuffled permutation table,
// fade-curve interpolation between the four cell corners.
//
// Seeding policy: the 0..=255 permutation is shuffled by a downward
// Fisher-Yates walk driven by a 32-bit LCG derived from a float seed
// in [0, 1). Identical seed => identical table => identical field.

pub struct NoiseField {
    // Doubled permutation table so corner hashing never wraps.
    perm: [u8; 512],
}

// Numerical Recipes LCG constants
const LCG_A: u32 = 1_664_525;
const LCG_C: u32 = 1_013_904_223;

struct Lcg(u32);

impl Lcg {
    fn new(seed: f64) -> Self {
        Self((seed * 4_294_967_296.0) as u32)
    }

    fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        self.0 as f64 / 4_294_967_296.0
    }
}

impl NoiseField {
    /// Build the field for a seed in [0, 1).
    pub fn new(seed: f64) -> Self {
        let mut rng = Lcg::new(seed);

        let mut perm = [0u8; 256];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        for i in (1..256).rev() {
            let r = (rng.next() * (i + 1) as f64) as usize;
            perm.swap(i, r);
        }

        let mut table = [0u8; 512];
        for (i, t) in table.iter_mut().enumerate() {
            *t = perm[i & 255];
        }

        Self { perm: table }
    }

    /// Sample the field at (x, y). Pure; result is roughly in [-1, 1]
    /// but not hard-bounded.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;

        let x = x - x.floor();
        let y = y - y.floor();

        let u = fade(x);
        let v = fade(y);

        // Hash the four cell corners
        let a = self.perm[xi] as usize + yi;
        let aa = self.perm[a] as usize;
        let ab = self.perm[a + 1] as usize;
        let b = self.perm[xi + 1] as usize + yi;
        let ba = self.perm[b] as usize;
        let bb = self.perm[b + 1] as usize;

        lerp(
            v,
            lerp(
                u,
                grad(self.perm[aa], x, y),
                grad(self.perm[ba], x - 1.0, y),
            ),
            lerp(
                u,
                grad(self.perm[ab], x, y - 1.0),
                grad(self.perm[bb], x - 1.0, y - 1.0),
            ),
        )
    }
}

// Ken Perlin's fade curve: zero first and second derivative at 0 and 1
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

// Low 4 bits of the hash pick one of the fixed gradient directions;
// the z component of the 3D reference gradients is fixed at zero.
#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = NoiseField::new(0.42);
        let b = NoiseField::new(0.42);
        assert_eq!(a.sample(1.5, 2.25), b.sample(1.5, 2.25));
        assert_eq!(a.sample(-3.7, 0.1), b.sample(-3.7, 0.1));
    }

    #[test]
    fn different_seed_different_field() {
        let a = NoiseField::new(0.42);
        let b = NoiseField::new(0.73);
        assert_ne!(a.sample(1.5, 2.25), b.sample(1.5, 2.25));
    }

    #[test]
    fn sampling_is_pure() {
        let n = NoiseField::new(0.5);
        let first = n.sample(12.34, 56.78);
        for _ in 0..10 {
            assert_eq!(n.sample(12.34, 56.78), first);
        }
    }

    #[test]
    fn zero_at_lattice_points() {
        let n = NoiseField::new(0.42);
        assert_eq!(n.sample(3.0, 7.0), 0.0);
        assert_eq!(n.sample(0.0, 0.0), 0.0);
        assert_eq!(n.sample(255.0, 17.0), 0.0);
    }

    #[test]
    fn values_stay_in_sane_range() {
        let n = NoiseField::new(0.9);
        for i in 0..64 {
            for j in 0..64 {
                let v = n.sample(i as f64 * 0.37, j as f64 * 0.61);
                assert!(v.abs() < 1.6, "sample out of range: {v}");
            }
        }
    }
}
