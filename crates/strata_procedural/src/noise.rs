//! # Simplex Noise
//!
//! Deterministic 2D coherent noise for height fields.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`WorldSeed`], this implementation produces exactly the
//! same values on any platform. The permutation table is shuffled with a
//! seeded ChaCha stream, never with ambient randomness.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Largest value strictly below 1.0, the top of the `[0, 1)` noise range.
pub const UNIT_NOISE_MAX: f64 = 1.0 - f64::EPSILON;

/// Seed for deterministic generation.
///
/// All randomness of one generation call derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for a specific purpose.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0 ^ purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0x5EED_CAFE_F00D_D00D)
    }
}

/// Gradient directions for the 2D lattice (8 compass directions).
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
];

/// 2D simplex noise generator.
///
/// [`SimplexNoise::sample`] is in `[-1, 1]`; [`SimplexNoise::sample_unit`]
/// remaps into `[0, 1)` for height fields.
#[derive(Clone)]
pub struct SimplexNoise {
    /// 256-entry permutation, doubled so lookups never wrap.
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Skew factor: (sqrt(3) - 1) / 2.
    const F2: f64 = 0.366_025_403_784_438_6;
    /// Unskew factor: (3 - sqrt(3)) / 6.
    const G2: f64 = 0.211_324_865_405_187_1;
    /// Scales the summed corner contributions to roughly [-1, 1].
    const OUTPUT_SCALE: f64 = 70.0;

    /// Creates a noise generator from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self { perm }
    }

    #[inline]
    fn hash(&self, i: i32, j: i32) -> usize {
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        usize::from(self.perm[ii + usize::from(self.perm[jj])])
    }

    #[inline]
    fn corner(&self, dx: f64, dy: f64, hash: usize) -> f64 {
        let falloff = 0.5 - dx * dx - dy * dy;
        if falloff <= 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRADIENTS[hash & 7];
        let f2 = falloff * falloff;
        f2 * f2 * (gx * dx + gy * dy)
    }

    /// Samples noise at `(x, y)`. Result is in `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * Self::F2;
        let i = (x + skew).floor() as i32;
        let j = (y + skew).floor() as i32;

        // Far-off inputs saturate the cell; the lattice hash only reads the low 8 bits.
        let unskew = (f64::from(i) + f64::from(j)) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Lower or upper triangle of the skewed cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let n0 = self.corner(x0, y0, self.hash(i, j));
        let n1 = self.corner(x1, y1, self.hash(i.wrapping_add(i1), j.wrapping_add(j1)));
        let n2 = self.corner(x2, y2, self.hash(i.wrapping_add(1), j.wrapping_add(1)));

        (Self::OUTPUT_SCALE * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    /// Samples noise remapped into `[0, 1)`.
    #[must_use]
    pub fn sample_unit(&self, x: f64, y: f64) -> f64 {
        ((self.sample(x, y) + 1.0) * 0.5).clamp(0.0, UNIT_NOISE_MAX)
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise").finish_non_exhaustive()
    }
}
