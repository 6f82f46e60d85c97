// Small seeded PRNG used to pick welcome templates.
//
// Not cryptographically secure. Seeded once per controller; tests pass a fixed
// seed so template choice is reproducible.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

const NONZERO_SEED: u64 = 0x9E3779B97F4A7C15;

impl Prng {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state.
        let seed = if seed == 0 { NONZERO_SEED } else { seed };
        Self { state: seed }
    }

    /// Seed from a float in `[0, 1)`, as produced by `Math.random()`.
    pub fn from_unit_f64(x: f64) -> Self {
        Self::new(x.to_bits() ^ NONZERO_SEED.rotate_left(17))
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Index in `[0, len)`. Returns 0 for `len == 0`.
    pub fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // Multiply-shift keeps the bias negligible for tiny `len`.
        ((self.next_u32() as u64 * len as u64) >> 32) as usize
    }
}
