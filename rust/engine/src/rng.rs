//! String-seeded deterministic random stream.
//!
//! Every shuffle in a round is driven by this generator, so the algorithm is
//! pinned here and nowhere else:
//!
//! 1. FNV-1a 64-bit hash of the seed's UTF-8 bytes.
//! 2. SplitMix64 expands that hash into four words, written little-endian
//!    into a 32-byte key.
//! 3. The key seeds a ChaCha20 stream (nonce 0, block counter 0).
//! 4. Each draw takes one `u64` (two keystream words, low word first) and
//!    maps it to `[0, 1)` as `(x >> 11) * 2^-53`.
//!
//! ```rust
//! use showdown_engine::rng::make_rng;
//!
//! let mut a = make_rng("poker-42-deck");
//! let mut b = make_rng("poker-42-deck");
//! for _ in 0..8 {
//!     let x = a();
//!     assert_eq!(x, b());
//!     assert!((0.0..1.0).contains(&x));
//! }
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the raw bytes of `s`.
pub fn fnv1a64(s: &str) -> u64 {
    s.bytes().fold(FNV_OFFSET_BASIS, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// 32-byte ChaCha key derived from a seed string.
pub fn seed_key(seed: &str) -> [u8; 32] {
    let mut state = fnv1a64(seed);
    let mut key = [0u8; 32];
    for chunk in key.chunks_exact_mut(8) {
        chunk.copy_from_slice(&splitmix64(&mut state).to_le_bytes());
    }
    key
}

/// Reproducible float stream keyed by a seed string.
#[derive(Debug, Clone)]
pub struct SeedRng {
    inner: ChaCha20Rng,
}

impl SeedRng {
    pub fn new(seed: &str) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed_key(seed)),
        }
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Generator closure over [`SeedRng`]; identical seeds yield identical streams.
pub fn make_rng(seed: &str) -> impl FnMut() -> f64 {
    let mut rng = SeedRng::new(seed);
    move || rng.next_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_matches_reference_values() {
        assert_eq!(fnv1a64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn empty_seed_is_deterministic() {
        let mut a = make_rng("");
        let mut b = make_rng("");
        let xs: Vec<f64> = (0..16).map(|_| a()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b()).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = make_rng("alpha");
        let mut b = make_rng("beta");
        let xs: Vec<f64> = (0..4).map(|_| a()).collect();
        let ys: Vec<f64> = (0..4).map(|_| b()).collect();
        assert_ne!(xs, ys);
    }
}
