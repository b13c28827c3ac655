//! Opaque line identifiers.
//!
//! A `LineId` only has to be unique and comparable; callers must not read
//! meaning into its bits.  Ids come from a [`LineIdGen`], which mixes a
//! monotonic sequence number with a seeded `SmallRng` draw.  The sequence
//! half guarantees uniqueness within one generator; the random half keeps ids
//! from two generators (one per map side) from colliding in practice, and the
//! seed keeps test runs reproducible.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:016x})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of one measurement line.  Assigned at creation; a replaced
    /// line never hands its id to its successor.
    pub struct LineId(u64);
}

/// Issues fresh [`LineId`]s.
///
/// Layout of an issued id: high 32 bits = sequence, low 32 bits = random.
pub struct LineIdGen {
    rng: SmallRng,
    seq: u32,
}

impl LineIdGen {
    /// Seed deterministically from `seed` and a per-generator `stream` number
    /// (e.g. the map side), so two generators built from the same config
    /// don't produce the same sequence.
    pub fn new(seed: u64, stream: u64) -> Self {
        let mixed = seed ^ stream.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        Self {
            rng: SmallRng::seed_from_u64(mixed),
            seq: 0,
        }
    }

    /// Next id.  Never repeats within this generator until the 32-bit
    /// sequence wraps.
    pub fn next_id(&mut self) -> LineId {
        self.seq = self.seq.wrapping_add(1);
        let salt: u32 = self.rng.r#gen();
        LineId(((self.seq as u64) << 32) | salt as u64)
    }

    /// How many ids have been issued.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.seq
    }
}
