//! The single integer hash a key supplies to the dictionary.
//!
//! Hashes are plain `i32` values, deterministic across runs and platforms.
//! Equal keys must produce equal hashes.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Deterministic integer hash of a key.
pub trait KeyHash {
    fn key_hash(&self) -> i32;
}

/// Folds a 64-bit value into 32 bits by XOR-ing the upper half into the lower.
#[inline]
fn fold64(v: u64) -> i32 {
    (v ^ (v >> 32)) as i32
}

macro_rules! impl_key_hash_widen {
    ($($t:ty),*) => {
        $(
            impl KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

macro_rules! impl_key_hash_fold {
    ($($t:ty),*) => {
        $(
            impl KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i32 {
                    fold64(*self as u64)
                }
            }
        )*
    };
}

impl_key_hash_widen!(i8, i16, i32, u8, u16);
impl_key_hash_fold!(i64, u64, isize, usize);

impl KeyHash for u32 {
    #[inline]
    fn key_hash(&self) -> i32 {
        *self as i32
    }
}

impl KeyHash for char {
    #[inline]
    fn key_hash(&self) -> i32 {
        u32::from(*self) as i32
    }
}

impl KeyHash for bool {
    #[inline]
    fn key_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

/// `h = 31 * h + unit` over the UTF-16 code units, wrapping on overflow.
impl KeyHash for str {
    fn key_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl KeyHash for String {
    #[inline]
    fn key_hash(&self) -> i32 {
        self.as_str().key_hash()
    }
}

impl<T: KeyHash + ?Sized> KeyHash for &T {
    #[inline]
    fn key_hash(&self) -> i32 {
        (**self).key_hash()
    }
}

impl<T: KeyHash + ?Sized> KeyHash for Box<T> {
    #[inline]
    fn key_hash(&self) -> i32 {
        (**self).key_hash()
    }
}

/// Adapter for keys that only implement [`std::hash::Hash`].
///
/// The value is hashed with `FxHasher` (deterministic, unseeded) and folded
/// to 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StdHash<T>(pub T);

impl<T: Hash> KeyHash for StdHash<T> {
    fn key_hash(&self) -> i32 {
        let mut h = FxHasher::default();
        self.0.hash(&mut h);
        fold64(h.finish())
    }
}

impl<T> StdHash<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for StdHash<T> {
    fn from(value: T) -> Self {
        StdHash(value)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
