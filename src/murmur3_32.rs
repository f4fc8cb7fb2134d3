//! Murmur3, 32-bit variant.
//!
//! The hash walks the input as 4-byte little-endian blocks, folds the 0–3
//! trailing bytes in as a partial block, then applies a finalization
//! (avalanche) step that removes the residual bias of the mixing
//! constants. A caller-supplied 32-bit seed perturbs the result
//! deterministically, giving a family of independent hash functions over
//! the same input.
//!
//! Two fixed-width fast paths hash one or two `u64` keys without building
//! an intermediate buffer. They byte-reverse each value before mixing,
//! reproducing the Java reference implementation's `Long.reverseBytes`
//! behavior, and are bit-identical to feeding the equivalent 8/16-byte
//! buffer through [`Hash::hash_with_seed`].

use core::fmt;

/// Seed used by the entry points that do not take an explicit one.
pub const DEFAULT_SEED: u32 = 104_729;

/// Value callers may reserve to mean "no hash" / absent key.
///
/// Taken from a 64-bit linear congruential generator. The hash function
/// itself never produces or consumes this value; it is purely a convention
/// for callers that need a null-key sentinel alongside their fingerprints.
pub const NULL_HASHCODE: u64 = 2_862_933_555_777_941_757;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe6546b64;

/// Output of the Murmur3 32-bit hash function.
///
/// Stored as the four little-endian bytes of the final hash value; use
/// [`Hash::to_u32`] for the integer form most callers want.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; 4]);

impl Hash {
    /// Hashes a byte buffer with [`DEFAULT_SEED`].
    pub const fn hash(data: &[u8]) -> Self {
        Self::hash_with_seed(data, DEFAULT_SEED)
    }

    /// Hashes a byte buffer with the given seed.
    pub const fn hash_with_seed(data: &[u8], seed: u32) -> Self {
        Self::from_u32(hash_to_u32_with_seed(data, seed))
    }

    /// Hashes `len` bytes of `data` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds `data.len()`. An out-of-range
    /// window is a caller contract violation and is never silently
    /// truncated.
    pub fn hash_range_with_seed(data: &[u8], offset: usize, len: usize, seed: u32) -> Self {
        Self::hash_with_seed(&data[offset..offset + len], seed)
    }

    /// Hashes a single `u64` key with [`DEFAULT_SEED`].
    pub const fn hash_u64(v0: u64) -> Self {
        Self::hash_u64_with_seed(v0, DEFAULT_SEED)
    }

    /// Hashes a single `u64` key with the given seed.
    ///
    /// Fast path for 8-byte keys: no buffer is built. The key is
    /// byte-reversed and mixed as two 32-bit halves (low half first),
    /// producing the same value as
    /// `Hash::hash_with_seed(&v0.to_be_bytes(), seed)`.
    pub const fn hash_u64_with_seed(v0: u64, seed: u32) -> Self {
        let r0 = v0.swap_bytes();

        let mut hash = seed;
        hash = mix32(r0 as u32, hash);
        hash = mix32((r0 >> 32) as u32, hash);

        Self::from_u32(fmix32(8, hash))
    }

    /// Hashes a pair of `u64` keys with [`DEFAULT_SEED`].
    pub const fn hash_u64_pair(v0: u64, v1: u64) -> Self {
        Self::hash_u64_pair_with_seed(v0, v1, DEFAULT_SEED)
    }

    /// Hashes a pair of `u64` keys with the given seed.
    ///
    /// Fast path for 16-byte keys; equivalent to hashing the
    /// concatenation of `v0.to_be_bytes()` and `v1.to_be_bytes()`.
    pub const fn hash_u64_pair_with_seed(v0: u64, v1: u64, seed: u32) -> Self {
        let r0 = v0.swap_bytes();
        let r1 = v1.swap_bytes();

        let mut hash = seed;
        hash = mix32(r0 as u32, hash);
        hash = mix32((r0 >> 32) as u32, hash);
        hash = mix32(r1 as u32, hash);
        hash = mix32((r1 >> 32) as u32, hash);

        Self::from_u32(fmix32(16, hash))
    }

    /// Constructs a hash from its integer value.
    pub const fn from_u32(hash: u32) -> Self {
        Hash(hash.to_le_bytes())
    }

    /// Returns the hash as a 32-bit integer.
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Constructs a hash from its little-endian byte representation.
    pub const fn from_byte_array(bytes: [u8; 4]) -> Self {
        Hash(bytes)
    }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; 4] {
        self.0
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_byte_array(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.to_u32())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.to_u32())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <[u8; 4]>::deserialize(deserializer)?;
        Ok(Hash::from_byte_array(bytes))
    }
}

#[cfg(feature = "bincode")]
impl bincode::Encode for Hash {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(self.as_byte_array(), encoder)
    }
}

#[cfg(feature = "bincode")]
impl<C> bincode::Decode<C> for Hash {
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: [u8; 4] = <[u8; 4]>::decode(decoder)?;
        Ok(Hash::from_byte_array(bytes))
    }
}

#[cfg(feature = "bincode")]
impl<'de, C> bincode::BorrowDecode<'de, C> for Hash {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: &[u8] = bincode::BorrowDecode::borrow_decode(decoder)?;
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| bincode::error::DecodeError::Other("Incorrect byte length".into()))?;
        Ok(Hash::from_byte_array(bytes))
    }
}

/// Hashes a byte buffer with [`DEFAULT_SEED`], returning the bare integer.
pub const fn hash_to_u32(data: &[u8]) -> u32 {
    hash_to_u32_with_seed(data, DEFAULT_SEED)
}

/// Hashes a byte buffer with the given seed, returning the bare integer.
pub const fn hash_to_u32_with_seed(data: &[u8], seed: u32) -> u32 {
    let mut hash = seed;
    let nblocks = data.len() / 4;

    // Body: complete 4-byte little-endian blocks.
    let mut i = 0;
    while i < nblocks {
        let k = u32::from_le_bytes([
            data[i * 4],
            data[i * 4 + 1],
            data[i * 4 + 2],
            data[i * 4 + 3],
        ]);
        hash = mix32(k, hash);
        i += 1;
    }

    // Tail: the 0-3 bytes left over, OR-folded at their little-endian
    // positions. The partial block is scrambled and XORed in, but the
    // accumulator does NOT get the rotate/multiply/add that full blocks
    // apply; the reference algorithm specifies this asymmetry.
    let base = nblocks * 4;
    let tail = data.len() - base;
    let mut k1 = 0u32;
    if tail >= 3 {
        k1 ^= (data[base + 2] as u32) << 16;
    }
    if tail >= 2 {
        k1 ^= (data[base + 1] as u32) << 8;
    }
    if tail >= 1 {
        k1 ^= data[base] as u32;

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(R1);
        k1 = k1.wrapping_mul(C2);
        hash ^= k1;
    }

    fmix32(data.len() as u32, hash)
}

/// One mix round: scrambles block `k` and folds it into the accumulator.
const fn mix32(k: u32, hash: u32) -> u32 {
    let k = k.wrapping_mul(C1);
    let k = k.rotate_left(R1);
    let k = k.wrapping_mul(C2);

    let hash = hash ^ k;
    let hash = hash.rotate_left(R2);
    hash.wrapping_mul(M).wrapping_add(N)
}

/// Finalization: folds in the total length and avalanches the accumulator.
const fn fmix32(length: u32, hash: u32) -> u32 {
    let mut hash = hash ^ length;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(0x85ebca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2ae35);
    hash ^ (hash >> 16)
}
