//! Identifier synthesis for archive entries and manifest fields.
//!
//! Four token shapes are produced, all from the same injected random source:
//!
//! | Token | Shape | Used for |
//! |-------|-------|----------|
//! | dashed | `8-4-4-4-12` lowercase hex (UUID v4) | action and page linkage ids |
//! | compact | 32 lowercase hex | archive root folder |
//! | folder | 26 Crockford base32 + `Z` | per-page folder |
//! | image | 26 uppercase hex | icon file basenames |
//!
//! No dedup check is performed; uniqueness rests on the entropy of the
//! source.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use uuid::Uuid;

/// Crockford base32 alphabet: digits and uppercase letters without I, L, O, U.
pub const FOLDER_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of random characters in a folder token (before the sentinel).
pub const FOLDER_RANDOM_CHARS: usize = 26;

/// Trailing sentinel every folder token ends with.
pub const FOLDER_SENTINEL: char = 'Z';

/// Length of an image token.
pub const IMAGE_TOKEN_LEN: usize = 26;

/// Bytes needed to supply 5 bits for each random folder character (130 bits).
const FOLDER_SOURCE_BYTES: usize = (FOLDER_RANDOM_CHARS * 5).div_ceil(8);

/// Generator for every identifier a build needs.
///
/// The random source is injected so tests can substitute a seeded generator;
/// production code uses [`IdGenerator::secure`], backed by the operating
/// system's CSPRNG.
#[derive(Debug)]
pub struct IdGenerator<R = OsRng> {
    rng: R,
}

impl IdGenerator<OsRng> {
    /// Generator backed by the operating system's secure random source.
    pub const fn secure() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for IdGenerator<OsRng> {
    fn default() -> Self {
        Self::secure()
    }
}

impl<R: RngCore + CryptoRng> IdGenerator<R> {
    /// Wrap an arbitrary cryptographically strong source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn random_128(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Canonical dashed UUID v4 string, e.g. `b2196ffd-b7d0-4530-8771-d8cfadc1ca8c`.
    pub fn dashed(&mut self) -> String {
        let uuid = uuid::Builder::from_random_bytes(self.random_128()).into_uuid();
        let token = uuid.hyphenated().to_string();
        trace!(token = %token, "Generated dashed token");
        token
    }

    /// 32 lowercase hex characters with no separators.
    pub fn compact(&mut self) -> String {
        let uuid: Uuid = uuid::Builder::from_random_bytes(self.random_128()).into_uuid();
        let token = uuid.simple().to_string();
        trace!(token = %token, "Generated compact token");
        token
    }

    /// 27-character page folder token: 26 base32 symbols plus `Z`.
    ///
    /// Each symbol consumes exactly five fresh bits, so the mapping onto the
    /// 32-symbol alphabet is unbiased.
    pub fn folder(&mut self) -> String {
        let mut source = [0u8; FOLDER_SOURCE_BYTES];
        self.rng.fill_bytes(&mut source);

        let mut token = String::with_capacity(FOLDER_RANDOM_CHARS + 1);
        let mut acc: u32 = 0;
        let mut bits = 0;
        let mut bytes = source.iter();
        while token.len() < FOLDER_RANDOM_CHARS {
            if bits < 5 {
                // 17 bytes always cover the 130 bits consumed below.
                let next = bytes.next().copied().unwrap_or_default();
                acc = ((acc << 8) | u32::from(next)) & 0xFFFF;
                bits += 8;
            }
            bits -= 5;
            let index = ((acc >> bits) & 0x1F) as usize;
            token.push(char::from(FOLDER_ALPHABET[index]));
        }
        token.push(FOLDER_SENTINEL);
        trace!(token = %token, "Generated folder token");
        token
    }

    /// 26 uppercase hex characters taken from a fresh 128-bit value.
    pub fn image(&mut self) -> String {
        let mut token = hex::encode_upper(self.random_128());
        token.truncate(IMAGE_TOKEN_LEN);
        trace!(token = %token, "Generated image token");
        token
    }
}
