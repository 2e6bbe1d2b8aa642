//! Address normalizer port

/// Pure, deterministic transform from a raw address to a lookup key
///
/// The core treats the key as an opaque identifier.
pub trait AddressNormalizer: Send + Sync {
    /// Normalize a raw address string
    fn normalize(&self, raw_address: &str) -> String;
}
