//! Failure taxonomy for map operations.

/// Errors reported by fallible [`HashMap`](crate::HashMap) operations.
///
/// None of these leave the map in an inconsistent state. Programmer errors
/// (double initialization, a requested capacity below two) are not
/// represented here; they panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The map was used before [`init`](crate::HashMap::init).
    #[error("map used before initialization")]
    Uninitialized,
    /// Every slot is occupied and the key is not already present.
    #[error("map is full ({capacity} slots occupied)")]
    Full {
        /// Fixed slot count of the map.
        capacity: usize,
    },
    /// The key is already present and overwriting was not requested.
    #[error("key already present")]
    DuplicateKey,
    /// The key is not present.
    #[error("key not found")]
    KeyNotFound,
}
