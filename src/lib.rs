#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arena;

pub mod error;

/// A fixed-capacity hash map using Robin Hood open addressing.
///
/// This module provides a `HashMap` with byte-string keys, arena-backed
/// storage and backward-shift deletion.
pub mod hash_map;

pub use arena::Arena;
pub use error::MapError;
pub use hash_map::HashMap;
pub use hash_map::Iter;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used when none is given.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder used when none is given.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Placeholder when neither `foldhash` nor `std` is enabled. It has no
        /// values, so a hasher has to be passed explicitly.
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHashBuilder {}
    }
}
