//! [`crate::Hasher`] implementations.
//!
//! # Notes
//!
//! - [`FNVHasher`] is the default hasher of [`crate::table::ChainedHashTable`] and covers every
//!   supported key type.
//! - [`MSPHasher`] only covers integers, but its seed is expanded into proper random multipliers,
//!   which makes it a better choice when keys may be adversarial.
pub mod fnv;
pub use fnv::*;
pub mod msp;
pub use msp::*;
#[cfg(feature = "xxh3")]
pub mod xxh3;
#[cfg(feature = "xxh3")]
pub use xxh3::*;
