//! Hash functions and [`crate::Hasher`] implementations built on top of them.
pub mod common;
pub mod fnv;
pub mod hashers;
pub mod multiply_shift;
#[cfg(test)]
mod tests;
