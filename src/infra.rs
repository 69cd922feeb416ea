#![doc(hidden)]
//! Infrastructure for testing and fuzzing.

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
