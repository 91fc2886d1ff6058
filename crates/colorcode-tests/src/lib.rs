//! Integration test crate for colorcode.
//!
//! Holds the reference conversion tables and cross-notation checks that
//! exercise the public API of colorcode-core as a whole.

#[cfg(test)]
mod hex;

#[cfg(test)]
mod cylindrical;

#[cfg(test)]
mod notation;
