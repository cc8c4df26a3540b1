//! Shared harness for core integration tests.

#![allow(dead_code)]

pub mod surface;

pub use surface::{FakeSurface, ImageSpec};

/// Card ids `1..=n`.
pub fn ids(n: u32) -> Vec<u32> {
    (1..=n).collect()
}
