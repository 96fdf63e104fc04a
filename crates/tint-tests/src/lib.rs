//! # tint-tests
//!
//! Parity and property testing for oxtint.
//!
//! This crate provides:
//! - Seeded test patterns for byte and float colors
//! - Reference conversions and mixing built on `palette`
//! - Integration tests for palette parity, randomized properties, the
//!   end-to-end scenarios and the JSON format
//!
//! ## Reference Implementation
//!
//! - **palette**: widely used Rust color crate; its `u8`/`f32` component
//!   conversion and `Mix` are the baseline for encoding conversion and
//!   interpolation.

pub mod patterns;
pub mod reference;

pub use patterns::{TestPattern, generate_pattern};

use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
