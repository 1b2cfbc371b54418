//! Foreign bindings entry point for `BioKit`.
//!
//! Everything lives in [`biokit_core`]; this crate only owns the `UniFFI`
//! scaffolding so that Swift and Kotlin see a single `biokit` module.

pub use biokit_core::*;

uniffi::setup_scaffolding!("biokit");
