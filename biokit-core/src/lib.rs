#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! `BioKit` gates application features behind the host platform's biometric
//! authentication (Touch ID, Face ID, Android `BiometricPrompt`).
//!
//! The host supplies a [`platform::PlatformAuthenticator`] and somewhere to
//! keep flags ([`flags::FeatureFlagStore`] or [`flags::AtomicBlobStore`]);
//! [`BiometricAuthenticationFacade`] does the rest.

mod callbacks;
pub use callbacks::AuthenticationCallbacks;

mod error;
pub use error::*;

mod facade;
pub use facade::*;

mod version;
pub use version::*;

pub mod flags;

/// Host logging bridge.
pub mod logger;

pub mod platform;

uniffi::setup_scaffolding!("biokit_core");
