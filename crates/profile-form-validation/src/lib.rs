//! Profile-Form Validation Core
//!
//! Pure Rust validation functions compatible with both std and no_std environments.
//! Used by the form schema natively and by the WASM bindings in the browser.
//!
//! Every validator returns `Ok(())` or a human readable message. Lengths are
//! counted in characters, not bytes.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use string::*;
