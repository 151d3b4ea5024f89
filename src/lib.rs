//! Immutable rational numbers with exact arithmetic
//!
//! This crate provides:
//! - A `Rational` value type over `i64`, always normalized to lowest terms
//! - Plus, minus, times and divide-by that never fail: undefined results
//!   are NaN and propagate like floating-point NaN
//! - A validating constructor, a string parser and a serde representation
//! - WebAssembly bindings exposing the same surface to JavaScript

use wasm_bindgen::prelude::*;

pub mod error;
mod normalize;
pub mod rational;

// Re-export main types for convenience
pub use error::RationalError;
pub use rational::Rational;

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();
}

/// Get the version of the rational library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
