//! Strict JSON text decoding into a tagged value tree with typed accessors.

/// JSON decoding, value model, selectors, and input loading.
pub mod json;
