//! Physical quantities shared by the stellar and planetary crates.
//!
//! Only distances need a dedicated type here: every other planetary and
//! stellar magnitude is carried as a plain `f64` in the unit its field
//! documents, so values read from configuration are never rescaled.

pub mod length;


pub use length::Length;
