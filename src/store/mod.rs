// src/store/mod.rs - Pattern artifact persistence

pub mod artifact;

pub use artifact::{load_patterns, save_patterns};
