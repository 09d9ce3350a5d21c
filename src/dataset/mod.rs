// src/dataset/mod.rs - Presence log loading

pub mod loader;
pub mod types;

pub use loader::Dataset;
pub use types::{Observation, TimeOfDay};
