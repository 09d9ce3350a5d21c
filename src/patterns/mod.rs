// src/patterns/mod.rs - Leaving/returning pattern extraction

pub mod extractor;
pub mod map;
pub mod mode;

pub use extractor::PatternExtractor;
pub use map::{PatternMap, PatternRecord};
pub use mode::mode;
