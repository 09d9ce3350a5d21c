// src/lib.rs - Library root for daypattern

pub mod calendar;
pub mod cli;
pub mod dataset;
pub mod infra;
pub mod patterns;
pub mod pipeline;
pub mod store;
