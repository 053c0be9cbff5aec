// src/lib.rs

pub mod agents;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod llm;
pub mod memory;

pub use error::{Result, WellnessError};
