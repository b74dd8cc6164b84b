#![forbid(unsafe_code)]

//! `eisenplan` — Eisenhower-matrix task planner.
//!
//! Classifies todo items into the four urgent×important quadrants and
//! serves them over HTTP as a grouped matrix or a flat filtered list.

pub mod config;
pub mod errors;
pub mod http;
pub mod matrix;
pub mod models;
pub mod persistence;

pub use config::AppConfig;
pub use errors::{AppError, Result};
