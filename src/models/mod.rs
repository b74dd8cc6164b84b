//! Domain model modules.

pub mod task;
