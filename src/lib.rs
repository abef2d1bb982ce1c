pub mod core;
pub mod distance;
pub mod perception;
pub mod config;
pub mod bench;
