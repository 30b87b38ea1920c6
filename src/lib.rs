pub mod algo;
pub mod core;
pub mod infra;
pub mod io;
