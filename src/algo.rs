pub mod shortest_paths;

pub use shortest_paths::{AllShortestPaths, ShortestPaths};
