#![deny(rust_2018_idioms)]

// This module contains the definition of `Implementation` and the alias table
// used to normalize implementation labels.
pub mod implementation;

// This module contains the definition of `BenchmarkResult` and `Results`,
// i.e. how results files are found and loaded.
pub mod results;

// This module contains the definition of `Search` and `Comparison`.
pub mod search;

// This module contains the definition of `TimeMatrix`.
pub mod matrix;

// This module contains the definition of `Paths` and `ImageFormat`.
pub mod config;

// Re-exports.
pub use config::{ImageFormat, Paths};
pub use implementation::Implementation;
pub use matrix::TimeMatrix;
pub use results::{BenchmarkResult, Results};
pub use search::{Comparison, Search};

// class label used when a record doesn't have one
pub const UNKNOWN_CLASS: &str = "N/A";
