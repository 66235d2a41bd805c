pub mod analyzers;
pub mod loader;
pub mod output;
pub mod parser;
pub mod questions;
pub mod stats;
