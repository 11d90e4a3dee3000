pub mod search;

pub use search::{SearchReport, Searcher};
