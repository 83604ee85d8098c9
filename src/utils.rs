pub mod sort_frequencies;

pub use sort_frequencies::sort_frequencies;
