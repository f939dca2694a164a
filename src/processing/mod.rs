//! In-memory pipeline transformations.
//!
//! The processing layer operates on caller-owned slices and never mutates them. Every function
//! here is a single sequential pass with no state kept between calls.
//!
//! Currently implemented:
//!
//! - [`filter()`]: element filtering by predicate
//! - [`map()`]: element mapping by user function
//! - [`process()`] / [`try_process()`]: the fused filter-then-transform pipeline
//!
//! ## Example: filter → transform
//!
//! ```rust
//! use pipeline_processing::processing::{filter, map, process};
//!
//! let words = vec!["a", "bb", "ccc"];
//!
//! // Fused: one pass, the transform only sees accepted elements.
//! let fused = process(&words, |s| s.len() > 1, |s| s.to_uppercase());
//!
//! // Staged: same result, but materializes the filtered elements first.
//! let kept = filter(&words, |s| s.len() > 1);
//! let staged = map(&kept, |s| s.to_uppercase());
//!
//! assert_eq!(fused, vec!["BB".to_string(), "CCC".to_string()]);
//! assert_eq!(fused, staged);
//! ```

pub mod filter;
pub mod map;
pub mod pipeline;

pub use filter::filter;
pub use map::map;
pub use pipeline::{process, try_process};
