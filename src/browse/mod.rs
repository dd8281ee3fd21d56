//! Listing presentation rules.
//!
//! Everything the browse page computes locally lives here as pure, synchronous
//! code: filter selections and their query serialization, pagination math,
//! page-local sorting, and the display-mode labels. No I/O — the handlers in
//! [`crate::server`] feed these functions and render the result.

pub mod filters;
pub mod mode;
pub mod pagination;
pub mod sort;

pub use filters::{FilterSelection, StayDuration};
pub use mode::DisplayMode;
pub use sort::SortOrder;
