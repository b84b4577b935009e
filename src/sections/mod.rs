//! Atomic constraint builders
//!
//! Each section builds the constraints for one aspect of a value: length,
//! character variety, pattern membership, and list membership.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::{not_common, not_reserved};
pub use length::{max_length, min_length};
pub use pattern::{charset, latin_only, no_consecutive_special, no_digit, no_whitespace};
pub use variety::{CharClass, min_class_count};
