//! Blacklist section - rejects common passwords and reserved names.

use std::sync::Arc;

use crate::blacklist::CommonPasswords;
use crate::constraint::{Constraint, Reason};
use crate::reserved::ReservedMatcher;

/// Rejects values found in `list`, compared case-insensitively.
pub fn not_common(list: Arc<CommonPasswords>) -> Constraint<str> {
    Constraint::new(Reason::CommonPassword, move |v: &str| !list.contains(v))
}

/// Rejects values recognized by `matcher`.
pub fn not_reserved(matcher: ReservedMatcher) -> Constraint<str> {
    Constraint::new(Reason::Reserved, move |v: &str| !matcher.test(v))
}
