//! Canonicalization of free-form input.
//!
//! Every pipeline is total (worst case it yields an empty string) and
//! idempotent. Step order per family:
//!
//! - username: trim, lowercase, strip outside `[a-z0-9_\s]`, whitespace runs
//!   to `_`, collapse repeated `_`, strip leading/trailing `_`
//! - slug: trim, lowercase, NFD and drop combining marks, strip outside
//!   `[a-z0-9\s-]`, whitespace runs to `-`, collapse repeated `-`, strip
//!   leading/trailing `-`
//! - nickname: strip outside letters/marks/numbers/`_ .-`, whitespace runs to
//!   a single space, trim
//! - password: unchanged
//! - age: trim

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::options::Family;
use crate::patterns::{NICKNAME_STRIP, SLUG_STRIP, USERNAME_STRIP};

pub fn canonicalize(family: Family, raw: &str) -> String {
    match family {
        Family::Username => username(raw),
        Family::Slug => slug(raw),
        Family::Nickname => nickname(raw),
        Family::Password => raw.to_string(),
        Family::Age => raw.trim().to_string(),
    }
}

fn username(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = USERNAME_STRIP.replace_all(&lowered, "");
    let joined = join_whitespace(&stripped, "_");
    collapse_separator(&joined, "_")
}

fn slug(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let folded = strip_diacritics(&lowered);
    let stripped = SLUG_STRIP.replace_all(&folded, "");
    let joined = join_whitespace(&stripped, "-");
    collapse_separator(&joined, "-")
}

fn nickname(raw: &str) -> String {
    let stripped = NICKNAME_STRIP.replace_all(raw, "");
    join_whitespace(&stripped, " ")
}

/// Decomposes to NFD and drops combining marks: `é` becomes `e`.
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Replaces every whitespace run with `separator`, dropping leading and
/// trailing whitespace.
fn join_whitespace(value: &str, separator: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(separator)
}

/// Collapses runs of `separator` and strips it from both ends.
fn collapse_separator(value: &str, separator: &str) -> String {
    value
        .split(separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
