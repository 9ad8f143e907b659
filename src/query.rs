//! Extraction of the `p` parameter from an `/anagram` request target.
//!
//! Two modes. [`QueryMode::Literal`] is the wire-compatible default: a plain
//! substring cut, with no decoding and no notion of separate parameters.
//!
//! | target | literal | decoded |
//! |---|---|---|
//! | `/anagram?p=abc` | `abc` | `abc` |
//! | `/anagram?xp=abc` | `abc` | none |
//! | `/anagram?p=abc&q=1` | `abc&q=1` | `abc` |
//! | `/anagram?q=1&p=abc` | `abc` | `abc` |
//! | `/anagram?p=%61b` | `%61b` | `ab` |
//! | `/anagram` | none | none |

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Text after the first `?`, then after the first `p=`.
    #[default]
    Literal,
    /// `application/x-www-form-urlencoded` parse; the first `p` wins.
    Decoded,
}

/// The value of `p` in `target`, or `None` when there is no query or no `p`.
pub fn anagram_param(target: &str, mode: QueryMode) -> Option<Cow<'_, str>> {
    match mode {
        QueryMode::Literal => literal(target).map(Cow::Borrowed),
        QueryMode::Decoded => decoded(target),
    }
}

fn literal(target: &str) -> Option<&str> {
    let query = target.split('?').nth(1)?;
    query.split("p=").nth(1)
}

fn decoded(target: &str) -> Option<Cow<'_, str>> {
    let (_, query) = target.split_once('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "p")
        .map(|(_, value)| value)
}
