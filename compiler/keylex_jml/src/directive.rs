//! In-band key directives.
//!
//! A line comment of the form
//!
//! ```text
//! //-*- jml-keys: key, openjml -*-
//! ```
//!
//! replaces the set of active keys for every later comment in the
//! document. The closing `-*-` is optional.

const PREFIX: &str = "//-*- jml-keys:";
const SUFFIX: &str = "-*-";

/// Keys named by a key directive, or `None` if `comment` is not one.
///
/// Keys are separated by commas and/or whitespace. An empty list is a valid
/// directive that deactivates every key.
pub fn parse_key_directive(comment: &str) -> Option<Vec<&str>> {
    let rest = comment.strip_prefix(PREFIX)?;
    let rest = rest.trim_end();
    let rest = rest.strip_suffix(SUFFIX).unwrap_or(rest);
    Some(
        rest.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|key| !key.is_empty())
            .collect(),
    )
}
