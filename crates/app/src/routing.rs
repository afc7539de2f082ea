//! Navigation paths for the detail view.
//!
//! The detail view never parses URLs itself: the router hands it a
//! [`UserId`] resolved here, and list rows link to [`user_path`].

use std::borrow::Cow;

use driftdash_domain::id::UserId;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Prefix of every detail page path.
pub const USER_PATH_PREFIX: &str = "/user/";

/// Characters escaped when a user id is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Resolve the user id bound by a `/user/{userId}` path.
///
/// The segment is percent-decoded and otherwise passed through unchanged;
/// the empty segment yields an empty id. Bytes that do not decode to UTF-8
/// are replaced rather than rejected. Returns `None` for any other path shape.
#[must_use]
pub fn resolve_user_path(path: &str) -> Option<UserId> {
    let segment = path.strip_prefix(USER_PATH_PREFIX)?;
    if segment.contains('/') {
        return None;
    }
    let decoded: Cow<'_, str> = percent_decode_str(segment).decode_utf8_lossy();
    Some(UserId::new(decoded.into_owned()))
}

/// Build the detail page path for `user_id`.
///
/// Returns `None` for `.` and `..`: URL parsers fold those segments (and
/// their `%2e` spellings) into the parent path, so no link can reach them.
#[must_use]
pub fn user_path(user_id: &UserId) -> Option<String> {
    if matches!(user_id.as_str(), "." | "..") {
        return None;
    }
    Some(format!(
        "{USER_PATH_PREFIX}{}",
        utf8_percent_encode(user_id.as_str(), SEGMENT)
    ))
}
