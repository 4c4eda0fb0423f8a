//! Minimal embeddable JSON document tree.
//!
//! An in-memory [`JsonValue`] tree, a relaxed recursive-descent reader
//! ([`JsonDecoder`]) and a tab-indented pretty printer ([`JsonEncoder`]),
//! plus load/save file helpers. No CLI, no configuration, no logging — the
//! crate is meant to be embedded and driven entirely through its API.
//!
//! The accepted grammar deviates from standard JSON on purpose:
//!
//! - commas are ordinary separators, skipped anywhere between tokens;
//! - inside an object body, any byte other than `"` closes the object, as
//!   does end of input;
//! - string escapes are exactly `\"`, `\n` and `\\` — any other escape is
//!   rejected, and the writer never emits more than those three;
//! - empty input decodes to a `null` document, not an error;
//! - nesting is capped at [`MAX_DEPTH`] levels.
//!
//! Everything is synchronous and single-threaded; a tree is mutated through
//! `&mut` access and shared across threads only by the host's own locking.

mod decoder;
mod encoder;
mod error;
mod file;
mod value;

pub use decoder::{JsonDecoder, MAX_DEPTH};
pub use encoder::JsonEncoder;
pub use error::JsonError;
pub use file::from_file;
pub use value::{JsonObject, JsonType, JsonValue};

/// Decode one document value from a byte slice.
pub fn from_slice(input: &[u8]) -> Result<JsonValue, JsonError> {
    let mut decoder = JsonDecoder::new();
    decoder.decode(input)
}

/// Decode one document value from a string.
pub fn from_str(input: &str) -> Result<JsonValue, JsonError> {
    from_slice(input.as_bytes())
}
