//! Load-by-path convenience wrapper around the decoder.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::decoder::JsonDecoder;
use crate::error::JsonError;
use crate::value::JsonValue;

/// Read and decode the document at `path`.
///
/// A path that cannot be opened or read yields `Ok(JsonValue::Null)` rather
/// than an error, so a missing document reads as an empty one. This is
/// deliberately laxer than [`JsonValue::write_to_file`], which fails loudly;
/// callers that need a strict open can `fs::read` + [`crate::from_slice`]
/// themselves. Malformed file *content* still fails with the decoder's
/// error.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<JsonValue, JsonError> {
    let mut file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(_) => return Ok(JsonValue::Null),
    };
    let mut contents = Vec::new();
    if file.read_to_end(&mut contents).is_err() {
        return Ok(JsonValue::Null);
    }
    let mut decoder = JsonDecoder::new();
    decoder.decode(&contents)
}
