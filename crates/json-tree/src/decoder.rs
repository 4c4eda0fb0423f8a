//! `JsonDecoder` — recursive-descent JSON reader that produces [`JsonValue`].
//!
//! The decoder is a cursor over an owned byte buffer with one byte of
//! lookahead. The accepted grammar is deliberately relaxed; the crate docs
//! list every deviation from standard JSON. Container reads recurse through
//! [`JsonDecoder::read_any`], and an explicit nesting counter caps recursion
//! at [`MAX_DEPTH`] levels.

use crate::error::JsonError;
use crate::value::{JsonObject, JsonValue};

/// Maximum container nesting accepted before a decode fails with
/// [`JsonError::TooDeeplyNested`].
pub const MAX_DEPTH: usize = 128;

pub struct JsonDecoder {
    pub data: Vec<u8>,
    pub x: usize,
    depth: usize,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x: 0,
            depth: 0,
        }
    }

    /// Decode one document value from `input`.
    ///
    /// The document value may be any variant, not only an object or array.
    /// Empty (or all-separator) input decodes to [`JsonValue::Null`]; bytes
    /// past the first complete value are left unread.
    pub fn decode(&mut self, input: &[u8]) -> Result<JsonValue, JsonError> {
        self.data = input.to_vec();
        self.x = 0;
        self.depth = 0;
        self.read_any()
    }

    pub fn read_any(&mut self) -> Result<JsonValue, JsonError> {
        self.skip_separators();
        let x = self.x;
        if x >= self.data.len() {
            return Ok(JsonValue::Null);
        }
        match self.data[x] {
            b'"' => Ok(JsonValue::Str(self.read_str()?)),
            b't' => self.read_literal("true", JsonValue::Bool(true)),
            b'f' => self.read_literal("false", JsonValue::Bool(false)),
            b'n' => self.read_literal("null", JsonValue::Null),
            b'{' => self.read_obj(),
            b'[' => self.read_arr(),
            c if c == b'-' || c.is_ascii_digit() => self.read_num(),
            c => Err(JsonError::UnexpectedCharacter {
                found: char::from(c),
                offset: x,
            }),
        }
    }

    /// Skip whitespace (space, tab, newline) *and commas*. The comma is a
    /// generic separator here, accepted anywhere between tokens rather than
    /// only between container elements.
    pub fn skip_separators(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b',' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_literal(
        &mut self,
        literal: &'static str,
        value: JsonValue,
    ) -> Result<JsonValue, JsonError> {
        let end = self.x + literal.len();
        if end > self.data.len() || &self.data[self.x..end] != literal.as_bytes() {
            return Err(JsonError::MisspelledLiteral {
                expected: literal,
                offset: self.x,
            });
        }
        self.x = end;
        Ok(value)
    }

    /// Consume a number literal: optional sign, digits, optional fraction,
    /// optional exponent. The first non-matching byte is left unread.
    pub fn read_num(&mut self) -> Result<JsonValue, JsonError> {
        let start = self.x;
        let data = &self.data;
        let len = data.len();
        let mut x = self.x;

        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;

        let text = std::str::from_utf8(&data[start..x]).map_err(|_| JsonError::InvalidUtf8)?;
        let num: f64 = text
            .parse()
            .map_err(|_| JsonError::InvalidNumber { offset: start })?;
        Ok(JsonValue::Num(num))
    }

    /// Read a quoted string literal. Recognized escapes are exactly `\"`,
    /// `\n` and `\\`; any other escape is an error rather than being passed
    /// through silently. Collected bytes are validated as UTF-8 once at the
    /// closing quote.
    pub fn read_str(&mut self) -> Result<String, JsonError> {
        let start = self.x;
        if start >= self.data.len() || self.data[start] != b'"' {
            return Err(JsonError::UnexpectedCharacter {
                found: self.data.get(start).map_or('\0', |&c| char::from(c)),
                offset: start,
            });
        }
        self.x += 1;
        let mut collected = Vec::new();
        loop {
            if self.x >= self.data.len() {
                return Err(JsonError::UnterminatedString { offset: start });
            }
            let ch = self.data[self.x];
            self.x += 1;
            match ch {
                b'"' => break,
                b'\\' => {
                    let offset = self.x - 1;
                    match self.data.get(self.x).copied() {
                        Some(b'"') => collected.push(b'"'),
                        Some(b'n') => collected.push(b'\n'),
                        Some(b'\\') => collected.push(b'\\'),
                        Some(other) => {
                            return Err(JsonError::UnsupportedEscape {
                                found: char::from(other),
                                offset,
                            })
                        }
                        None => return Err(JsonError::UnterminatedString { offset: start }),
                    }
                    self.x += 1;
                }
                _ => collected.push(ch),
            }
        }
        String::from_utf8(collected).map_err(|_| JsonError::InvalidUtf8)
    }

    /// Read an object body. A `"` starts the next key; any other byte closes
    /// the object and is consumed, as does end of input. Duplicate keys
    /// overwrite the earlier value.
    pub fn read_obj(&mut self) -> Result<JsonValue, JsonError> {
        if self.x >= self.data.len() || self.data[self.x] != b'{' {
            return Err(JsonError::UnexpectedCharacter {
                found: self.data.get(self.x).map_or('\0', |&c| char::from(c)),
                offset: self.x,
            });
        }
        self.enter()?;
        self.x += 1;
        let mut obj = JsonObject::new();
        loop {
            self.skip_separators();
            if self.x >= self.data.len() {
                break;
            }
            if self.data[self.x] != b'"' {
                self.x += 1;
                break;
            }
            let key = self.read_str()?;
            self.skip_separators();
            if self.x >= self.data.len() || self.data[self.x] != b':' {
                return Err(JsonError::ExpectedColon { offset: self.x });
            }
            self.x += 1;
            let value = self.read_any()?;
            obj.insert(key, value);
        }
        self.leave();
        Ok(JsonValue::Object(obj))
    }

    /// Read an array body. Elements may be of any variant; `]` (consumed) or
    /// end of input closes the array.
    pub fn read_arr(&mut self) -> Result<JsonValue, JsonError> {
        if self.x >= self.data.len() || self.data[self.x] != b'[' {
            return Err(JsonError::UnexpectedCharacter {
                found: self.data.get(self.x).map_or('\0', |&c| char::from(c)),
                offset: self.x,
            });
        }
        self.enter()?;
        self.x += 1;
        let mut arr = Vec::new();
        loop {
            self.skip_separators();
            if self.x >= self.data.len() {
                break;
            }
            if self.data[self.x] == b']' {
                self.x += 1;
                break;
            }
            arr.push(self.read_any()?);
        }
        self.leave();
        Ok(JsonValue::Array(arr))
    }

    fn enter(&mut self) -> Result<(), JsonError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(JsonError::TooDeeplyNested { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<JsonValue, JsonError> {
        JsonDecoder::new().decode(input.as_bytes())
    }

    #[test]
    fn literals() {
        assert_eq!(decode("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(decode("false").unwrap(), JsonValue::Bool(false));
        assert_eq!(decode("null").unwrap(), JsonValue::Null);
    }

    #[test]
    fn misspelled_literal_names_the_expected_word() {
        let err = decode("nul").unwrap_err();
        assert!(matches!(
            err,
            JsonError::MisspelledLiteral {
                expected: "null",
                ..
            }
        ));
        assert!(matches!(
            decode("tru!").unwrap_err(),
            JsonError::MisspelledLiteral {
                expected: "true",
                ..
            }
        ));
        assert!(matches!(
            decode("falsy").unwrap_err(),
            JsonError::MisspelledLiteral {
                expected: "false",
                ..
            }
        ));
    }

    #[test]
    fn numbers() {
        assert_eq!(decode("0").unwrap(), JsonValue::Num(0.0));
        assert_eq!(decode("-12").unwrap(), JsonValue::Num(-12.0));
        assert_eq!(decode("3.25").unwrap(), JsonValue::Num(3.25));
        assert_eq!(decode("-0.5e2").unwrap(), JsonValue::Num(-50.0));
        assert_eq!(decode("1E-3").unwrap(), JsonValue::Num(0.001));
        assert_eq!(decode("1e308").unwrap(), JsonValue::Num(1e308));
    }

    #[test]
    fn bare_sign_is_an_invalid_number() {
        assert!(matches!(
            decode("-").unwrap_err(),
            JsonError::InvalidNumber { offset: 0 }
        ));
    }

    #[test]
    fn strings_decode_the_fixed_escape_set() {
        assert_eq!(
            decode(r#""say \"hi\"\nbye \\ end""#).unwrap(),
            JsonValue::Str("say \"hi\"\nbye \\ end".into())
        );
        // raw control bytes pass through untouched
        assert_eq!(decode("\"a\tb\"").unwrap(), JsonValue::Str("a\tb".into()));
    }

    #[test]
    fn unknown_escape_is_rejected() {
        assert!(matches!(
            decode(r#""a\tb""#).unwrap_err(),
            JsonError::UnsupportedEscape { found: 't', .. }
        ));
    }

    #[test]
    fn unterminated_string_is_rejected() {
        assert!(matches!(
            decode("\"abc").unwrap_err(),
            JsonError::UnterminatedString { offset: 0 }
        ));
        assert!(matches!(
            decode("\"abc\\").unwrap_err(),
            JsonError::UnterminatedString { offset: 0 }
        ));
    }

    #[test]
    fn empty_input_is_a_null_document() {
        assert_eq!(decode("").unwrap(), JsonValue::Null);
        assert_eq!(decode(" \t\n,,").unwrap(), JsonValue::Null);
    }

    #[test]
    fn unexpected_top_level_byte_is_rejected() {
        assert!(matches!(
            decode("@").unwrap_err(),
            JsonError::UnexpectedCharacter {
                found: '@',
                offset: 0
            }
        ));
    }

    #[test]
    fn missing_colon_is_rejected() {
        assert!(matches!(
            decode(r#"{"a" 1}"#).unwrap_err(),
            JsonError::ExpectedColon { offset: 5 }
        ));
    }

    #[test]
    fn nesting_at_the_limit_is_accepted() {
        let doc = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(decode(&doc).is_ok());
    }

    #[test]
    fn nesting_past_the_limit_is_rejected() {
        let doc = "[".repeat(MAX_DEPTH + 1);
        assert!(matches!(
            decode(&doc).unwrap_err(),
            JsonError::TooDeeplyNested { limit: MAX_DEPTH }
        ));
    }

    #[test]
    fn decoder_state_resets_between_decodes() {
        let mut decoder = JsonDecoder::new();
        assert!(decoder.decode(b"{\"a\" 1}").is_err());
        assert_eq!(decoder.decode(b"true").unwrap(), JsonValue::Bool(true));
    }
}
