//! `JsonEncoder` — pretty-printing JSON writer.
//!
//! Renders a [`JsonValue`] tree as tab-indented text, one write method per
//! variant, with depth propagated by +1 per nesting level. Output from the
//! writer always re-parses with [`crate::JsonDecoder`].

use std::io::{self, Write};

use crate::value::{JsonObject, JsonValue};

pub struct JsonEncoder<W> {
    pub writer: W,
}

impl<W: Write> JsonEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize a whole document (depth 0).
    pub fn encode(&mut self, value: &JsonValue) -> io::Result<()> {
        self.write_any(value, 0)
    }

    pub fn write_any(&mut self, value: &JsonValue, depth: usize) -> io::Result<()> {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Num(n) => self.write_number(*n),
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr, depth),
            JsonValue::Object(obj) => self.write_obj(obj, depth),
        }
    }

    pub fn write_null(&mut self) -> io::Result<()> {
        self.writer.write_all(b"null")
    }

    pub fn write_boolean(&mut self, b: bool) -> io::Result<()> {
        self.writer.write_all(if b { b"true" } else { b"false" })
    }

    pub fn write_number(&mut self, num: f64) -> io::Result<()> {
        self.writer.write_all(format_float(num).as_bytes())
    }

    /// Write a quoted string, escaping exactly `"`, newline and `\`. Every
    /// other byte passes through untouched.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(b"\"")?;
        for &b in s.as_bytes() {
            match b {
                b'"' => self.writer.write_all(b"\\\"")?,
                b'\n' => self.writer.write_all(b"\\n")?,
                b'\\' => self.writer.write_all(b"\\\\")?,
                _ => self.writer.write_all(&[b])?,
            }
        }
        self.writer.write_all(b"\"")
    }

    pub fn write_arr(&mut self, arr: &[JsonValue], depth: usize) -> io::Result<()> {
        if arr.is_empty() {
            return self.writer.write_all(b"[]");
        }
        self.writer.write_all(b"[\n")?;
        let last = arr.len() - 1;
        for (i, item) in arr.iter().enumerate() {
            self.indent(depth + 1)?;
            self.write_any(item, depth + 1)?;
            if i < last {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(b"\n")?;
        }
        self.indent(depth)?;
        self.writer.write_all(b"]")
    }

    pub fn write_obj(&mut self, obj: &JsonObject, depth: usize) -> io::Result<()> {
        if obj.is_empty() {
            return self.writer.write_all(b"{}");
        }
        self.writer.write_all(b"{\n")?;
        let last = obj.len() - 1;
        for (i, (key, value)) in obj.iter().enumerate() {
            self.indent(depth + 1)?;
            self.write_str(key)?;
            self.writer.write_all(b": ")?;
            self.write_any(value, depth + 1)?;
            if i < last {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(b"\n")?;
        }
        self.indent(depth)?;
        self.writer.write_all(b"}")
    }

    fn indent(&mut self, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            self.writer.write_all(b"\t")?;
        }
        Ok(())
    }
}

/// Textual rendering for JSON numbers. NaN serializes as `null` and the
/// infinities clamp to `1e308`/`-1e308` so output stays readable; integral
/// values below 1e15 print without a fractional part, everything else uses
/// Rust's shortest round-trip representation.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "null".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "1e308".to_string()
        } else {
            "-1e308".to_string()
        }
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}
