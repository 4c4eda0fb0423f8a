//! [`JsonValue`] — the in-memory JSON document tree.
//!
//! A closed six-variant sum type. Containers own their children outright, so
//! the tree is acyclic by construction and drops recursively. Mutation goes
//! through the typed accessors, which hand out a mutable reference to the
//! payload or fail with [`JsonError::TypeMismatch`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::encoder::JsonEncoder;
use crate::error::JsonError;

/// Backing map for [`JsonValue::Object`]: unique keys, insertion order
/// preserved. Inserting an existing key overwrites the value in place and
/// keeps the key's original position.
pub type JsonObject = IndexMap<String, JsonValue>;

/// The variant a [`JsonValue`] currently holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonType {
    Null,
    Str,
    Num,
    Bool,
    Array,
    Object,
}

impl JsonType {
    pub fn name(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Str => "string",
            JsonType::Num => "number",
            JsonType::Bool => "bool",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a JSON document.
///
/// All JSON numbers collapse to `f64`. Object keys are unique and iterate in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JsonValue {
    /// The default/absent value; also what empty input decodes to.
    #[default]
    Null,
    /// Escape-decoded text.
    Str(String),
    Num(f64),
    Bool(bool),
    /// Ordered sequence of exclusively owned children.
    Array(Vec<JsonValue>),
    /// Insertion-ordered mapping of exclusively owned children.
    Object(JsonObject),
}

impl JsonValue {
    /// The variant tag. Never fails.
    pub fn get_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Str(_) => JsonType::Str,
            JsonValue::Num(_) => JsonType::Num,
            JsonValue::Bool(_) => JsonType::Bool,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    /// Mutable access to the text of a [`JsonValue::Str`] node.
    pub fn get_string(&mut self) -> Result<&mut String, JsonError> {
        match self {
            JsonValue::Str(s) => Ok(s),
            _ => Err(JsonError::TypeMismatch {
                expected: JsonType::Str,
            }),
        }
    }

    /// Mutable access to the number of a [`JsonValue::Num`] node.
    pub fn get_double(&mut self) -> Result<&mut f64, JsonError> {
        match self {
            JsonValue::Num(n) => Ok(n),
            _ => Err(JsonError::TypeMismatch {
                expected: JsonType::Num,
            }),
        }
    }

    /// Mutable access to the flag of a [`JsonValue::Bool`] node.
    pub fn get_bool(&mut self) -> Result<&mut bool, JsonError> {
        match self {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(JsonError::TypeMismatch {
                expected: JsonType::Bool,
            }),
        }
    }

    /// Mutable access to the elements of a [`JsonValue::Array`] node.
    pub fn get_array(&mut self) -> Result<&mut Vec<JsonValue>, JsonError> {
        match self {
            JsonValue::Array(arr) => Ok(arr),
            _ => Err(JsonError::TypeMismatch {
                expected: JsonType::Array,
            }),
        }
    }

    /// Mutable access to the entries of a [`JsonValue::Object`] node.
    pub fn get_object(&mut self) -> Result<&mut JsonObject, JsonError> {
        match self {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err(JsonError::TypeMismatch {
                expected: JsonType::Object,
            }),
        }
    }

    /// Serialize this node (and recursively its children) to `out`,
    /// tab-indented at `depth`. Pass depth 0 for a whole document.
    pub fn write<W: Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        JsonEncoder::new(out).write_any(self, depth)
    }

    /// Serialize at depth 0 into a fresh string.
    pub fn to_json_string(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write(&mut buf, 0);
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Serialize this document to the file at `path`.
    ///
    /// Fails with [`JsonError::WriteFile`] if the file cannot be created.
    /// Unlike [`crate::from_file`], failure here is never silent.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| JsonError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        self.write(&mut out, 0)?;
        out.flush()?;
        Ok(())
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::Str(s.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::Str(s)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Num(n)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Num(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            // non-finite numbers have no JSON rendering
            JsonValue::Num(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            JsonValue::Str(s) => serde_json::Value::String(s),
            JsonValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
