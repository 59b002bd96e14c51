//! Reader for sprite descriptor documents
//!
//! The format is JSON with one extra liberty: a trailing comma before a
//! closing `]` or `}` is tolerated. String escapes are not supported; a
//! backslash inside a string is a parse error rather than a silent guess
//! at escape semantics.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for document parsing failures.
///
/// `line` and `column` are 1-based and point at the offending byte.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// A single value from a descriptor document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Mapping(HashMap<String, Value>),
}

impl Value {
    /// Returns the mapping entries if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the list items if this value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string content if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse a complete document into a [`Value`].
///
/// The whole input must be consumed; any non-whitespace content after the
/// top-level value is a parse error.
pub fn parse(bytes: &[u8]) -> Result<Value, ParseError> {
    let mut reader = Reader::new(bytes);
    reader.skip_whitespace();
    let value = reader.parse_value()?;
    reader.skip_whitespace();
    if reader.pos < reader.bytes.len() {
        return Err(reader.error("extra non-whitespace content after value"));
    }
    Ok(value)
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0, line: 1, column: 1 }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError { message: message.into(), line: self.line, column: self.column }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume `count` bytes, updating the line/column position.
    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            let Some(&byte) = self.bytes.get(self.pos) else { return };
            self.pos += 1;
            self.column += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => self.advance(1),
                _ => break,
            }
        }
    }

    fn expect(&mut self, literal: &[u8], expected: &str) -> Result<(), ParseError> {
        let end = self.pos + literal.len();
        if end > self.bytes.len() || &self.bytes[self.pos..end] != literal {
            return Err(self.error(format!("unexpected symbol, expected {expected}")));
        }
        self.advance(literal.len());
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.error("unexpected end of input, expected value"));
        };
        match token {
            b'{' => self.parse_mapping(),
            b'[' => self.parse_list(),
            b'"' => self.parse_string().map(Value::Str),
            b'-' | b'+' | b'0'..=b'9' | b'.' | b'e' | b'E' => self.parse_number(),
            b't' | b'f' => self.parse_bool(),
            b'n' => self.expect(b"null", "'null'").map(|()| Value::Null),
            _ => Err(self.error("unexpected symbol, expected value")),
        }
    }

    // Each iteration consumes at most one comma before checking for the
    // closer, which is exactly what tolerates a single trailing comma.
    fn parse_list(&mut self) -> Result<Value, ParseError> {
        self.expect(b"[", "'['")?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek().is_none() {
                return Err(self.error("unexpected end of input while parsing array"));
            }
            if self.peek() == Some(b',') {
                self.advance(1);
                self.skip_whitespace();
                if self.peek().is_none() {
                    return Err(self.error("unexpected end of input while parsing array"));
                }
            }
            if self.peek() == Some(b']') {
                break;
            }
            items.push(self.parse_value()?);
        }
        self.advance(1);
        Ok(Value::List(items))
    }

    fn parse_mapping(&mut self) -> Result<Value, ParseError> {
        self.expect(b"{", "'{'")?;
        let mut entries = HashMap::new();
        loop {
            self.skip_whitespace();
            if self.peek().is_none() {
                return Err(self.error("unexpected end of input while parsing object"));
            }
            if self.peek() == Some(b',') {
                self.advance(1);
                self.skip_whitespace();
                if self.peek().is_none() {
                    return Err(self.error("unexpected end of input while parsing object"));
                }
            }
            if self.peek() == Some(b'}') {
                break;
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(b":", "':'")?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys: the last occurrence wins.
            entries.insert(key, value);
        }
        self.advance(1);
        Ok(Value::Mapping(entries))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some(b'"') {
            return Err(self.error("unexpected symbol, expected string"));
        }
        self.advance(1);
        let mut len = 0;
        loop {
            match self.bytes.get(self.pos + len) {
                None => return Err(self.error("unterminated string")),
                Some(b'"') => break,
                Some(b'\\') => {
                    return Err(self.error("backslash in string, escape sequences are not supported"));
                }
                Some(_) => len += 1,
            }
        }
        let content = std::str::from_utf8(&self.bytes[self.pos..self.pos + len])
            .map_err(|_| self.error("string is not valid UTF-8"))?
            .to_owned();
        self.advance(len + 1);
        Ok(content)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let mut len = 0;
        let mut is_float = false;
        while let Some(&byte) = self.bytes.get(self.pos + len) {
            match byte {
                b'-' | b'+' if len == 0 => {}
                b'.' | b'e' | b'E' => is_float = true,
                b'0'..=b'9' => {}
                _ => break,
            }
            len += 1;
        }
        let text = std::str::from_utf8(&self.bytes[self.pos..self.pos + len])
            .map_err(|_| self.error("invalid number"))?;
        let value = if is_float {
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|e| self.error(format!("could not parse number '{text}': {e}")))?
        } else {
            text.parse::<i64>()
                .map(Value::Int)
                .map_err(|e| self.error(format!("could not parse number '{text}': {e}")))?
        };
        self.advance(len);
        Ok(value)
    }

    fn parse_bool(&mut self) -> Result<Value, ParseError> {
        if self.peek() == Some(b't') {
            self.expect(b"true", "'true'")?;
            Ok(Value::Bool(true))
        } else {
            self.expect(b"false", "'false'")?;
            Ok(Value::Bool(false))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> Result<Value, ParseError> {
        parse(input.as_bytes())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(parse_str("null").unwrap(), Value::Null);
        assert_eq!(parse_str("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_str("false").unwrap(), Value::Bool(false));
        assert_eq!(parse_str("42").unwrap(), Value::Int(42));
        assert_eq!(parse_str("-17").unwrap(), Value::Int(-17));
        assert_eq!(parse_str("+3").unwrap(), Value::Int(3));
        assert_eq!(parse_str("1.5").unwrap(), Value::Float(1.5));
        assert_eq!(parse_str("2e3").unwrap(), Value::Float(2000.0));
        assert_eq!(parse_str(r#""hello""#).unwrap(), Value::Str("hello".into()));
        assert_eq!(parse_str(r#""""#).unwrap(), Value::Str(String::new()));
    }

    #[test]
    fn test_number_kind_selection() {
        // Any '.', 'e' or 'E' makes the number a float, otherwise an int.
        assert!(matches!(parse_str("10").unwrap(), Value::Int(10)));
        assert!(matches!(parse_str("10.0").unwrap(), Value::Float(_)));
        assert!(matches!(parse_str("1E2").unwrap(), Value::Float(_)));
    }

    #[test]
    fn test_nested_document() {
        let doc = r#"{"layers": [{"name": "Layer 1"}], "frames": [{"name": "abc"}, {"name": "def"}]}"#;
        let value = parse_str(doc).unwrap();
        let mapping = value.as_mapping().unwrap();
        let frames = mapping.get("frames").unwrap().as_list().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].as_mapping().unwrap().get("name").unwrap().as_str(), Some("def"));
    }

    #[test]
    fn test_trailing_comma_equivalence() {
        let plain = r#"{"a": [1, 2], "b": {"c": 3}}"#;
        let commas = r#"{"a": [1, 2,], "b": {"c": 3,},}"#;
        assert_eq!(parse_str(plain).unwrap(), parse_str(commas).unwrap());
    }

    #[test]
    fn test_trailing_comma_produces_no_phantom_entry() {
        let value = parse_str("[1, 2, 3,]").unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_leading_comma_tolerated() {
        // The element loop consumes at most one comma per iteration, so a
        // single comma before the first element also slips through.
        assert_eq!(parse_str("[,1]").unwrap(), Value::List(vec![Value::Int(1)]));
        assert_eq!(parse_str("[,]").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_double_comma_rejected() {
        assert!(parse_str("[1,,2]").is_err());
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse_str("[]").unwrap(), Value::List(vec![]));
        assert_eq!(parse_str("{}").unwrap(), Value::Mapping(HashMap::new()));
    }

    #[test]
    fn test_backslash_in_string_is_error() {
        let err = parse_str(r#""a\nb""#).unwrap_err();
        assert!(err.message.contains("backslash"));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse_str(r#""abc"#).unwrap_err();
        assert!(err.message.contains("unterminated"));
    }

    #[test]
    fn test_error_position_line_and_column() {
        // The '!' sits on line 2, column 8 (1-based, counted in bytes).
        let err = parse_str("{\n\"key\": !\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 8);
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let err = parse_str("{} x").unwrap_err();
        assert!(err.message.contains("extra non-whitespace"));
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_unexpected_eof() {
        assert!(parse_str("").is_err());
        assert!(parse_str("[1, 2").is_err());
        assert!(parse_str(r#"{"a": "#).is_err());
    }

    #[test]
    fn test_invalid_literal() {
        assert!(parse_str("tru").is_err());
        assert!(parse_str("nul").is_err());
        assert!(parse_str("e").is_err());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let value = parse_str(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(value.as_mapping().unwrap().get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_whitespace_insignificant() {
        let doc = " \t\r\n { \"a\" \n : \n [ 1 , 2 ] } \n ";
        let value = parse_str(doc).unwrap();
        assert_eq!(
            value.as_mapping().unwrap().get("a").unwrap().as_list().unwrap().len(),
            2
        );
    }

    /// Serialize a Value as ordinary JSON (no trailing commas). Only used to
    /// pin the round-trip property; the production format is read-only.
    fn to_json(value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{f:?}"),
            Value::Str(s) => format!("\"{s}\""),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(to_json).collect();
                format!("[{}]", inner.join(","))
            }
            Value::Mapping(entries) => {
                let inner: Vec<String> =
                    entries.iter().map(|(k, v)| format!("\"{k}\":{}", to_json(v))).collect();
                format!("{{{}}}", inner.join(","))
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let value = Value::Mapping(HashMap::from([
            ("null".to_string(), Value::Null),
            ("flag".to_string(), Value::Bool(true)),
            ("count".to_string(), Value::Int(-12)),
            ("speed".to_string(), Value::Float(1.25)),
            ("name".to_string(), Value::Str("walk cycle".to_string())),
            (
                "items".to_string(),
                Value::List(vec![Value::Int(1), Value::Str("two".to_string()), Value::Null]),
            ),
            (
                "nested".to_string(),
                Value::Mapping(HashMap::from([("k".to_string(), Value::List(vec![]))])),
            ),
        ]));
        assert_eq!(parse_str(&to_json(&value)).unwrap(), value);
    }

    fn to_serde(value: &Value) -> serde_json::Value {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Value::from(*f),
            Value::Str(s) => serde_json::Value::from(s.as_str()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
            Value::Mapping(entries) => serde_json::Value::Object(
                entries.iter().map(|(k, v)| (k.clone(), to_serde(v))).collect(),
            ),
        }
    }

    #[test]
    fn test_agrees_with_standard_json() {
        // On escape-free standard JSON the reader must agree with serde_json.
        let doc = r#"{"layers": [{"name": "default"}], "frames": [{"name": "f0"}], "width": 32, "scale": 0.5, "tags": ["idle", "loop"], "parent": null, "visible": true}"#;
        let ours = to_serde(&parse_str(doc).unwrap());
        let reference: serde_json::Value = serde_json::from_str(doc).unwrap();
        assert_eq!(ours, reference);
    }
}
