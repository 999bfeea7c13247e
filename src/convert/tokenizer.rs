use crate::error::CaseError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::slice;

lazy_static! {
    // Word boundaries that only show up as a change of letter case
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref DIGIT_UPPER: Regex = Regex::new(r"([0-9])([A-Z])").unwrap();
    static ref ACRONYM_WORD: Regex = Regex::new(r"([A-Z])([A-Z][a-z])").unwrap();

    // Anything that is not token material becomes a separator
    static ref PUNCTUATION: Regex = Regex::new(r"[^A-Za-z0-9\s]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// A value received at the conversion boundary, not yet known to be text.
#[derive(Debug, Clone, Copy)]
pub enum RawInput<'a> {
    Text(&'a str),
    Value(&'a Value),
    Undefined,
}

impl<'a> RawInput<'a> {
    /// Runtime type descriptor used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawInput::Text(_) => "string",
            RawInput::Value(Value::Null) => "null",
            RawInput::Value(Value::Bool(_)) => "boolean",
            RawInput::Value(Value::Number(_)) => "number",
            RawInput::Value(Value::String(_)) => "string",
            RawInput::Value(Value::Array(_)) => "array",
            RawInput::Value(Value::Object(_)) => "object",
            RawInput::Undefined => "undefined",
        }
    }

    fn validate(self) -> Result<&'a str, CaseError> {
        match self {
            RawInput::Text(text) => Ok(text),
            RawInput::Value(Value::String(text)) => Ok(text.as_str()),
            other => {
                log::debug!("Rejecting non-text input of type {}", other.type_name());
                Err(CaseError::invalid_input(other.type_name()))
            }
        }
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> Self {
        RawInput::Text(text)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(text: &'a String) -> Self {
        RawInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for RawInput<'a> {
    fn from(value: &'a Value) -> Self {
        RawInput::Value(value)
    }
}

impl<'a> From<Option<&'a Value>> for RawInput<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(RawInput::Undefined, RawInput::Value)
    }
}

/// How runs of uppercase letters are segmented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segmentation {
    /// `HTTPServer` splits into `HTTP` and `Server`.
    #[default]
    SplitAcronyms,
    /// Uppercase runs are never split, so `HTTPServer` stays a single word.
    Legacy,
}

/// Ordered, non-empty words extracted from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for TokenSequence {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl PartialEq<Vec<&str>> for TokenSequence {
    fn eq(&self, other: &Vec<&str>) -> bool {
        *self == other[..]
    }
}

/// Split input into words using the default acronym handling.
pub fn tokenize<'a>(input: impl Into<RawInput<'a>>) -> Result<TokenSequence, CaseError> {
    tokenize_with(input, Segmentation::default())
}

/// Split input into words.
///
/// Non-text input is rejected with [`CaseError::InvalidInputType`]. Empty,
/// blank or punctuation-only text yields an empty sequence.
pub fn tokenize_with<'a>(
    input: impl Into<RawInput<'a>>,
    segmentation: Segmentation,
) -> Result<TokenSequence, CaseError> {
    let text = input.into().validate()?;
    Ok(tokenize_text(text, segmentation))
}

/// Split text that is already known to be a string.
pub(crate) fn tokenize_text(text: &str, segmentation: Segmentation) -> TokenSequence {
    let text = text.trim();
    if text.is_empty() {
        return TokenSequence::default();
    }

    let normalized = normalize(text, segmentation);
    log::trace!("Normalized {:?} to {:?}", text, normalized);

    let words = normalized
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();

    TokenSequence(words)
}

/// Rewrite text into single-space delimited words.
fn normalize(text: &str, segmentation: Segmentation) -> String {
    let spaced: Cow<'_, str> = LOWER_UPPER.replace_all(text, "$1 $2");
    let spaced = DIGIT_UPPER.replace_all(&spaced, "$1 $2");
    let spaced = match segmentation {
        Segmentation::SplitAcronyms => ACRONYM_WORD.replace_all(&spaced, "$1 $2").into_owned(),
        Segmentation::Legacy => spaced.into_owned(),
    };

    let folded = PUNCTUATION.replace_all(&spaced, " ");
    WHITESPACE_RUN
        .replace_all(&folded, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_boundaries() {
        assert_eq!(tokenize("firstName").unwrap(), vec!["first", "Name"]);
        assert_eq!(
            tokenize("camelCaseWord").unwrap(),
            vec!["camel", "Case", "Word"]
        );
    }

    #[test]
    fn test_separator_folding() {
        assert_eq!(tokenize("snake_case").unwrap(), vec!["snake", "case"]);
        assert_eq!(tokenize("kebab-case").unwrap(), vec!["kebab", "case"]);
        assert_eq!(tokenize("dot.case").unwrap(), vec!["dot", "case"]);
        assert_eq!(
            tokenize("Hello@World#Test!").unwrap(),
            vec!["Hello", "World", "Test"]
        );
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(
            tokenize("  hello \t  World!\n ").unwrap(),
            vec!["hello", "World"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize("!!!").unwrap().is_empty());
        assert!(tokenize("-_.").unwrap().is_empty());
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(tokenize("HTTPServer").unwrap(), vec!["HTTP", "Server"]);
        assert_eq!(
            tokenize("parseXMLDocument").unwrap(),
            vec!["parse", "XML", "Document"]
        );
        assert_eq!(tokenize("API").unwrap(), vec!["API"]);
        assert_eq!(
            tokenize_with("HTTPServer", Segmentation::Legacy).unwrap(),
            vec!["HTTPServer"]
        );
    }

    #[test]
    fn test_digits_are_token_material() {
        assert_eq!(
            tokenize("123 test string").unwrap(),
            vec!["123", "test", "string"]
        );
        assert_eq!(tokenize("v2_api").unwrap(), vec!["v2", "api"]);
        assert_eq!(tokenize("v2Api").unwrap(), vec!["v2", "Api"]);
        assert_eq!(tokenize("User2Id").unwrap(), vec!["User2", "Id"]);
        assert_eq!(tokenize("123Test").unwrap(), vec!["123", "Test"]);
        assert_eq!(
            tokenize("123testString").unwrap(),
            vec!["123test", "String"]
        );
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        assert_eq!(tokenize("caf\u{e9} bar").unwrap(), vec!["caf", "bar"]);
    }

    #[test]
    fn test_type_validation() {
        for (value, expected) in [
            (json!(42), "number"),
            (json!(null), "null"),
            (json!({}), "object"),
            (json!([1, 2]), "array"),
            (json!(true), "boolean"),
        ] {
            let err = tokenize(&value).unwrap_err();
            assert_eq!(err.type_name(), expected);
        }

        let err = tokenize(None::<&Value>).unwrap_err();
        assert_eq!(err.type_name(), "undefined");
    }

    #[test]
    fn test_json_string_is_text() {
        let value = json!("user_id");
        assert_eq!(tokenize(&value).unwrap(), vec!["user", "id"]);
        assert_eq!(tokenize(Some(&value)).unwrap(), vec!["user", "id"]);
    }
}
