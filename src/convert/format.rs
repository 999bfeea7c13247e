use crate::convert::tokenizer::TokenSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming convention a token sequence can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `helloWorld`
    #[default]
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
    /// `hello.world`
    Dot,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Camel,
        Format::Pascal,
        Format::Snake,
        Format::Kebab,
        Format::Dot,
    ];

    pub fn separator(self) -> &'static str {
        match self {
            Format::Camel | Format::Pascal => "",
            Format::Snake => "_",
            Format::Kebab => "-",
            Format::Dot => ".",
        }
    }

    /// Render words in this format. An empty sequence renders to `""`.
    pub fn render(self, tokens: &TokenSequence) -> String {
        match self {
            Format::Camel => render_camel(tokens),
            Format::Pascal => tokens.iter().map(|word| capitalize(word)).collect(),
            Format::Snake | Format::Kebab | Format::Dot => tokens
                .iter()
                .map(|word| lowercase(word))
                .collect::<Vec<_>>()
                .join(self.separator()),
        }
    }
}

/// Leading digit-only words pass through untouched; the first word carrying
/// a letter stays lowercase and every later word is capitalized.
fn render_camel(tokens: &TokenSequence) -> String {
    let mut seen_letter = false;
    tokens
        .iter()
        .map(|word| {
            if seen_letter {
                capitalize(word)
            } else {
                seen_letter = word.chars().any(|c| c.is_ascii_alphabetic());
                lowercase(word)
            }
        })
        .collect()
}

pub fn lowercase(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Lowercase the word, then uppercase its first character.
pub fn capitalize(word: &str) -> String {
    let lower = lowercase(word);
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" | "lower_camel" => Ok(Format::Camel),
            "pascal" | "pascalcase" | "upper_camel" => Ok(Format::Pascal),
            "snake" | "snake_case" => Ok(Format::Snake),
            "kebab" | "kebab-case" => Ok(Format::Kebab),
            "dot" | "dot.case" => Ok(Format::Dot),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Camel => write!(f, "camel"),
            Format::Pascal => write!(f, "pascal"),
            Format::Snake => write!(f, "snake"),
            Format::Kebab => write!(f, "kebab"),
            Format::Dot => write!(f, "dot"),
        }
    }
}
