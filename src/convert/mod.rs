pub mod format;
pub mod tokenizer;

pub use format::Format;
pub use tokenizer::{tokenize, tokenize_with, RawInput, Segmentation, TokenSequence};

use crate::error::CaseError;
use crate::Config;

/// Tokenizes and renders input according to a [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    segmentation: Segmentation,
    default_format: Format,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            segmentation: config.segmentation,
            default_format: config.default_format,
        }
    }

    pub fn tokenize<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<TokenSequence, CaseError> {
        tokenize_with(input, self.segmentation)
    }

    pub fn convert<'a>(
        &self,
        input: impl Into<RawInput<'a>>,
        format: Format,
    ) -> Result<String, CaseError> {
        let tokens = self.tokenize(input)?;
        Ok(format.render(&tokens))
    }

    /// Convert into the configured default format.
    pub fn convert_default<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, self.default_format)
    }

    pub fn to_camel_case<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, Format::Camel)
    }

    pub fn to_pascal_case<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, Format::Pascal)
    }

    pub fn to_snake_case<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, Format::Snake)
    }

    pub fn to_kebab_case<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, Format::Kebab)
    }

    pub fn to_dot_case<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
        self.convert(input, Format::Dot)
    }
}

pub fn convert<'a>(input: impl Into<RawInput<'a>>, format: Format) -> Result<String, CaseError> {
    Converter::default().convert(input, format)
}

/// `user_id` -> `userId`
pub fn to_camel_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Format::Camel)
}

/// `user_id` -> `UserId`
pub fn to_pascal_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Format::Pascal)
}

/// `userId` -> `user_id`
pub fn to_snake_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Format::Snake)
}

/// `userId` -> `user-id`
pub fn to_kebab_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Format::Kebab)
}

/// `userId` -> `user.id`
pub fn to_dot_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Format::Dot)
}

/// Case conversion as a method on text.
pub trait ToCase {
    fn to_case(&self, format: Format) -> String;
}

impl ToCase for str {
    fn to_case(&self, format: Format) -> String {
        format.render(&tokenizer::tokenize_text(self, Segmentation::default()))
    }
}
