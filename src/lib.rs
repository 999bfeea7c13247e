pub mod config;
pub mod convert;
pub mod error;

pub use config::Config;
pub use convert::{
    convert, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case, tokenize,
    tokenize_with, Converter, Format, RawInput, Segmentation, ToCase, TokenSequence,
};
pub use error::CaseError;
