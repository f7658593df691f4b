//! Infer Python type declarations (`TypedDict`, dataclass, pydantic) from a
//! JSON document.
//!
//! ```
//! use json_pytypes::{convert, Config, LineEnding};
//!
//! let config = Config::default().with_line_ending(LineEnding::Lf);
//! let python = convert(r#"{"name": "Ada", "age": 36}"#, &config);
//! assert_eq!(
//!     python,
//!     "from typing import TypedDict\n\n\nclass JsonRootElement(TypedDict):\n    name: str\n    age: int | float\n"
//! );
//! ```
pub mod case;
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod lenient;
pub mod options;
pub mod path_de;

pub use case::to_pascal_case;
pub use error::{ConvertError, ConvertResult};
pub use inference::Converter;
pub use ir::{Declaration, Fingerprint, Member, TypeRef};
pub use options::{Config, LineEnding, NumericMode, OutputDialect};

/// Convert JSON text to Python source. Malformed input yields a short
/// diagnostic message instead of the document.
pub fn convert(json: &str, config: &Config) -> String {
    Converter::new(*config).convert(json)
}

pub fn try_convert(json: &str, config: &Config) -> ConvertResult<String> {
    Converter::new(*config).try_convert(json)
}
