//! Conversion settings. Immutable for the duration of one conversion.
use serde::{Deserialize, Serialize};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Which Python declaration style to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputDialect {
    /// `class Name(TypedDict):`
    #[default]
    TypedDict,
    /// `Name = TypedDict('Name', {...})`
    TypedDictFunctional,
    /// `@dataclass` decorated class
    Dataclass,
    /// `class Name(BaseModel):` (pydantic)
    Pydantic,
}

/// How JSON numbers are spelled in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NumericMode {
    /// `int | float`
    #[default]
    Union,
    /// a local `type Number = int | float` alias
    #[value(name = "alias")]
    #[serde(rename = "alias")]
    NamedAlias,
    /// `int`
    Int,
    /// `float`
    Float,
}

/// Separator used between output lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// CRLF on Windows, LF elsewhere
    #[default]
    Native,
    Lf,
    #[value(name = "crlf")]
    #[serde(rename = "crlf")]
    CrLf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub dialect: OutputDialect,
    pub numeric: NumericMode,
    pub line_ending: LineEnding,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Config {
    pub fn new(dialect: OutputDialect, numeric: NumericMode) -> Self {
        Self { dialect, numeric, ..Self::default() }
    }
    pub fn with_dialect(mut self, dialect: OutputDialect) -> Self {
        self.dialect = dialect;
        self
    }
    pub fn with_numeric(mut self, numeric: NumericMode) -> Self {
        self.numeric = numeric;
        self
    }
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
