use thiserror::Error;

/// Everything that can stop a conversion. `convert` turns these into their
/// message text instead of returning them.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid JSON at {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("the top-level JSON value must be an object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("JSON pointer `{pointer}` does not select anything")]
    PointerNotFound { pointer: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
