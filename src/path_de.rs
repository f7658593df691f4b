use serde::de::DeserializeOwned;

use crate::error::{ConvertError, ConvertResult};

/// Parse permissive JSON text, keeping the JSON path reached when the parser
/// gave up (e.g. `.address.street`) in the error.
pub fn from_lenient_str<T: DeserializeOwned>(src: &str) -> ConvertResult<T> {
    let stripped = crate::lenient::strip(src);
    let mut de = serde_json::Deserializer::from_str(&stripped);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(|err| {
        let path = err.path().to_string();
        ConvertError::Malformed { path, source: err.into_inner() }
    })?;
    // reject anything after the top-level value
    de.end().map_err(|source| ConvertError::Malformed { path: ".".to_string(), source })?;
    Ok(value)
}

/// Select a sub-document with a JSON Pointer (e.g. `/data/items/0`) and
/// return it as pretty-printed JSON text, property order preserved.
pub fn select_pointer(src: &str, pointer: &str) -> ConvertResult<String> {
    let value: serde_json::Value = from_lenient_str(src)?;
    let selected = value
        .pointer(pointer)
        .ok_or_else(|| ConvertError::PointerNotFound { pointer: pointer.to_string() })?;
    serde_json::to_string_pretty(selected)
        .map_err(|source| ConvertError::Malformed { path: pointer.to_string(), source })
}
