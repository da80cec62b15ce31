use thiserror::Error;

/// The single fatal error kind for figure input.
///
/// Every schema violation and every unresolved point name surfaces as one
/// of these variants. Parsing aborts at the first violation; no partial
/// figure is ever returned.
#[derive(Debug, Error)]
pub enum StructuralError {
    /// The input text is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("could not find object with key \"{0}\"")]
    MissingObject(&'static str),

    #[error("could not find string with key \"{0}\"")]
    MissingString(&'static str),

    #[error("could not find array with key \"{0}\"")]
    MissingArray(&'static str),

    #[error("could not find number with key \"{0}\"")]
    MissingNumber(&'static str),

    #[error("point entry must be an object with \"name\", \"x\" and \"y\"")]
    MalformedPointEntry,

    #[error("segment entry must be an object keyed by a point name")]
    MalformedSegmentEntry,

    #[error("segment entry \"{0}\" must map to an array of point names")]
    MalformedAdjacency(String),

    #[error("unknown point name \"{name}\" in {context}")]
    UnknownPoint {
        name: String,
        context: &'static str,
    },
}

/// Convenience type alias for results using [`StructuralError`].
pub type Result<T> = std::result::Result<T, StructuralError>;
