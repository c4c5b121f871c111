/// Errors from hull construction and point sources.
#[derive(Debug, thiserror::Error)]
pub enum HullError {
    #[error("need at least 3 distinct points, got {distinct}")]
    InsufficientPoints { distinct: usize },

    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("line start ({x}, {y}) is not in the hull sequence")]
    MissingEndpoint { x: f64, y: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
