use thiserror::Error;

/// Top-level error type for pattern construction.
#[derive(Debug, Error)]
pub enum HankinError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors in the requested pattern configuration. These are fatal.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("unsupported depth mode: {0}")]
    UnsupportedDepthMode(String),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("angle range table is empty")]
    EmptyAngleRanges,
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("lines are parallel and do not intersect")]
    ParallelLines,

    #[error("degenerate miter: interior angle {angle} rad is too close to 0 or pi")]
    DegenerateMiter { angle: f64 },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors in the index-based coupling between rule tables and line topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("interlace rule {rule} references line {index}, but the pattern has {len} lines")]
    RuleIndexOutOfRange { rule: usize, index: usize, len: usize },

    #[error("interlace rule {rule} references ribbon corner {corner}, but ribbons have 6 corners")]
    CornerOutOfRange { rule: usize, corner: usize },

    #[error("rule table was declared for {expected} lines, but the pattern has {actual}")]
    LineCountMismatch { expected: usize, actual: usize },

    #[error("shape set {set} references shape {index}, but only {len} shapes exist")]
    ShapeSetIndexOutOfRange { set: usize, index: usize, len: usize },
}

/// Convenience type alias for results using [`HankinError`].
pub type Result<T> = std::result::Result<T, HankinError>;
