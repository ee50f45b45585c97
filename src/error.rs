/// Errors raised by the simulation core.
///
/// Every variant is returned synchronously at the call that violates a
/// precondition; nothing is partially applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FluidError {
    #[error("coordinate ({x}, {y}) is outside the {n}x{n} grid")]
    InvalidCoordinate { x: usize, y: usize, n: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("source value must be finite, got {0}")]
    InvalidSource(f64),
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),
}

pub type Result<T> = std::result::Result<T, FluidError>;
