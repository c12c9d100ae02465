use thiserror::Error;

/// Feil fra dispatch, input-parsing og driver.
///
/// `UnimplementedOperation` finnes ikke her: basistypen er en forseglet trait
/// uten default for kaloriberegning, så kallet kan ikke uttrykkes.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown workout type {0:?}")]
    UnknownActivityType(String),

    #[error("Workout type {code} expects {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Field {field} must be a non-negative whole number, got {value}")]
    InvalidInteger { field: &'static str, value: f64 },

    #[error("Invalid package input at {path}: {message}")]
    InvalidInput { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkoutError {
    /// Kort, stabil etikett (brukes som `reason` i metrics).
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownActivityType(_) => "unknown_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::InvalidInteger { .. } => "invalid_integer",
            WorkoutError::InvalidInput { .. } => "invalid_input",
            WorkoutError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
