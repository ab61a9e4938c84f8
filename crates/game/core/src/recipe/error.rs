use crate::error::{ErrorSeverity, RingError};

/// Rejected recipe definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("invalid string length for recipe row: {len}")]
    RowTooLong { len: usize },

    #[error("recipe has too many crafting rows")]
    TooManyRows,

    #[error("row {row} is {found} wide but the pattern is {expected} wide")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("recipe has no pattern rows")]
    EmptyPattern,

    #[error("unexpected argument of type {found}")]
    UnexpectedArgument { found: &'static str },

    #[error("symbol '{symbol}' has no ingredient")]
    MissingIngredient { symbol: char },

    #[error("pattern symbol '{symbol}' is not mapped to an ingredient")]
    UnknownSymbol { symbol: char },

    #[error("recipe output was empty")]
    EmptyOutput,
}

impl RingError for RecipeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RowTooLong { .. } => "RECIPE_ROW_TOO_LONG",
            Self::TooManyRows => "RECIPE_TOO_MANY_ROWS",
            Self::RaggedRow { .. } => "RECIPE_RAGGED_ROW",
            Self::EmptyPattern => "RECIPE_EMPTY_PATTERN",
            Self::UnexpectedArgument { .. } => "RECIPE_UNEXPECTED_ARGUMENT",
            Self::MissingIngredient { .. } => "RECIPE_MISSING_INGREDIENT",
            Self::UnknownSymbol { .. } => "RECIPE_UNKNOWN_SYMBOL",
            Self::EmptyOutput => "RECIPE_EMPTY_OUTPUT",
        }
    }
}
