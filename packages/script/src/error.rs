use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Expected a '{expected}' block, found '{found}'")]
    UnexpectedBlock { expected: String, found: String },

    #[error("Expected a range leaf inside '{block}', found '{found}'")]
    NotARange { block: String, found: String },

    #[error("Unknown category tag '{tag}'")]
    UnknownCategory { tag: String },

    #[error("Unknown junction topology '{name}'")]
    UnknownTopology { name: String },

    #[error("Invalid color '{text}', expected #rrggbb")]
    InvalidColor { text: String },

    #[error("'{name}' must be a finite number, got {value}")]
    NonFinite { name: String, value: String },
}

impl ScriptError {
    pub fn unexpected_block(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedBlock {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn not_a_range(block: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NotARange {
            block: block.into(),
            found: found.into(),
        }
    }

    pub fn unknown_category(tag: impl Into<String>) -> Self {
        Self::UnknownCategory { tag: tag.into() }
    }

    pub fn unknown_topology(name: impl Into<String>) -> Self {
        Self::UnknownTopology { name: name.into() }
    }

    pub fn invalid_color(text: impl Into<String>) -> Self {
        Self::InvalidColor { text: text.into() }
    }

    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            name: name.into(),
            value: value.to_string(),
        }
    }
}
