use thiserror::Error;

pub type Result<T> = std::result::Result<T, CramerError>;

#[derive(Debug, Error)]
pub enum CramerError {
    #[error("matrix dimension invalid: expected {expected}, found {found}")]
    InvalidDimension { expected: &'static str, found: String },
    #[error("system has no unique solution (det(A) = 0)")]
    SingularSystem,
    #[error("arithmetic overflow: {name} = {value}")]
    Overflow { name: &'static str, value: String },
    #[error("malformed equation `{equation}`: {reason}")]
    MalformedEquation {
        equation: String,
        reason: MalformedReason,
    },
    #[error("equations must not contain whitespace (equation {index}: `{equation}`)")]
    EmbeddedWhitespace { index: usize, equation: String },
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),
}

/// Why an equation could not be turned into coefficients and a constant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("missing '='")]
    MissingEquals,
    #[error("missing right-hand side constant")]
    MissingConstant,
    #[error("right-hand side `{0}` is not a number")]
    InvalidConstant(String),
    #[error("coefficient `{0}` is not a number")]
    InvalidCoefficient(String),
}

impl CramerError {
    pub(crate) fn malformed(equation: &str, reason: MalformedReason) -> Self {
        CramerError::MalformedEquation {
            equation: equation.to_string(),
            reason,
        }
    }
}
