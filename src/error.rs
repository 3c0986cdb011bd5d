use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// `tick` was called after the match reached `Terminated`
    MatchTerminated { tick: u64 },
    /// A tuning value is outside its allowed domain
    InvalidTuning { field: &'static str, reason: String },
    /// Tuning JSON could not be parsed
    TuningParse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchTerminated { tick } => {
                write!(f, "match already terminated (last tick {tick})")
            }
            Self::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning value `{field}`: {reason}")
            }
            Self::TuningParse {
                line,
                column,
                message,
            } => write!(
                f,
                "tuning parse error at line {line}, column {column}: {message}"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::TuningParse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MatchTerminated { tick: 42 };
        assert_eq!(err.to_string(), "match already terminated (last tick 42)");

        let err = Error::InvalidTuning {
            field: "aimed_shot_chance",
            reason: "must be within [0, 1]".to_string(),
        };
        assert!(err.to_string().contains("aimed_shot_chance"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(err, Error::TuningParse { line: 1, .. }));
    }
}
