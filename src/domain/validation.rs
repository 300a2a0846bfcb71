use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    SimpleTokenPrefix { prefix: &'static str },
    MissingCredential { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::SimpleTokenPrefix { prefix } => {
                write!(f, "simple token must start with {prefix}")
            }
            Self::MissingCredential { field } => {
                write!(
                    f,
                    "{field} was not passed to the call and is not configured on the client"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "client_key",
        };
        assert_eq!(err.to_string(), "client_key must not be empty");

        let err = ValidationError::SimpleTokenPrefix { prefix: "1_" };
        assert_eq!(err.to_string(), "simple token must start with 1_");

        let err = ValidationError::MissingCredential {
            field: "simple_token",
        };
        assert_eq!(
            err.to_string(),
            "simple_token was not passed to the call and is not configured on the client"
        );
    }
}
