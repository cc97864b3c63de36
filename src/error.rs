use thiserror::Error;

/// Failure of a single metric query. The message is shown verbatim in the
/// report, so it should read well after "<Domain> info retrieval failed: ".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for QueryError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<starship_battery::Error> for QueryError {
    fn from(err: starship_battery::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::QueryError;

    #[test]
    fn display_is_the_bare_message() {
        let err = QueryError::new("disk busy");
        assert_eq!(err.to_string(), "disk busy");
        assert_eq!(err.message(), "disk busy");
    }

    #[test]
    fn io_errors_keep_their_description() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: QueryError = io.into();
        assert_eq!(err.to_string(), "access denied");
    }
}
