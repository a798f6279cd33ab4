use std::fmt;

/// API failure as seen by page components: the HTTP status (500 for
/// transport/parse failures) and a displayable message.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}
