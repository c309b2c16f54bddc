use super::{Error, ErrorCode, LookupError};
use serde::{Deserialize, Serialize};

/// JSON body of a rejected request as seen by a client.
///
/// `code` stays a plain integer so that a body with a code this build doesn't
/// know about still parses; [`ErrorBody::error_code`] decides whether it's
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i64,
    pub error: String,
}

impl ErrorBody {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    #[inline]
    pub fn error_code(&self) -> Result<ErrorCode, LookupError> {
        ErrorCode::from_id(self.code)
    }
}

impl From<&Error<'_>> for ErrorBody {
    fn from(error: &Error<'_>) -> Self {
        Self {
            code: i64::from(error.code().id()),
            error: error.message().to_owned(),
        }
    }
}
