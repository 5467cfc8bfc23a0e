use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SdkErrorCode {
    InvalidArgument,
    Internal,
}

impl SdkErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SdkErrorCode::InvalidArgument => "sdk/invalid-argument",
            SdkErrorCode::Internal => "sdk/internal",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SdkError {
    pub code: SdkErrorCode,
    message: String,
}

impl SdkError {
    pub fn new(code: SdkErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for SdkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for SdkError {}

pub type SdkResult<T> = Result<T, SdkError>;

pub fn invalid_argument(message: impl Into<String>) -> SdkError {
    SdkError::new(SdkErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> SdkError {
    SdkError::new(SdkErrorCode::Internal, message)
}
