//! Error types for amocrm-rest.

use amocrm_filters::FilterError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// The HTTP status behind this error, if it came from the API.
    pub fn status(&self) -> Option<u16> {
        self.source
            .as_ref()
            .and_then(|s| s.downcast_ref::<amocrm_client::Error>())
            .and_then(|e| e.status())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Auth error: {0}")]
    Auth(String),
    #[error("Filter error: {0}")]
    Filter(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

impl From<amocrm_client::Error> for Error {
    fn from(err: amocrm_client::Error) -> Self {
        Error { kind: ErrorKind::Client(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<amocrm_auth::Error> for Error {
    fn from(err: amocrm_auth::Error) -> Self {
        Error { kind: ErrorKind::Auth(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error { kind: ErrorKind::Filter(err.to_string()), source: Some(Box::new(err)) }
    }
}
