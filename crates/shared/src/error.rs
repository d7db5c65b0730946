#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("forbidden")]
    Forbidden,

    #[error("unauthenticated")]
    Unauthenticated,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Status code carried by the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Forbidden => Some(403),
            Error::Unauthenticated => Some(401),
            Error::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
