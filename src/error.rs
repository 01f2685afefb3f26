/// Error taxonomy for the wallpaper downloader
///
/// Every variant here degrades to a visible message in the interface;
/// nothing is fatal to the process. The enum is `Clone` so results can
/// travel inside application messages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Transport failure or timeout while talking to the network
    #[error("network error: {0}")]
    Network(String),

    /// The API answered, but its status code signals failure
    #[error("API error (code {code}): {msg}")]
    Api { code: i64, msg: String },

    /// The response body was not valid JSON
    #[error("invalid JSON from API: {0}")]
    Decode(String),

    /// The image bytes could not be decoded into a bitmap
    #[error("invalid image data")]
    InvalidImage,

    /// A file write failed
    #[error("filesystem error: {0}")]
    Filesystem(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Filesystem(err.to_string())
    }
}
