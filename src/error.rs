use thiserror::Error;

/// Errors from loading configuration and serving requests.
///
/// The filter and parser themselves never fail; these only arise around them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("generator `{generator}`: invalid pattern: {source}")]
    InvalidPattern {
        generator: String,
        #[source]
        source: regex::Error,
    },

    #[error("generator `{generator}`: cannot split script {script:?} into arguments")]
    InvalidScript { generator: String, script: String },

    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),

    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
