use thiserror::Error;

pub type PlazaResult<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum PlazaError {
    /// An empty or all-whitespace post body was submitted.
    #[error("Post cannot be empty")]
    EmptyPost,
    /// The requested/specified ID does not exist.
    #[error("Post does not exist with the given ID: {id}")]
    UnknownPost { id: u64 },
    #[error("{msg}")]
    ConfigError { msg: String },
}

impl PlazaError {
    pub fn config_error(msg: String) -> Self {
        Self::ConfigError { msg }
    }
}
