use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// Lookup miss surfaced by `MenuService::get_image`; a client-visible
    /// not-found outcome, never fatal.
    #[error("no pizza named '{0}'")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    /// Storage round-trip failure (relational backend); propagated to the
    /// caller unchanged, no retry.
    #[error("repository error: {0}")]
    Repository(String),
    /// Backend construction failure at startup (unreadable document etc.).
    #[error("configuration error: {0}")]
    Config(String),
}
