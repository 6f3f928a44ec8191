use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("scene needs at least one label")]
    NoLabels,
    #[error("invalid scene config: {0}")]
    InvalidConfig(&'static str),
}
