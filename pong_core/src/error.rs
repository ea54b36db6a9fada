use crate::Side;
use thiserror::Error;

/// Errors raised while stepping a match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("match already decided: {winner} paddle won")]
    AlreadyDecided { winner: Side },

    #[error("match world has no {0} entity")]
    MissingEntity(&'static str),
}

/// Errors raised while loading a [`crate::Config`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
