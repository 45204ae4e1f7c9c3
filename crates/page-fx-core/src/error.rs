use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("invalid counter target {0:?}")]
    InvalidCounterTarget(String),
    #[error("unknown element id {0}")]
    UnknownElement(u32),
}
