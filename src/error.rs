use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid clip type code: {0}")]
    InvalidClipType(u8),
    #[error("unknown clip type: {0:?}")]
    UnknownClipType(String),
    #[error("invalid join type code: {0}")]
    InvalidJoinType(u8),
    #[error("invalid end type code: {0}")]
    InvalidEndType(u8),
    #[error("malformed buffer: {0}")]
    MalformedBuffer(String),
}
