use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("record too large: {size} > {max}")]
    RecordTooLarge { size: usize, max: usize },

    #[error("truncated frame: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("malformed record: {0}")]
    Malformed(String),
}
