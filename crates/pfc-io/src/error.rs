use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Aligner {program} failed with status {status}")]
    AlignerFailed { program: String, status: i32 },
    #[error("Codec error: {0}")]
    Codec(#[from] pfc_codec::CodecError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;
