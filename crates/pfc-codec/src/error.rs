use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unmapped symbol: {symbol:?} has no dictionary entry")]
    UnmappedSymbol { symbol: char },
    #[error("Incomplete code: trailing {residual:?} resolves to no symbol")]
    IncompleteCode { residual: String },
    #[error("Degenerate alphabet: {size} symbols, need at least 2")]
    DegenerateAlphabet { size: usize },
    #[error("Ambiguous root set: {0}")]
    AmbiguousRootSet(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
