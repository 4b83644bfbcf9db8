use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Refusing to enumerate {requested} combinations (limit is {limit})")]
    TooManyCombinations { requested: u128, limit: u64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
