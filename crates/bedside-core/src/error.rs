use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("score band table '{0}' is empty")]
    EmptyBandTable(String),

    #[error("score band table '{table}' is not ascending at band {index}")]
    UnorderedBands { table: String, index: usize },

    #[error("score band table '{0}' must end with an unbounded band")]
    UnboundedTail(String),
}
