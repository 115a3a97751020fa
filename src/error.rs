#[derive(Debug, thiserror::Error)]
pub enum AffiliateError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Dataset carries no KPI summary")]
    MissingKpis,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AffiliateError>;
