use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no text provided")]
    EmptyText,
}
