use std::time::Duration;
use thiserror::Error;


/// Why a model capability could not produce a result.
///
/// None of these ever reach the client: the analysis falls back to the
/// heuristic scorers instead.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("model capability is not available")]
    Unavailable,

    #[error("model inference failed: {0:#}")]
    Inference(#[from] anyhow::Error),

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),
}
