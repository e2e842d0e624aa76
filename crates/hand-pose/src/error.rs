#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid landmark buffer length: {0} (expected 42 or 63)")]
    InvalidLength(usize),
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("smoother window must be at least 1")]
    EmptySmootherWindow,
}
