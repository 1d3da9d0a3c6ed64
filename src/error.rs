use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// A whitespace-delimited token holding no `M:SS` or `M.SS` timing.
    #[error("Invalid timing string: {token}")]
    InvalidToken { token: String },

    /// A well-formed timing whose minutes do not fit in a `u64`.
    #[error("Timing too large: {token}")]
    TooLarge { token: String },

    #[error("Total of the timings is too large")]
    TotalOverflow,
}
