//! Errors that can occur during execution.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// The cursor bounds violate the executor's contract.
    #[error(
        "invalid arguments: from_index={from_index}, index={index}, max_index={max_index} for input of length {input_len}"
    )]
    InvalidArguments {
        from_index: i32,
        index: i32,
        max_index: i32,
        input_len: usize,
    },

    /// Backward execution was asked to re-read units before the cursor.
    #[error("invalid arguments: backward execution cannot rewind")]
    RewindUnsupported,

    /// The interrupt handle was raised while executing.
    #[error("execution interrupted")]
    Interrupted,
}

impl ExecError {
    /// Whether the caller passed arguments the executor cannot honor.
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidArguments { .. } | Self::RewindUnsupported)
    }
}
