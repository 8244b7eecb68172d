//! Board construction errors.

use derive_more::Display;

/// Why a board configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigurationIssue {
    /// Zero rows requested.
    #[display("board must have at least one row")]
    NoRows,

    /// Zero columns requested.
    #[display("board must have at least one column")]
    NoColumns,

    /// A win length of zero was supplied.
    #[display("win length must be positive")]
    ZeroWinLength,

    /// No straight line on the board is long enough to win.
    #[display("win length {win_length} does not fit on a {rows}x{columns} board")]
    WinLengthTooLong {
        /// Requested win length.
        win_length: usize,
        /// Board rows.
        rows: usize,
        /// Board columns.
        columns: usize,
    },
}

/// Error returned when a board cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Dimensions or win length are non-positive or otherwise nonsensical.
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(ConfigurationIssue),
}

impl std::error::Error for BoardError {}

impl From<ConfigurationIssue> for BoardError {
    fn from(issue: ConfigurationIssue) -> Self {
        BoardError::InvalidConfiguration(issue)
    }
}
