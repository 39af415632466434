//! CLI error types.

use std::fmt;

use canopyscan::coord::CoordError;
use canopyscan::provider::ProviderError;

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// Rectangle or zoom could not be mapped to a tile grid
    Coord(CoordError),
    /// HTTP client construction failed
    Provider(ProviderError),
    /// Writing an output file failed
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Coord(e) => write!(f, "{}", e),
            CliError::Provider(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}
