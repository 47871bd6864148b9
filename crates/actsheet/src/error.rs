#![forbid(unsafe_code)]

//! Errors surfaced by the facade.
//!
//! The sheet state machine itself has no failure paths; everything here comes
//! from the edges: loading policy files and parsing colors.

use std::fmt;

use actsheet_style::ColorParseError;

use crate::policy::PolicyError;

/// Top-level error type for actsheet hosts.
#[derive(Debug)]
pub enum Error {
    /// Policy could not be loaded or failed validation.
    Policy(PolicyError),
    /// A color string was not valid hex.
    Color(ColorParseError),
    /// I/O failure outside policy loading.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Policy(err) => write!(f, "sheet policy: {err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<PolicyError> for Error {
    fn from(err: PolicyError) -> Self {
        Self::Policy(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for actsheet APIs.
pub type Result<T> = std::result::Result<T, Error>;
