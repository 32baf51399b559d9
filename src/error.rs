/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Error types for crudeconf.

use std::io;
use std::path::PathBuf;

/// Result type alias for crudeconf operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unexpected end-of-file in section header")]
    UnterminatedSectionHeader,
    #[error("unexpected newline character in section header")]
    NewlineInSectionHeader,
    #[error("section names shall start with [a-zA-Z_], found '{0}'")]
    InvalidSectionStart(char),
    #[error("section names may consist of [a-zA-Z0-9_-], found '{0}'")]
    InvalidSectionChar(char),
    #[error("unexpected character '{0}' after section header")]
    TrailingAfterSectionHeader(char),
    #[error("key names shall start with [a-zA-Z_], found '{0}'")]
    InvalidKeyStart(char),
    #[error("key names may consist of [a-zA-Z0-9_-], found '{0}'")]
    InvalidKeyChar(char),
    #[error("unexpected character '{0}' before assignment")]
    ExpectedAssignment(char),
    #[error("redundant newline character after assignment, expected value definition")]
    RedundantNewlineBeforeValue,
    #[error("expected indentation of value definition if put on a new line")]
    ExpectedIndentedValue,
}

/// A syntax error with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to read configuration file \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file \"{}\"", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("missing section [{section}]")]
    MissingSection { section: String },

    #[error("missing key [{section}] {key}")]
    MissingKey { section: String, key: String },

    #[error("config: {section}.{key}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to auto-detect the configuration file")]
    NotFound,
}

impl Error {
    /// True when the error means the file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
