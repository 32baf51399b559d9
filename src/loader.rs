/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Loading configuration documents from a path.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::timer::ScopeTimer;

/// Reads and parses a configuration file into a [`Document`].
pub trait ConfigLoader {
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads files from disk with [`Parser`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLoader;

impl FileLoader {
    /// Parses in-memory text, reporting errors against `path`.
    pub fn load_str(path: &Path, text: &str) -> Result<Document> {
        Parser::new(text).parse().map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ConfigLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let _timer = ScopeTimer::new("load");

        // the file handle is closed before parsing starts
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::load_str(path, &text)?;
        debug!(
            path = %path.display(),
            bytes = text.len(),
            sections = document.len(),
            "loaded configuration"
        );
        Ok(document)
    }
}

impl<L: ConfigLoader + ?Sized> ConfigLoader for &L {
    fn load(&self, path: &Path) -> Result<Document> {
        (**self).load(path)
    }
}
