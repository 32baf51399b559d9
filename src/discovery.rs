/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Locating the crudebox configuration file.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::loader::ConfigLoader;

const SYSTEM_CANDIDATES: [&str; 3] = [
    "/etc/crudebox/config",
    "/etc/crudebox/crudebox.conf",
    "/etc/crudebox.conf",
];

/// The environment variables discovery looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub crudebox_config: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl Environment {
    #[must_use]
    pub fn from_process() -> Self {
        let var = |name: &str| {
            env::var_os(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        Self {
            crudebox_config: var("CRUDEBOX_CONFIG"),
            xdg_config_home: var("XDG_CONFIG_HOME"),
            home: var("HOME"),
        }
    }

    /// Implicit locations in the order they are tried. `$CRUDEBOX_CONFIG`
    /// is not part of this list.
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        let xdg = self
            .xdg_config_home
            .clone()
            .or_else(|| self.home.as_ref().map(|home| home.join(".config")));
        if let Some(xdg) = xdg {
            paths.push(xdg.join("crudebox/config"));
            paths.push(xdg.join("crudebox/crudebox.conf"));
        }

        if let Some(home) = &self.home {
            paths.push(home.join(".crudebox"));
            paths.push(home.join(".crudebox.conf"));
        }

        paths.extend(SYSTEM_CANDIDATES.iter().map(PathBuf::from));
        paths
    }
}

/// Loads the first configuration file that exists.
///
/// An explicit `$CRUDEBOX_CONFIG` must load. For the implicit candidates a
/// missing file moves on to the next one and any other failure is returned.
pub fn discover<L: ConfigLoader>(
    loader: &L,
    environment: &Environment,
) -> Result<(PathBuf, Document)> {
    if let Some(path) = &environment.crudebox_config {
        debug!(path = %path.display(), "using CRUDEBOX_CONFIG");
        let document = loader.load(path)?;
        return Ok((path.clone(), document));
    }

    for path in environment.candidates() {
        match loader.load(&path) {
            Ok(document) => {
                debug!(path = %path.display(), "found configuration");
                return Ok((path, document));
            }
            Err(err) if err.is_not_found() => {
                debug!(path = %path.display(), "no configuration here");
            }
            Err(err) => return Err(err),
        }
    }

    Err(Error::NotFound)
}
