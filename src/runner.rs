/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Timed load of a configuration file, reported on two lines.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::debug;

use crate::document::Document;
use crate::loader::ConfigLoader;

/// Relative to the working directory, not to the executable.
pub const DEFAULT_PATH: &str = "./test/config/crudebox.conf";
pub const FONT_SECTION: &str = "font";
pub const PATH_KEY: &str = "path";

/// Result of one timed load.
#[derive(Debug)]
pub struct Measurement {
    pub elapsed: Duration,
    pub document: Document,
}

impl Measurement {
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

pub struct Runner<L> {
    loader: L,
    path: PathBuf,
    section: String,
    key: String,
}

impl<L: ConfigLoader> Runner<L> {
    /// Runner that looks up `[font] path` in the file at `path`.
    pub fn new(loader: L, path: impl Into<PathBuf>) -> Self {
        Self {
            loader,
            path: path.into(),
            section: FONT_SECTION.to_string(),
            key: PATH_KEY.to_string(),
        }
    }

    #[must_use]
    pub fn with_lookup(mut self, section: &str, key: &str) -> Self {
        self.section = section.to_string();
        self.key = key.to_string();
        self
    }

    /// Loads the file once, timing only the load itself.
    pub fn measure(&self) -> crate::Result<Measurement> {
        let start = Instant::now();
        let document = self.loader.load(&self.path)?;
        let elapsed = start.elapsed();

        debug!(path = %self.path.display(), ?elapsed, "measured load");
        Ok(Measurement { elapsed, document })
    }

    /// Measures, then writes the `Elapsed` line followed by the `Test` line.
    ///
    /// The lookup runs after the `Elapsed` line has been written, so a
    /// missing section or key fails with only that line on `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let measurement = self
            .measure()
            .with_context(|| format!("unable to load config '{}'", self.path.display()))?;

        writeln!(out, "Elapsed {} ms", measurement.elapsed_ms())?;

        let value = measurement.document.require(&self.section, &self.key)?;
        writeln!(out, "Test: {value}")?;
        Ok(())
    }
}
