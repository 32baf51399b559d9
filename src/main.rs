/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

use std::io::{self, Write};

use anyhow::Result;
use crudeconf::runner::DEFAULT_PATH;
use crudeconf::{FileLoader, Runner};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    // stdout carries the report, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Runner::new(FileLoader, DEFAULT_PATH).run(&mut out)?;
    out.flush()?;
    Ok(())
}
