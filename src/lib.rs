/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

pub mod discovery;
pub mod document;
pub mod error;
pub mod loader;
pub mod parser;
pub mod runner;
pub mod settings;
pub mod timer;

pub use discovery::{Environment, discover};
pub use document::{Document, Section};
pub use error::{Error, ErrorKind, ParseError, Result};
pub use loader::{ConfigLoader, FileLoader};
pub use parser::Parser;
pub use runner::{Measurement, Runner};
pub use settings::Settings;
