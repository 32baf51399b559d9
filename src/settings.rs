/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Typed crudebox settings read from a [`Document`].

use tracing::trace;

use crate::document::Document;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    pub path: String,
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widget {
    pub frame: u32,
    pub line_width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub size: u32,
    pub fg: u32,
    pub bg1: u32,
    pub bg2: u32,
    pub fg_sel: u32,
    pub bg1_sel: u32,
    pub bg2_sel: u32,
    pub lines: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEdit {
    pub fg: u32,
    pub bg: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub font: Font,
    pub widget: Widget,
    pub list_view: ListView,
    pub line_edit: LineEdit,
}

enum Slot<'a> {
    Str(&'a mut String),
    U32(&'a mut u32),
    Color(&'a mut u32),
}

impl Settings {
    /// Applies every known `(section, key)` pair found in `document`.
    /// Unknown keys are ignored and absent keys keep their defaults.
    pub fn from_document(document: &Document) -> Result<Self> {
        let mut settings = Self::default();
        for (section, entries) in document.sections() {
            for (key, value) in entries.iter() {
                settings.apply(section, key, value)?;
            }
        }
        Ok(settings)
    }

    fn apply(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let Some(slot) = self.slot(section, key) else {
            trace!(section, key, "ignoring unknown setting");
            return Ok(());
        };

        let invalid = |reason: String| Error::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            reason,
        };

        match slot {
            Slot::Str(target) => *target = value.to_string(),
            Slot::U32(target) => *target = parse_u32(value).map_err(invalid)?,
            Slot::Color(target) => *target = parse_color(value).map_err(invalid)?,
        }
        Ok(())
    }

    fn slot(&mut self, section: &str, key: &str) -> Option<Slot<'_>> {
        let slot = match (section, key) {
            ("font", "path") => Slot::Str(&mut self.font.path),
            ("font", "size") => Slot::U32(&mut self.font.size),
            ("line-edit", "bg") => Slot::Color(&mut self.line_edit.bg),
            ("line-edit", "fg") => Slot::Color(&mut self.line_edit.fg),
            ("list-view", "bg1") => Slot::Color(&mut self.list_view.bg1),
            ("list-view", "bg1-sel") => Slot::Color(&mut self.list_view.bg1_sel),
            ("list-view", "bg2") => Slot::Color(&mut self.list_view.bg2),
            ("list-view", "bg2-sel") => Slot::Color(&mut self.list_view.bg2_sel),
            ("list-view", "fg") => Slot::Color(&mut self.list_view.fg),
            ("list-view", "fg-sel") => Slot::Color(&mut self.list_view.fg_sel),
            ("list-view", "lines") => Slot::Color(&mut self.list_view.lines),
            ("list-view", "size") => Slot::U32(&mut self.list_view.size),
            ("widget", "frame") => Slot::Color(&mut self.widget.frame),
            ("widget", "line-width") => Slot::U32(&mut self.widget.line_width),
            _ => return None,
        };
        Some(slot)
    }
}

/// Parses a `u32` written in decimal, `0x` hexadecimal or `0` octal.
/// The whole string has to be consumed.
pub fn parse_u32(value: &str) -> std::result::Result<u32, String> {
    let (digits, radix) = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        (hex, 16)
    } else if value.len() > 1 && value.starts_with('0') {
        (&value[1..], 8)
    } else {
        (value, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("invalid conversion to uint32_t for value \"{value}\""));
    }

    u32::from_str_radix(digits, radix)
        .map_err(|_| format!("cannot convert \"{value}\" - value out of range"))
}

/// Parses a `0x` color. `0xRRGGBB` gets an opaque alpha byte appended,
/// longer values are taken as `0xRRGGBBAA`.
pub fn parse_color(value: &str) -> std::result::Result<u32, String> {
    if !value.starts_with("0x") {
        return Err(format!(
            "value \"{value}\" must be hexadecimal and start with \"0x\""
        ));
    }

    let color = parse_u32(value)?;
    if value.len() <= 8 {
        Ok((color << 8) | 0xff)
    } else {
        Ok(color)
    }
}
