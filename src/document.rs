/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

use seq_map::SeqMap;

use crate::error::{Error, Result};

pub type Section = SeqMap<String, String>;

/// Parsed configuration: sections and their entries, both in file order.
///
/// Entries that appear before the first section header live in the
/// unnamed section `""`.
#[derive(Debug)]
pub struct Document {
    sections: SeqMap<String, Section>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: SeqMap::new(),
        }
    }

    /// Adds an empty section unless one with that name already exists.
    pub fn add_section(&mut self, name: &str) {
        if self.sections.get(name).is_none() {
            let _ = self.sections.insert(name.to_string(), SeqMap::new());
        }
    }

    /// Sets `key` in `section`, creating the section on first use.
    /// A repeated key overwrites the earlier value.
    pub fn set(&mut self, section: &str, key: &str, value: String) {
        let section_name = section.to_string();
        let key = key.to_string();

        if let Some(entries) = self.sections.get_mut(&section_name) {
            if let Some(existing) = entries.get_mut(&key) {
                *existing = value;
            } else {
                let _ = entries.insert(key, value);
            }
        } else {
            let mut entries = SeqMap::new();
            let _ = entries.insert(key, value);
            let _ = self.sections.insert(section_name, entries);
        }
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    /// Like [`Document::get`], but tells a missing section apart from a
    /// missing key.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        let entries = self.section(section).ok_or_else(|| Error::MissingSection {
            section: section.to_string(),
        })?;
        entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_value_wins() {
        let mut doc = Document::new();
        doc.set("font", "size", "10".to_string());
        doc.set("font", "size", "12".to_string());
        assert_eq!(doc.get("font", "size"), Some("12"));
        assert_eq!(doc.section("font").map(SeqMap::len), Some(1));
    }

    #[test]
    fn sections_keep_insertion_order() {
        let mut doc = Document::new();
        doc.set("widget", "frame", "0x000000".to_string());
        doc.set("font", "path", "/a.ttf".to_string());
        doc.set("widget", "line-width", "2".to_string());

        let names: Vec<&str> = doc.sections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["widget", "font"]);
    }

    #[test]
    fn empty_section_is_kept() {
        let mut doc = Document::new();
        doc.add_section("font");
        doc.add_section("font");
        doc.set("widget", "frame", "0x000000".to_string());
        doc.add_section("widget");

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.section("font").map(SeqMap::len), Some(0));
        assert_eq!(doc.get("widget", "frame"), Some("0x000000"));
        assert!(matches!(
            doc.require("font", "path"),
            Err(Error::MissingKey { section, key }) if section == "font" && key == "path"
        ));
    }

    #[test]
    fn require_distinguishes_section_and_key() {
        let mut doc = Document::new();
        doc.set("font", "size", "12".to_string());

        assert!(matches!(
            doc.require("list-view", "size"),
            Err(Error::MissingSection { section }) if section == "list-view"
        ));
        assert!(matches!(
            doc.require("font", "path"),
            Err(Error::MissingKey { key, .. }) if key == "path"
        ));
        assert_eq!(doc.require("font", "size").ok(), Some("12"));
    }
}
