// src/icon.rs
use std::fmt;

use crate::core::cypher::label_from_name;

/// A hyphen-delimited icon identifier as scraped from the page,
/// e.g. `logo-google` or `ios-arrow-back`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconName(String);

impl IconName {
    /// `None` for an empty (or all-whitespace) name.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with every `-` replaced by `_`; used as the leaf label and the
    /// appearance `dbLabel`.
    pub fn db_label(&self) -> String {
        label_from_name(&self.0)
    }

    pub fn label_group(&self) -> LabelGroup<'_> {
        LabelGroup::of(&self.0)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Category segments of a name split on `-` at most twice. The leaf is always
/// the whole name, so a third segment keeps any further hyphens
/// (`md-arrow-round-back` → `md`, `arrow`, leaf). Empty segments (`-foo`,
/// `a--b`) carry no category and come back as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGroup<'a> {
    root: Option<&'a str>,
    mid: Option<&'a str>,
}

impl<'a> LabelGroup<'a> {
    pub fn of(name: &'a str) -> Self {
        let parts: Vec<&'a str> = name.splitn(3, '-').collect();
        let non_empty = |s: &'a str| (!s.is_empty()).then_some(s);
        Self {
            root: non_empty(parts[0]),
            mid: if parts.len() == 3 { non_empty(parts[1]) } else { None },
        }
    }

    /// Top-level category (the whole name when there is no `-`).
    pub fn root(&self) -> Option<&'a str> {
        self.root
    }

    /// Second-level category, present for names with two or more `-`.
    pub fn mid(&self) -> Option<&'a str> {
        self.mid
    }
}
