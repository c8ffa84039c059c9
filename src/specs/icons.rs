// src/specs/icons.rs
//
// Cheatsheet page: every icon is rendered with a read-only
// `<input class="name" value="ios-arrow-back">` next to its glyph.

use std::borrow::Cow;

use scraper::{Html, Selector};

use crate::config::consts::{NAME_ATTR, NAME_SELECTOR};
use crate::error::{Error, Result};
use crate::icon::IconName;

/// Icon names in document order. No match is an empty list, not an error.
/// Bytes that are not UTF-8 are replaced, as a browser would.
pub fn extract_icon_names(html: &[u8]) -> Result<Vec<IconName>> {
    let text = String::from_utf8_lossy(html);
    if let Cow::Owned(_) = text {
        logw!("page is not valid UTF-8; undecodable bytes replaced");
    }
    extract_from_str(&text)
}

pub fn extract_from_str(html: &str) -> Result<Vec<IconName>> {
    let selector = Selector::parse(NAME_SELECTOR)
        .map_err(|e| Error::Parse(format!("bad selector {NAME_SELECTOR:?}: {e}")))?;
    let doc = Html::parse_document(html);

    let mut names = Vec::new();
    for (i, el) in doc.select(&selector).enumerate() {
        match el.value().attr(NAME_ATTR).and_then(|v| IconName::new(v)) {
            Some(name) => names.push(name),
            None => logw!("input.name #{i} has no usable value; skipped"),
        }
    }
    logd!("extracted {} icon names", names.len());
    Ok(names)
}
