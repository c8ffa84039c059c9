// src/appearance.rs
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::consts::{ICON_SIZE, LABEL_KEY, LABEL_TYPE};
use crate::error::Result;
use crate::icon::IconName;

/// Styling for every node carrying `db_label`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppearanceRecord {
    pub predicate: Predicate,
    pub size: f64,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelBinding>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Predicate {
    pub property_keys: Vec<String>,
    pub known_values: Map<String, Value>,
    pub db_label: String,
}

/// Which node property the UI shows as the caption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelBinding {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for LabelBinding {
    fn default() -> Self {
        Self { key: LABEL_KEY.to_string(), kind: LABEL_TYPE.to_string() }
    }
}

impl AppearanceRecord {
    pub fn for_icon(name: &IconName, include_label_binding: bool) -> Self {
        Self {
            predicate: Predicate {
                property_keys: Vec::new(),
                known_values: Map::new(),
                db_label: name.db_label(),
            },
            size: ICON_SIZE,
            icon: name.as_str().to_string(),
            label: include_label_binding.then(LabelBinding::default),
        }
    }
}

/// One record per name, same order.
pub fn build_appearances(names: &[IconName], include_label_binding: bool) -> Vec<AppearanceRecord> {
    names
        .iter()
        .map(|n| AppearanceRecord::for_icon(n, include_label_binding))
        .collect()
}

/// The PUT body: a single JSON array.
pub fn appearances_json(records: &[AppearanceRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}
