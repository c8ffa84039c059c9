// src/query.rs
//! Icon name → graph query.
//!
//! Each query stands alone: nodes are located with the store's `idFrom(key)`,
//! which is assumed to map a key to the same node id every time it is called,
//! in this run or any other. Separate POSTs therefore meet on the same
//! category nodes without a shared transaction. Node labels and names are
//! upserted; edges are `CREATE`d, so running twice duplicates edges.
//!
//! Shapes, for `ios-arrow-back` / `logo-google` / `home` (flat), wrapped here
//! for reading; each query is sent as one line:
//! ```text
//! MATCH (a), (b), (c)
//!   WHERE id(a) = idFrom("ios") AND id(b) = idFrom("arrow")
//!     AND id(c) = idFrom("ios-arrow-back")
//!   SET a:ios, a.name = "ios" SET b:arrow, b.name = "arrow"
//!   SET c:ios_arrow_back, c.name = "ios-arrow-back"
//!   CREATE (a)<-[:` `]-(b)<-[:` `]-(c)
//! MATCH (a), (c)
//!   WHERE id(a) = idFrom("logo") AND id(c) = idFrom("logo-google")
//!   SET a:logo, a.name = "logo" SET c:logo_google, c.name = "logo-google"
//!   CREATE (a)<-[:` `]-(c)
//! CREATE (n:home)
//! ```
use std::fmt;

use crate::core::cypher::{identifier, string_literal};
use crate::icon::IconName;

/// Relationship type for hierarchy edges: a single space.
const BLANK_REL: &str = " ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum QueryMode {
    /// Category, sub-category and leaf when the name has three segments;
    /// category and leaf otherwise.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "hierarchical3", alias = "h3"))]
    Hierarchical3,
    /// Category and leaf only, whatever the segment count.
    #[cfg_attr(feature = "cli", value(name = "hierarchical2", alias = "h2"))]
    Hierarchical2,
    /// A bare labelled node per icon, no hierarchy.
    Flat,
}

/// One query, tagged with the icon it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphQuery {
    pub icon: IconName,
    pub text: String,
}

impl fmt::Display for GraphQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn derive_query(name: &IconName, mode: QueryMode) -> GraphQuery {
    let text = match mode {
        QueryMode::Flat => create_flat(name),
        QueryMode::Hierarchical2 => hierarchy(name, false),
        QueryMode::Hierarchical3 => hierarchy(name, true),
    };
    GraphQuery { icon: name.clone(), text }
}

pub fn derive_queries(names: &[IconName], mode: QueryMode) -> Vec<GraphQuery> {
    names.iter().map(|n| derive_query(n, mode)).collect()
}

fn create_flat(name: &IconName) -> String {
    format!("CREATE (n:{})", identifier(&name.db_label()))
}

/// A node bound by `idFrom(key)` that gets `label` and a `name` property.
struct Bound<'a> {
    var: &'static str,
    key: &'a str,
    label: String,
}

fn hierarchy(name: &IconName, with_mid: bool) -> String {
    let group = name.label_group();

    // Empty segments (`-foo`, `a--b`) have no category node.
    let mut nodes = Vec::with_capacity(3);
    if let Some(root) = group.root() {
        nodes.push(Bound { var: "a", key: root, label: root.to_string() });
    }
    if let Some(mid) = group.mid().filter(|_| with_mid) {
        nodes.push(Bound { var: "b", key: mid, label: mid.to_string() });
    }
    nodes.push(Bound { var: "c", key: name.as_str(), label: name.db_label() });

    let vars: Vec<String> = nodes.iter().map(|n| format!("({})", n.var)).collect();
    let wheres: Vec<String> = nodes
        .iter()
        .map(|n| format!("id({}) = idFrom({})", n.var, string_literal(n.key)))
        .collect();
    let sets: Vec<String> = nodes
        .iter()
        .map(|n| {
            format!(
                "SET {v}:{}, {v}.name = {}",
                identifier(&n.label),
                string_literal(n.key),
                v = n.var
            )
        })
        .collect();

    let mut text = format!(
        "MATCH {} WHERE {} {}",
        vars.join(", "),
        wheres.join(" AND "),
        sets.join(" ")
    );
    if nodes.len() > 1 {
        let rel = format!("<-[:{}]-", identifier(BLANK_REL));
        text.push_str(&format!(" CREATE {}", vars.join(&rel)));
    }
    text
}
