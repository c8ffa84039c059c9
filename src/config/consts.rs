// src/config/consts.rs

// Source page
pub const SOURCE_URL: &str = "https://ionic.io/ionicons/v2/cheatsheet.html";
pub const NAME_SELECTOR: &str = "input.name";
pub const NAME_ATTR: &str = "value";

// Graph store
pub const API_BASE: &str = "http://localhost:8080";
pub const APPEARANCES_PATH: &str = "/api/v1/query-ui/node-appearances";
pub const CYPHER_PATH: &str = "/api/v1/query/cypher";

// Appearance records
pub const ICON_SIZE: f64 = 40.0;
pub const LABEL_KEY: &str = "name";
pub const LABEL_TYPE: &str = "Property";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("icon_seed/", env!("CARGO_PKG_VERSION"));
