// tests/common/mod.rs
//
// In-memory transport and progress recorder shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use icon_seed::core::net::{NetError, Transport};
use icon_seed::progress::Progress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: String,
}

pub struct FakeTransport {
    page: Result<Vec<u8>, NetError>,
    put: Result<(), NetError>,
    /// POST index (0-based) → error to return for that request.
    post_errors: HashMap<usize, NetError>,
    posts_seen: RefCell<usize>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeTransport {
    pub fn serving(page: &str) -> Self {
        Self {
            page: Ok(page.as_bytes().to_vec()),
            put: Ok(()),
            post_errors: HashMap::new(),
            posts_seen: RefCell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_get(err: NetError) -> Self {
        let mut t = Self::serving("");
        t.page = Err(err);
        t
    }

    pub fn with_put_error(mut self, err: NetError) -> Self {
        self.put = Err(err);
        self
    }

    pub fn with_post_error(mut self, index: usize, err: NetError) -> Self {
        self.post_errors.insert(index, err);
        self
    }

    pub fn calls_of(&self, method: &str) -> Vec<Call> {
        self.calls.borrow().iter().filter(|c| c.method == method).cloned().collect()
    }

    fn record(&self, method: &'static str, url: &str, body: &str) {
        self.calls.borrow_mut().push(Call { method, url: url.to_string(), body: body.to_string() });
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, NetError> {
        self.record("GET", url, "");
        self.page.clone()
    }

    fn put_json(&self, url: &str, body: &str) -> Result<(), NetError> {
        self.record("PUT", url, body);
        self.put.clone()
    }

    fn post_text(&self, url: &str, body: &str) -> Result<(), NetError> {
        self.record("POST", url, body);
        let mut seen = self.posts_seen.borrow_mut();
        let i = *seen;
        *seen += 1;
        match self.post_errors.get(&i) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub logs: Vec<String>,
    pub done: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub finished: usize,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.logs.push(msg.to_string());
    }
    fn item_done(&mut self, icon: &str) {
        self.done.push(icon.to_string());
    }
    fn item_failed(&mut self, icon: &str, reason: &str) {
        self.failed.push((icon.to_string(), reason.to_string()));
    }
    fn finish(&mut self) {
        self.finished += 1;
    }
}

/// A cut-down cheatsheet page: each icon is an `<input class="name">`.
pub fn cheatsheet(names: &[&str]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><title>Ionicons Cheatsheet</title></head>\
         <body><div class=\"icons\">",
    );
    for n in names {
        html.push_str(&format!(
            "<div class=\"icon\"><i class=\"icon ion-{n}\"></i>\
             <input class=\"name\" type=\"text\" readonly value=\"{n}\"></div>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}
