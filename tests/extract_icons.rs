// tests/extract_icons.rs
//
// Extracting icon names from the cheatsheet markup.
//
mod common;

use icon_seed::specs::icons::{extract_from_str, extract_icon_names};

fn as_strs(v: &[icon_seed::IconName]) -> Vec<&str> {
    v.iter().map(|n| n.as_str()).collect()
}

#[test]
fn reads_values_in_document_order() {
    let page = common::cheatsheet(&["ios-arrow-back", "logo-google", "home"]);
    let names = extract_icon_names(page.as_bytes()).unwrap();
    assert_eq!(as_strs(&names), vec!["ios-arrow-back", "logo-google", "home"]);
}

#[test]
fn ignores_inputs_without_the_name_class() {
    let page = r#"<html><body>
        <input class="search" value="not-an-icon">
        <input class="name" value="alert">
        <span class="name" value="also-not"></span>
        <input class="code" value="&#xf101;">
        <input class="name wide" value="alert-circled">
    </body></html>"#;
    let names = extract_from_str(page).unwrap();
    assert_eq!(as_strs(&names), vec!["alert", "alert-circled"]);
}

#[test]
fn no_matches_is_not_an_error() {
    let names = extract_from_str("<html><body><p>nothing here</p></body></html>").unwrap();
    assert!(names.is_empty());
    assert!(extract_icon_names(b"").unwrap().is_empty());
}

#[test]
fn missing_or_blank_values_are_skipped() {
    let page = r#"<input class="name">
        <input class="name" value="  ">
        <input class="name" value=" beer ">"#;
    let names = extract_from_str(page).unwrap();
    assert_eq!(as_strs(&names), vec!["beer"]);
}

#[test]
fn entities_in_values_are_decoded() {
    let page = r#"<input class="name" value="a&amp;b">"#;
    let names = extract_from_str(page).unwrap();
    assert_eq!(as_strs(&names), vec!["a&b"]);
}

#[test]
fn stray_non_utf8_bytes_do_not_hide_icons() {
    let mut page = b"<input class=\"name\" value=\"ios-arrow-back\"><p>".to_vec();
    page.extend_from_slice(b"\xA9 2016</p><input class=\"name\" value=\"home\">");
    let names = extract_icon_names(&page).unwrap();
    assert_eq!(as_strs(&names), vec!["ios-arrow-back", "home"]);
}
