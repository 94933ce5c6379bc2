// Menu module tests

use crate::config::OutputFormat;
use crate::menu::{Menu, MenuChoice, clean_newline, render, truncate_field};
use crate::record::Record;
use crate::store::{RecordStore, SearchKind};
use crate::types::Lookup;
use std::io::Cursor;
use std::time::Duration;

fn sample_store() -> RecordStore {
    RecordStore::from_records([
        Record::new("SMITH", "JOHN", "12345678").unwrap(),
        Record::new("SMITH", "ANNA", "87654321").unwrap(),
        Record::new("JONES", "BOB", "11112222").unwrap(),
    ])
}

fn run_session(store: &RecordStore, format: OutputFormat, input: &str) -> String {
    let mut output = Vec::new();
    Menu::new(store, format, Cursor::new(input.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Search(SearchKind::LastNameScan)));
    assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Search(SearchKind::LastNameSorted)));
    assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Search(SearchKind::FirstName)));
    assert_eq!(MenuChoice::parse("4 extra"), Some(MenuChoice::Search(SearchKind::Telephone)));
    assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
    assert_eq!(MenuChoice::parse("Q"), None);
    assert_eq!(MenuChoice::parse(""), None);
    assert_eq!(MenuChoice::parse("9"), None);
}

#[test]
fn test_clean_newline() {
    assert_eq!(clean_newline("SMITH\n"), "SMITH");
    assert_eq!(clean_newline("SMITH\r\n"), "SMITH");
    assert_eq!(clean_newline("SMITH"), "SMITH");
    assert_eq!(clean_newline("\n"), "");
}

#[test]
fn test_truncate_field() {
    assert_eq!(truncate_field("ABCDEFGHIJKLMN", 10), "ABCDEFGHIJ");
    assert_eq!(truncate_field("1234567890", 8), "12345678");
    assert_eq!(truncate_field("BOB", 10), "BOB");
    assert_eq!(truncate_field("ÉÉÉ", 2), "ÉÉ");
}

#[test]
fn test_menu_session_text() {
    let store = sample_store();
    let output = run_session(
        &store,
        OutputFormat::Text,
        "1\nSMITH\n2\nBROWN\n3\nBOB\n4\n00000000\nq\n",
    );

    assert!(output.contains("What do you want to do ?"));
    assert!(output.contains("Search by last_name (not optimised)"));
    assert!(output.contains("Which last name ?"));
    assert!(output.contains("SMITH JOHN : 12345678"));
    assert!(output.contains("SMITH ANNA : 87654321"));
    assert!(output.contains("Last_name not found !"));
    assert!(output.contains("JONES BOB : 11112222"));
    assert!(output.contains("Which number ?"));
    assert!(output.contains("Telephone not found !"));
    assert_eq!(output.matches(" ms)").count(), 4);
}

#[test]
fn test_menu_session_ends_on_eof() {
    let store = sample_store();

    // No quit command, input simply ends
    let output = run_session(&store, OutputFormat::Text, "x\n2\nJONES\n");
    assert!(output.contains("JONES BOB : 11112222"));
    assert_eq!(output.matches("What do you want to do ?").count(), 3);

    // Input ends while the key is expected
    let output = run_session(&store, OutputFormat::Text, "3\n");
    assert!(output.contains("Which first name ?"));
    assert!(!output.contains("Results:"));
}

#[test]
fn test_menu_truncates_keys() {
    let store = sample_store();

    // Extra digits are dropped like the bounded read of an 8 digit field
    let output = run_session(&store, OutputFormat::Text, "4\n1111222299\nq\n");
    assert!(output.contains("JONES BOB : 11112222"));
}

#[test]
fn test_menu_session_json() {
    let store = sample_store();
    let output = run_session(&store, OutputFormat::Json, "4\n11112222\nq\n");

    let line = output
        .lines()
        .find(|line| line.starts_with('{'))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["search"], "Search by telephone");
    assert_eq!(value["key"], "11112222");
    assert_eq!(value["found"], true);
    assert_eq!(value["records"][0]["last_name"], "JONES");
}

#[test]
fn test_render_json_starts_on_new_line() {
    let mut output = b">".to_vec();
    render(
        &mut output,
        OutputFormat::Json,
        SearchKind::Telephone,
        "11112222",
        &Lookup::NotFound,
        Duration::ZERO,
    )
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ">");
    assert!(lines[1].starts_with('{') && lines[1].ends_with('}'));
}

#[test]
fn test_render_not_found_json() {
    let mut output = Vec::new();
    render(
        &mut output,
        OutputFormat::Json,
        SearchKind::FirstName,
        "ZOE",
        &Lookup::NotFound,
        Duration::from_millis(2),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["found"], false);
    assert_eq!(value["records"].as_array().unwrap().len(), 0);
    assert_eq!(value["elapsed_ms"], 2.0);
}

#[test]
fn test_render_text() {
    let store = sample_store();
    let outcome = store.search_last_name_sorted("JONES");

    let mut output = Vec::new();
    render(
        &mut output,
        OutputFormat::Text,
        SearchKind::LastNameSorted,
        "JONES",
        &outcome,
        Duration::from_micros(1500),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\nResults:\nJONES BOB : 11112222\n(1.500 ms)\n"
    );
}
