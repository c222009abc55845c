//! Reader tests.
//!
//! Tests for splitting resources into records.

use dungeon_foundation::ErrorKind;
use dungeon_records::{DirectorySource, MemorySource, RecordFormat, RecordReader};

fn read_all(contents: &str) -> Vec<Vec<(String, String)>> {
    let source = MemorySource::new().with_resource("test.txt", contents);
    let mut reader = RecordReader::open(&source, "test.txt", RecordFormat::default()).unwrap();
    let mut records = Vec::new();
    while reader.read_next_element().unwrap() {
        let record = reader.current().unwrap();
        records.push(
            record
                .fields()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
    }
    reader.close();
    records
}

#[test]
fn reads_blocks_in_order() {
    let records = read_all("ID: A\nNAME: Apple\nEND\nID: B\nEND\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0][0], ("ID".to_string(), "A".to_string()));
    assert_eq!(records[0][1], ("NAME".to_string(), "Apple".to_string()));
    assert_eq!(records[1].len(), 1);
}

#[test]
fn skips_comments_and_blank_lines() {
    let records = read_all("// header\n\nID: A\n// inside\n\nTYPE: Food\nEND\n\n// trailer\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 2);
}

#[test]
fn final_block_without_boundary() {
    let records = read_all("ID: A\nEND\nID: B\nTYPE: Food");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1][1].1, "Food");
}

#[test]
fn continuation_lines_join_with_newlines() {
    let records = read_all("ID: BOOK\nTEXT: first \\\nsecond \\\nthird\nEND\n");
    assert_eq!(records[0][1].1, "first\nsecond\nthird");
}

#[test]
fn values_keep_later_separators() {
    let records = read_all("ID: A\nINFO: Note: read me\nEND\n");
    assert_eq!(records[0][1].1, "Note: read me");
}

#[test]
fn duplicate_field_is_fatal() {
    let source = MemorySource::new().with_resource("test.txt", "ID: A\nID: B\nEND\n");
    let mut reader = RecordReader::open(&source, "test.txt", RecordFormat::default()).unwrap();
    let err = reader.read_next_element().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 2, .. }));
}

#[test]
fn line_without_separator_is_fatal() {
    let source = MemorySource::new().with_resource("test.txt", "ID: A\nnonsense\nEND\n");
    let mut reader = RecordReader::open(&source, "test.txt", RecordFormat::default()).unwrap();
    let err = reader.read_next_element().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 2, .. }));
}

#[test]
fn missing_resource() {
    let source = MemorySource::new();
    let err = RecordReader::open(&source, "absent.txt", RecordFormat::default())
        .err()
        .unwrap();
    assert!(matches!(err.kind, ErrorKind::ResourceNotFound(_)));
}

#[test]
fn custom_format() {
    let format = RecordFormat::default()
        .with_key_separator('=')
        .with_boundary("---")
        .with_comment_prefix("#");
    let source = MemorySource::new().with_resource("test.txt", "# c\nID = A\n---\nID = B\n---\n");
    let mut reader = RecordReader::open(&source, "test.txt", format).unwrap();
    let mut ids = Vec::new();
    while let Some(record) = reader.next_record().unwrap() {
        ids.push(record.id().unwrap().to_string());
    }
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(reader.records_read(), 2);
}

#[test]
fn reads_shipped_content_from_disk() {
    let source = DirectorySource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"));
    let mut reader = RecordReader::open(&source, "items.txt", RecordFormat::default()).unwrap();
    let mut count = 0;
    while reader.read_next_element().unwrap() {
        assert!(reader.current().unwrap().has_value("ID"));
        count += 1;
    }
    assert!(count > 0);
}
