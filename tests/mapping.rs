use std::io::Write;

use tempfile::NamedTempFile;
use topic_atlas::data::mapping::load_mapping;

fn table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write table");
    file
}

#[test]
fn header_is_discarded_and_order_kept() {
    let file = table("supTopic,label,t0,t1,t2\n0,Energy,4,1\n5,Health,2\n");
    let entries = load_mapping(file.path()).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].partition_id, "0");
    assert_eq!(entries[0].topic_indices, vec![4, 1]);
    assert_eq!(entries[1].partition_id, "5");
    assert_eq!(entries[1].topic_indices, vec![2]);
}

#[test]
fn trailing_empty_cells_are_dropped() {
    let with_trailing = table("supTopic,label,t0,t1,t2\n7,Energy,1,2,\n");
    let without = table("supTopic,label,t0,t1\n7,Energy,1,2\n");

    let a = load_mapping(with_trailing.path()).unwrap();
    let b = load_mapping(without.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a[0].topic_indices, vec![1, 2]);
}

#[test]
fn empty_interior_cells_are_skipped() {
    let file = table("supTopic,label,t0,t1,t2\n3,Energy,,8,\n");
    let entries = load_mapping(file.path()).unwrap();
    assert_eq!(entries[0].topic_indices, vec![8]);
}

#[test]
fn partition_with_no_topics_is_kept() {
    let file = table("supTopic,label,t0\n9,Misc,\n");
    let entries = load_mapping(file.path()).unwrap();
    assert_eq!(entries[0].partition_id, "9");
    assert!(entries[0].topic_indices.is_empty());
}

#[test]
fn non_numeric_topic_index_is_fatal() {
    let file = table("supTopic,label,t0,t1\n7,Energy,1,two\n");
    let err = load_mapping(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("line 2"), "unexpected error: {message}");
    assert!(message.contains("two"), "unexpected error: {message}");
}

#[test]
fn missing_file_reports_path() {
    let err = load_mapping(std::path::Path::new("./no_such_table.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_table.csv"));
}
