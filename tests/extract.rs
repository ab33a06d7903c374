use serde_json::json;
use topic_atlas::data::mapping::MappingEntry;
use topic_atlas::data::model::TopicModel;
use topic_atlas::extract::{extract_sub_model, ExtractError};

fn full_model() -> TopicModel {
    serde_json::from_value(json!({
        "metadata": {"numTopics": "3", "corpus": "grants"},
        "failedRetrievals": [],
        "timeSlices": {},
        "rowData": [
            {
                "[REQ]ID": "row-0",
                "[REQ]IncludedInModel": true,
                "[REQ]TopicDistribution": [0.0, 0.5, 0.0]
            }
        ],
        "topicDetails": [
            {"topicId": 0, "topWords": [{"label": "solar", "weight": 0.9}]},
            {"topicId": 1, "topWords": [{"label": "wind", "weight": 0.8}]},
            {"topicId": 2, "topWords": [{"label": "tidal", "weight": 0.7}]}
        ],
        "topicSimilarities": [
            [1.0, 0.2, 0.1],
            [0.2, 1.0, 0.3],
            [0.1, 0.3, 1.0]
        ]
    }))
    .expect("valid fixture")
}

fn entry(partition_id: &str, topic_indices: &[usize]) -> MappingEntry {
    MappingEntry {
        partition_id: partition_id.to_string(),
        topic_indices: topic_indices.to_vec(),
    }
}

#[test]
fn partition_restricts_and_reorders() {
    let full = full_model();
    let sub = extract_sub_model(&full, &entry("7", &[1, 2])).unwrap();

    assert_eq!(sub.metadata["numTopics"], json!("2"));
    assert_eq!(sub.topic_details.len(), 2);
    assert_eq!(sub.topic_details[0].top_words[0].label, "wind");
    assert_eq!(sub.topic_details[1].top_words[0].label, "tidal");
    assert_eq!(
        sub.topic_similarities,
        vec![vec![1.0, 0.3], vec![0.3, 1.0]]
    );

    assert_eq!(sub.row_data.len(), 1);
    assert_eq!(sub.row_data[0].topic_distribution, vec![0.5, 0.0]);
    // opaque row fields survive the copy
    assert_eq!(sub.row_data[0].fields["[REQ]ID"], json!("row-0"));
}

#[test]
fn zero_weight_row_is_dropped() {
    let full = full_model();
    let sub = extract_sub_model(&full, &entry("7", &[0, 2])).unwrap();

    // restricted distribution is [0.0, 0.0]: row goes, partition stays
    assert!(sub.row_data.is_empty());
    assert_eq!(sub.metadata["numTopics"], json!("2"));
    assert_eq!(sub.topic_details.len(), 2);
    assert_eq!(sub.topic_similarities.len(), 2);
}

#[test]
fn excluded_row_never_appears() {
    let mut full = full_model();
    full.row_data[0].included_in_model = false;

    let sub = extract_sub_model(&full, &entry("7", &[1, 2])).unwrap();
    assert!(sub.row_data.is_empty());
}

#[test]
fn unsorted_indices_keep_mapping_order() {
    let full = full_model();
    let sub = extract_sub_model(&full, &entry("3", &[2, 1])).unwrap();

    assert_eq!(sub.topic_details[0].top_words[0].label, "tidal");
    assert_eq!(sub.topic_details[1].top_words[0].label, "wind");
    assert_eq!(
        sub.topic_similarities,
        vec![vec![1.0, 0.3], vec![0.3, 1.0]]
    );
    // distribution values follow the entry's index order, not topic order
    assert_eq!(sub.row_data[0].topic_distribution, vec![0.0, 0.5]);
}

#[test]
fn metadata_snapshots_are_independent() {
    let full = full_model();
    let first = extract_sub_model(&full, &entry("0", &[0])).unwrap();
    let second = extract_sub_model(&full, &entry("1", &[1, 2])).unwrap();

    assert_eq!(first.metadata["numTopics"], json!("1"));
    assert_eq!(second.metadata["numTopics"], json!("2"));
    // the shared full-model metadata is untouched
    assert_eq!(full.metadata["numTopics"], json!("3"));
    assert_eq!(first.metadata["corpus"], second.metadata["corpus"]);
}

#[test]
fn out_of_range_topic_index_fails_fast() {
    let full = full_model();
    let err = extract_sub_model(&full, &entry("7", &[1, 9])).unwrap_err();
    assert_eq!(err, ExtractError::TopicDetails { index: 9, len: 3 });
}

#[test]
fn short_row_distribution_fails_fast() {
    let mut full = full_model();
    full.row_data[0].topic_distribution = vec![0.4];

    let err = extract_sub_model(&full, &entry("7", &[1, 2])).unwrap_err();
    assert_eq!(
        err,
        ExtractError::RowDistribution {
            index: 1,
            row: 0,
            len: 1
        }
    );
}

#[test]
fn passthrough_sections_are_copied() {
    let mut full = full_model();
    full.failed_retrievals = json!(["grant-404"]);
    full.time_slices = json!({"2019": 12});

    let sub = extract_sub_model(&full, &entry("7", &[1])).unwrap();
    assert_eq!(sub.failed_retrievals, json!(["grant-404"]));
    assert_eq!(sub.time_slices, json!({"2019": 12}));
}
