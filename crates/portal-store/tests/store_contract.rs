// SPDX-License-Identifier: Apache-2.0

use portal_model::{Dataset, DonationRecord};
use portal_store::{default_dataset, load, try_load, JsonFileSource, StaticSource, StoreError};
use tempfile::tempdir;

#[tokio::test]
async fn missing_file_serves_documented_defaults() {
    let root = tempdir().expect("tempdir");
    let source = JsonFileSource::new(root.path().join("data.json"));

    let err = try_load(&source).await.expect_err("missing file");
    assert!(matches!(err, StoreError::Read { .. }));

    let dataset = load(&source).await;
    assert_eq!(
        dataset.intern,
        DonationRecord::new("Shombhunath Karan", "shombhunath2025", 6500)
    );
    let names: Vec<_> = dataset
        .leaderboard
        .iter()
        .map(|r| (r.name.as_str(), r.donations))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Priya Sharma", 12500),
            ("Rahul Kumar", 9800),
            ("Aanya Patel", 7200),
            ("Shombhunath", 6500),
            ("Vikram Singh", 5200),
            ("Meera Reddy", 4800),
            ("Arjun Malhotra", 4200),
            ("Zara Khan", 3800),
            ("Anjali Desai", 3200),
            ("Krishna Verma", 2800),
        ]
    );
}

#[tokio::test]
async fn well_formed_file_is_served_verbatim() {
    let root = tempdir().expect("tempdir");
    let path = root.path().join("data.json");
    let dataset = Dataset {
        intern: DonationRecord::new("Meera Reddy", "meera2025", 4800),
        leaderboard: vec![
            DonationRecord::new("Zara Khan", "zara2025", 3800),
            DonationRecord::new("Meera Reddy", "meera2025", 4800),
        ],
    };
    std::fs::write(&path, serde_json::to_vec(&dataset).expect("encode")).expect("write");

    let source = JsonFileSource::new(path);
    assert_eq!(try_load(&source).await.expect("load"), dataset);
    assert_eq!(load(&source).await, dataset);
}

#[tokio::test]
async fn corrupt_or_malformed_file_falls_back() {
    let root = tempdir().expect("tempdir");
    let path = root.path().join("data.json");

    std::fs::write(&path, b"{\"intern\":").expect("write");
    let source = JsonFileSource::new(path.clone());
    assert!(matches!(try_load(&source).await, Err(StoreError::Parse(_))));
    assert_eq!(load(&source).await, default_dataset());

    std::fs::write(
        &path,
        br#"{"intern":{"name":"A","referralCode":"a2025","donations":1},
            "leaderboard":[{"name":"","referralCode":"b2025","donations":2}]}"#,
    )
    .expect("write");
    assert!(matches!(
        try_load(&source).await,
        Err(StoreError::Malformed(_))
    ));
    assert_eq!(load(&source).await, default_dataset());
}

#[tokio::test]
async fn static_source_failure_degrades_to_defaults() {
    let source = StaticSource::failing(StoreError::Parse("boom".to_string()));
    assert_eq!(load(&source).await, default_dataset());
}

#[tokio::test]
async fn shipped_data_file_matches_builtin_dataset() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("data.json");
    let source = JsonFileSource::new(path);
    assert_eq!(try_load(&source).await.expect("shipped data"), default_dataset());
}

#[tokio::test]
async fn long_names_load_from_file() {
    let root = tempdir().expect("tempdir");
    let path = root.path().join("data.json");
    let long_name = "a".repeat(300);
    let dataset = Dataset {
        intern: DonationRecord::new("Zara Khan", "zara2025", 3800),
        leaderboard: vec![DonationRecord::new(long_name.clone(), "a2025", 100)],
    };
    std::fs::write(&path, serde_json::to_vec(&dataset).expect("encode")).expect("write");

    let source = JsonFileSource::new(path);
    let loaded = load(&source).await;
    assert_eq!(loaded, dataset);
    assert_eq!(loaded.leaderboard[0].name, long_name);
}
