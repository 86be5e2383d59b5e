use nyc_finder::source::HttpParkSource;
use nyc_finder_common::{
    present, Borough, BoroughFilter, CancellationToken, ParkQuery, ParkSource, SortOption,
    DATASET_URL, RESULT_LIMIT,
};

#[tokio::test]
async fn nyc_open_data_integration() {
    match std::env::var("NYC_FINDER_LIVE") {
        Ok(flag) if !flag.trim().is_empty() => {}
        _ => {
            eprintln!("NYC_FINDER_LIVE not set; skipping integration test");
            return;
        }
    }

    let source = HttpParkSource::new(DATASET_URL).expect("client build failed");
    let query = ParkQuery::new("park", BoroughFilter::Only(Borough::Manhattan), SortOption::Name);
    let records = source
        .fetch_parks(&query, &CancellationToken::new())
        .await
        .expect("request failed");

    assert!(!records.is_empty());
    assert!(records.len() <= RESULT_LIMIT as usize);

    for record in records.into_iter().map(present) {
        assert!(!record.id.is_empty());
        assert!(!record.name.is_empty());
        assert!(!record.address.is_empty());
        assert_eq!(record.borough, "Manhattan");
    }
}
