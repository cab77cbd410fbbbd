//! Ranking query validation and CSV export.

use footprint_application::{export_csv, parse_week, ApplicationError, RankingController, SharedBackend};
use footprint_domain::WeekNumber;
use footprint_testing::{create_test_ranking, MockBackend, Operation, RankingItemBuilder};
use std::sync::Arc;

#[test]
fn test_csv_quotes_every_field() {
    let items = vec![RankingItemBuilder::new()
        .with_rank(1)
        .with_user(5, "A")
        .with_twitter("@a")
        .with_points(10)
        .with_wallet("0x1")
        .build()];

    let csv = export_csv(&items).unwrap();
    assert_eq!(
        csv,
        "\"rank\",\"user id\",\"user name\",\"twitter\",\"weekly points\",\"wallet address\"\n\
         \"1\",\"5\",\"A\",\"@a\",\"10\",\"0x1\"\n"
    );
}

#[test]
fn test_csv_doubles_embedded_quotes() {
    let items = vec![RankingItemBuilder::new()
        .with_rank(2)
        .with_user(8, "Say \"gm\", friend")
        .with_points(3)
        .build()];

    let csv = export_csv(&items).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, "\"2\",\"8\",\"Say \"\"gm\"\", friend\",\"\",\"3\",\"\"");
}

#[tokio::test]
async fn test_invalid_week_is_rejected_before_any_request() {
    let backend = Arc::new(MockBackend::new().with_ranking(create_test_ranking(3)));
    let shared: SharedBackend = backend.clone();
    let mut ranking = RankingController::new(shared);

    for input in ["0", "-3", "abc"] {
        let err = ranking.fetch_ranking(input).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)), "{}", input);
        assert!(err.to_string().contains("周次必须为正整数"));
    }

    assert_eq!(backend.call_count(Operation::WeeklyRanking), 0);
}

#[test]
fn test_parse_week() {
    assert_eq!(parse_week("  ").unwrap(), None);
    assert_eq!(parse_week(" 12 ").unwrap(), WeekNumber::new(12));
    assert!(parse_week("1.5").is_err());
}

#[tokio::test]
async fn test_export_uses_week_in_file_name() {
    let backend = Arc::new(MockBackend::new().with_ranking(create_test_ranking(4)));
    let shared: SharedBackend = backend.clone();
    let mut ranking = RankingController::new(shared);

    let export = ranking.export("6").await.unwrap();
    assert_eq!(export.file_name, "weekly-ranking-week-6-all.csv");
    assert_eq!(export.rows, 4);
    assert_eq!(export.contents.lines().count(), 5);

    let export = ranking.export("").await.unwrap();
    assert_eq!(export.file_name, "weekly-ranking-week-latest-all.csv");
}

#[tokio::test]
async fn test_export_of_empty_ranking_fails() {
    let backend = Arc::new(MockBackend::new());
    let shared: SharedBackend = backend.clone();
    let mut ranking = RankingController::new(shared);

    let err = ranking.export("2").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Export(_)));
    assert_eq!(backend.call_count(Operation::WeeklyRanking), 1);
}

#[tokio::test]
async fn test_ranking_failure_sets_error() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_next_with_api(Operation::WeeklyRanking, 500, "ranking unavailable");
    let shared: SharedBackend = backend.clone();
    let mut ranking = RankingController::new(shared);

    assert!(ranking.fetch_ranking("").await.is_err());
    assert_eq!(ranking.error(), Some("ranking unavailable"));
}
