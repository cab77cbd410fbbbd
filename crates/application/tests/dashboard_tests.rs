//! Level recalculation, dashboard stats, detail dialog and session gate.

use footprint_application::{
    ApplicationError, BannerKind, ControllerConfig, Dashboard, DetailDialog, LevelRecalculation,
    SessionGate, SharedBackend,
};
use footprint_testing::{create_test_logs, create_user_session, MockBackend, Operation};
use std::sync::Arc;
use std::time::Duration;

fn shared(backend: &Arc<MockBackend>) -> SharedBackend {
    backend.clone()
}

#[tokio::test]
async fn test_recalculation_requires_confirmation() {
    let backend = Arc::new(MockBackend::new().with_updated_count(12));
    let mut levels = LevelRecalculation::new(shared(&backend), &ControllerConfig::default());

    let err = levels.trigger(false).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotReady(_)));
    assert_eq!(backend.call_count(Operation::RecalculateLevels), 0);
    assert!(levels.banner().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_success_banner_reports_count_and_expires() {
    let backend = Arc::new(MockBackend::new().with_updated_count(318));
    let mut levels = LevelRecalculation::new(shared(&backend), &ControllerConfig::default());

    let banner = levels.trigger(true).await.unwrap().clone();
    assert_eq!(banner.kind, BannerKind::Success);
    assert!(banner.message.contains("318"));
    assert_eq!(backend.call_count(Operation::RecalculateLevels), 1);

    tokio::time::advance(Duration::from_secs(3)).await;
    assert!(levels.banner().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_error_banner_lasts_longer() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_next_with_api(Operation::RecalculateLevels, 500, "job already running");
    let mut levels = LevelRecalculation::new(shared(&backend), &ControllerConfig::default());

    let banner = levels.trigger(true).await.unwrap().clone();
    assert!(banner.is_error());
    assert!(banner.message.contains("job already running"));

    tokio::time::advance(Duration::from_secs(4)).await;
    assert!(levels.banner().is_some());
    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(levels.banner().is_none());
}

#[tokio::test]
async fn test_dashboard_loads_stats() {
    let backend = Arc::new(MockBackend::new());
    let mut dashboard = Dashboard::new(shared(&backend), &ControllerConfig::default());

    let stats = dashboard.load_dashboard().await.unwrap();
    assert_eq!(stats.total_users, 1520);

    backend.fail_next_with_api(Operation::AdminStats, 500, "stats offline");
    assert!(dashboard.load_dashboard().await.is_err());
    assert!(dashboard.banner().unwrap().is_error());
    assert_eq!(dashboard.stats().unwrap().total_users, 1520);
}

#[tokio::test]
async fn test_detail_refetches_on_every_open() {
    let backend = Arc::new(MockBackend::new().with_logs(create_test_logs(3)));
    let mut detail = DetailDialog::new(shared(&backend));

    assert_eq!(detail.open(2).await.unwrap().id, 2);
    detail.close();
    assert!(!detail.is_open());
    detail.open(2).await.unwrap();
    assert_eq!(backend.call_count(Operation::GetLog), 2);

    assert!(detail.open(99).await.is_err());
    assert!(!detail.is_open());
}

#[tokio::test]
async fn test_session_gate_blocks_participants() {
    let backend = Arc::new(MockBackend::new().with_session(create_user_session()));
    let gate = SessionGate::load(&shared(&backend)).await.unwrap();

    assert!(!gate.is_admin());
    assert!(matches!(
        gate.require_admin(),
        Err(ApplicationError::Forbidden(_))
    ));
}
