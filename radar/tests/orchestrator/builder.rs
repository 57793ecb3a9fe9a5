use std::time::Duration;

use radar::{Frequency, Indicator, PriorityTable, ProviderKey, Radar, RadarError};
use radar_mock::{DynamicMockProvider, MockBehavior};

use crate::helpers::{months, stack};

#[test]
fn build_without_providers_is_invalid() {
    let err = Radar::builder().build().err().unwrap();
    assert!(matches!(err, RadarError::InvalidArg(_)));
}

#[test]
fn defaults_are_applied() {
    let radar = stack().radar();
    let cfg = radar.config();
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(20)));
    assert_eq!(cfg.debt_max_age_years, 5);
    assert_eq!(
        cfg.priority.order(Indicator::GovernmentDebtRatio),
        &[
            ProviderKey::EUROSTAT,
            ProviderKey::IMF_IFS,
            ProviderKey::WORLD_BANK
        ]
    );
}

#[test]
fn unregistered_priority_keys_are_dropped() {
    let (wb, _) = DynamicMockProvider::builder(ProviderKey::WORLD_BANK.as_str())
        .reports_all(Frequency::Annual)
        .build();
    let radar = Radar::builder().with_provider(wb).build().unwrap();

    assert_eq!(
        radar.config().priority.order(Indicator::CpiInflation),
        &[ProviderKey::WORLD_BANK]
    );
}

#[tokio::test]
async fn duplicate_registrations_keep_the_first() {
    let (first, first_ctl) = DynamicMockProvider::builder(ProviderKey::IMF_IFS.as_str())
        .reports(Indicator::CpiInflation, Frequency::Monthly)
        .build();
    let (second, second_ctl) = DynamicMockProvider::builder(ProviderKey::IMF_IFS.as_str())
        .reports(Indicator::CpiInflation, Frequency::Monthly)
        .build();
    first_ctl
        .set_for_all(Indicator::CpiInflation, MockBehavior::Return(months(2024, 1.0)))
        .await;

    let radar = Radar::builder()
        .with_provider(first)
        .with_provider(second)
        .build()
        .unwrap();
    let report = radar
        .country_report("Germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();

    assert!(report.get(Indicator::CpiInflation).unwrap().is_available());
    assert_eq!(second_ctl.total_calls().await, 0);
}

#[tokio::test]
async fn empty_priority_entry_is_unavailable_with_no_attempts() {
    let s = stack();
    let radar = s
        .builder()
        .priority(PriorityTable::new().with(Indicator::CpiInflation, &[ProviderKey::IMF_IFS]))
        .build()
        .unwrap();

    let report = radar
        .country_report("Germany", &[Indicator::Reserves], None)
        .await
        .unwrap();
    let entry = report.get(Indicator::Reserves).unwrap();

    assert!(!entry.is_available());
    assert!(entry.attempts().is_empty());
    assert_eq!(s.total_calls().await, 0);
}
