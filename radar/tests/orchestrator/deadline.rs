use std::time::Duration;

use radar::{FailureReason, Indicator, ProviderKey};
use radar_mock::MockBehavior;

use crate::helpers::{months, stack, years};

#[tokio::test(start_paused = true)]
async fn request_deadline_ends_hanging_chains() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::Reserves, MockBehavior::Hang)
        .await;
    s.wb.set("DEU", Indicator::Reserves, MockBehavior::Return(years(2000, 2023, 1.0)))
        .await;
    s.imf
        .set("DEU", Indicator::ExchangeRate, MockBehavior::Return(months(2024, 0.9)))
        .await;

    let radar = s
        .builder()
        .provider_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let report = radar
        .country_report(
            "Germany",
            &[Indicator::ExchangeRate, Indicator::Reserves],
            None,
        )
        .await
        .unwrap();

    assert!(report.get(Indicator::ExchangeRate).unwrap().is_available());
    let reserves = report.get(Indicator::Reserves).unwrap();
    assert!(!reserves.is_available());
    assert_eq!(reserves.attempts().len(), 1);
    assert_eq!(reserves.attempts()[0].provider, ProviderKey::IMF_IFS);
    assert_eq!(reserves.attempts()[0].reason, FailureReason::Timeout);
    assert_eq!(s.wb.total_calls().await, 0, "chain stops at the deadline");
}

#[tokio::test(start_paused = true)]
async fn slow_provider_inside_its_budget_still_wins() {
    let s = stack();
    s.imf
        .set(
            "DEU",
            Indicator::CpiInflation,
            MockBehavior::Delay(Duration::from_millis(30), months(2024, 1.0)),
        )
        .await;

    let radar = s
        .builder()
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let report = radar
        .country_report("Germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();

    assert_eq!(
        report.get(Indicator::CpiInflation).unwrap().provider(),
        Some(ProviderKey::IMF_IFS)
    );
}

#[tokio::test(start_paused = true)]
async fn without_a_request_deadline_only_provider_timeouts_apply() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::Reserves, MockBehavior::Hang)
        .await;
    s.wb.set("DEU", Indicator::Reserves, MockBehavior::Return(years(2000, 2023, 1.0)))
        .await;

    let radar = s
        .builder()
        .provider_timeout(Duration::from_millis(100))
        .no_request_timeout()
        .build()
        .unwrap();
    let report = radar
        .country_report("Germany", &[Indicator::Reserves], None)
        .await
        .unwrap();
    let res = report.get(Indicator::Reserves).unwrap().resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::WORLD_BANK);
    assert_eq!(res.attempts[0].reason, FailureReason::Timeout);
}
