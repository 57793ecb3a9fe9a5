use radar::{FailureReason, Indicator, Period, ProviderKey, RadarError, ReportOptions, SeriesMode};
use radar_mock::MockBehavior;

use crate::helpers::{stack, years};

#[tokio::test]
async fn france_debt_prefers_eurostat() {
    let s = stack();
    s.eurostat
        .set(
            "FRA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2015, 2024, 100.0)),
        )
        .await;
    s.imf
        .set(
            "FRA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2015, 2024, 50.0)),
        )
        .await;

    let debt = s
        .radar()
        .debt_report_as_of("France", None, 2025)
        .await
        .unwrap();

    assert_eq!(debt.country.iso2, "FR");
    let res = debt.debt.resolution().unwrap();
    assert_eq!(res.provider, ProviderKey::EUROSTAT);
    assert_eq!(res.period, Period::Year(2024));
    assert_eq!(res.value, 109.0);
    assert_eq!(s.imf.total_calls().await, 0);

    let json = serde_json::to_value(&debt).unwrap();
    assert_eq!(json["provider_source"], serde_json::json!("eurostat"));
    assert_eq!(json["period"], serde_json::json!("2024"));
}

#[tokio::test]
async fn debt_falls_back_to_imf_when_eurostat_fails() {
    let s = stack();
    s.eurostat
        .set(
            "ITA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Fail(RadarError::network("eurostat", "status 502")),
        )
        .await;
    s.imf
        .set(
            "ITA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2020, 2024, 140.0)),
        )
        .await;

    let debt = s.radar().debt_report_as_of("Italy", None, 2025).await.unwrap();
    let res = debt.debt.resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::IMF_IFS);
    assert_eq!(res.attempts.len(), 1);
    assert_eq!(res.attempts[0].provider, ProviderKey::EUROSTAT);
}

#[tokio::test]
async fn stale_debt_is_unavailable() {
    let s = stack();
    s.eurostat
        .set(
            "FRA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2008, 2015, 80.0)),
        )
        .await;

    let debt = s.radar().debt_report_as_of("France", None, 2025).await.unwrap();

    assert!(!debt.debt.is_available());
    let last = debt.debt.attempts().last().unwrap();
    assert_eq!(last.provider, ProviderKey::EUROSTAT);
    assert_eq!(
        last.reason,
        FailureReason::Stale {
            latest: Period::Year(2015)
        }
    );
}

#[tokio::test]
async fn recency_window_is_configurable() {
    let s = stack();
    s.eurostat
        .set(
            "FRA",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2010, 2020, 80.0)),
        )
        .await;

    let default_radar = s.radar();
    let at_edge = default_radar
        .debt_report_as_of("France", None, 2025)
        .await
        .unwrap();
    assert!(at_edge.debt.is_available(), "five years old is still recent");

    let strict = s.builder().debt_max_age_years(2).build().unwrap();
    let stale = strict.debt_report_as_of("France", None, 2025).await.unwrap();
    assert!(!stale.debt.is_available());
}

#[tokio::test]
async fn debt_with_no_data_anywhere_lists_every_provider() {
    let s = stack();

    let debt = s.radar().debt_report_as_of("Japan", None, 2025).await.unwrap();

    let got: Vec<_> = debt
        .debt
        .attempts()
        .iter()
        .map(|a| (a.provider, a.reason.clone()))
        .collect();
    assert_eq!(
        got,
        vec![
            (ProviderKey::EUROSTAT, FailureReason::UnsupportedCountry),
            (ProviderKey::IMF_IFS, FailureReason::Empty),
            (ProviderKey::WORLD_BANK, FailureReason::Empty),
        ]
    );
    assert_eq!(
        serde_json::to_value(&debt).unwrap()["unavailable"],
        serde_json::json!(true)
    );
}

#[tokio::test]
async fn projected_years_are_never_reported() {
    let s = stack();
    s.imf
        .set(
            "JPN",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2023, 2030, 60.0)),
        )
        .await;
    let full = ReportOptions {
        series: SeriesMode::Full,
        keep: None,
    };

    let debt = s
        .radar()
        .debt_report_as_of("Japan", Some(full), 2025)
        .await
        .unwrap();
    let res = debt.debt.resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::IMF_IFS);
    assert_eq!(res.period, Period::Year(2025));
    assert_eq!(res.value, 62.0);
    let history = res.series.as_ref().unwrap();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|p| p.period.year() <= 2025));
}

#[tokio::test]
async fn projections_only_fall_through_as_empty() {
    let s = stack();
    s.imf
        .set(
            "JPN",
            Indicator::GovernmentDebtRatio,
            MockBehavior::Return(years(2026, 2030, 60.0)),
        )
        .await;
    s.wb.set(
        "JPN",
        Indicator::GovernmentDebtRatio,
        MockBehavior::Return(years(2018, 2024, 230.0)),
    )
    .await;

    let debt = s.radar().debt_report_as_of("Japan", None, 2025).await.unwrap();
    let res = debt.debt.resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::WORLD_BANK);
    assert_eq!(res.period, Period::Year(2024));
    assert_eq!(
        res.attempts.last().map(|a| (a.provider, a.reason.clone())),
        Some((ProviderKey::IMF_IFS, FailureReason::Empty))
    );
}
