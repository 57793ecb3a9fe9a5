use radar::{
    FailureReason, Frequency, Indicator, ProviderKey, RadarError, Series, is_more_timely,
};
use radar_mock::MockBehavior;

use crate::helpers::{m, months, q, stack, years};

#[tokio::test]
async fn highest_priority_non_empty_series_wins() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::Reserves, MockBehavior::Return(months(2024, 100.0)))
        .await;
    s.wb.set("DEU", Indicator::Reserves, MockBehavior::Return(years(2000, 2023, 1.0)))
        .await;

    let report = s
        .radar()
        .country_report("Germany", &[Indicator::Reserves], None)
        .await
        .unwrap();
    let res = report.get(Indicator::Reserves).unwrap().resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::IMF_IFS);
    assert_eq!(res.period, m(2024, 12));
    assert_eq!(res.value, 112.0);
    assert!(res.attempts.is_empty());
    assert_eq!(s.wb.total_calls().await, 0, "lower priority must not be called");
}

#[tokio::test]
async fn failure_falls_through_and_is_recorded() {
    let s = stack();
    s.imf
        .set(
            "DEU",
            Indicator::CpiInflation,
            MockBehavior::Fail(RadarError::network("imf-ifs", "status 503")),
        )
        .await;
    s.eurostat
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 1.0)))
        .await;

    let report = s
        .radar()
        .country_report("Germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();
    let res = report.get(Indicator::CpiInflation).unwrap().resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::EUROSTAT);
    assert_eq!(res.attempts.len(), 1);
    assert_eq!(res.attempts[0].provider, ProviderKey::IMF_IFS);
    assert_eq!(
        res.attempts[0].reason,
        FailureReason::Network {
            message: "status 503".into()
        }
    );
    assert_eq!(s.wb.total_calls().await, 0);
}

#[tokio::test]
async fn parse_failure_and_empty_answers_both_fall_through() {
    let s = stack();
    s.imf
        .set(
            "DEU",
            Indicator::UnemploymentRate,
            MockBehavior::Fail(RadarError::parse("imf-ifs", "unexpected shape")),
        )
        .await;
    s.eurostat
        .set("DEU", Indicator::UnemploymentRate, MockBehavior::Empty)
        .await;
    s.wb.set(
        "DEU",
        Indicator::UnemploymentRate,
        MockBehavior::Return(years(2010, 2023, 3.0)),
    )
    .await;

    let report = s
        .radar()
        .country_report("Germany", &[Indicator::UnemploymentRate], None)
        .await
        .unwrap();
    let entry = report.get(Indicator::UnemploymentRate).unwrap();

    assert_eq!(entry.provider(), Some(ProviderKey::WORLD_BANK));
    let reasons: Vec<_> = entry.attempts().iter().map(|a| a.reason.clone()).collect();
    assert!(matches!(reasons[0], FailureReason::Parse { .. }));
    assert_eq!(reasons[1], FailureReason::Empty);
}

#[tokio::test]
async fn unsupported_pairs_are_skipped_without_a_call() {
    let s = stack();
    s.imf.set("JPN", Indicator::PolicyRate, MockBehavior::Empty).await;

    let report = s
        .radar()
        .country_report("Japan", &[Indicator::PolicyRate], None)
        .await
        .unwrap();
    let entry = report.get(Indicator::PolicyRate).unwrap();

    assert!(!entry.is_available());
    let got: Vec<_> = entry
        .attempts()
        .iter()
        .map(|a| (a.provider, a.reason.clone()))
        .collect();
    assert_eq!(
        got,
        vec![
            (ProviderKey::IMF_IFS, FailureReason::Empty),
            (ProviderKey::ECB, FailureReason::UnsupportedCountry),
            (ProviderKey::WORLD_BANK, FailureReason::UnsupportedIndicator),
        ]
    );
    assert_eq!(s.ecb.total_calls().await, 0);
    assert_eq!(s.wb.total_calls().await, 0);
}

#[tokio::test]
async fn priority_beats_timeliness() {
    let quarterly = vec![(q(2024, 1), 1.0), (q(2024, 2), 1.5)];
    let annual = years(2015, 2022, 2.0);
    let imf_series = Series::new(
        Indicator::GdpGrowth,
        "USA",
        ProviderKey::IMF_IFS,
        Frequency::Quarterly,
        quarterly.clone(),
    )
    .unwrap();
    let wb_series = Series::new(
        Indicator::GdpGrowth,
        "USA",
        ProviderKey::WORLD_BANK,
        Frequency::Annual,
        annual.clone(),
    )
    .unwrap();
    assert!(is_more_timely(&imf_series, &wb_series));

    let s = stack();
    s.imf
        .set("USA", Indicator::GdpGrowth, MockBehavior::Return(quarterly))
        .await;
    s.wb.set("USA", Indicator::GdpGrowth, MockBehavior::Return(annual))
        .await;

    let radar = s
        .builder()
        .prefer(
            Indicator::GdpGrowth,
            &[ProviderKey::WORLD_BANK, ProviderKey::IMF_IFS],
        )
        .build()
        .unwrap();
    let report = radar
        .country_report("United States", &[Indicator::GdpGrowth], None)
        .await
        .unwrap();
    let res = report.get(Indicator::GdpGrowth).unwrap().resolution().unwrap();

    assert_eq!(res.provider, ProviderKey::WORLD_BANK);
    assert_eq!(res.frequency, Frequency::Annual);
    assert_eq!(s.imf.total_calls().await, 0);
}

#[tokio::test]
async fn resolve_indicator_for_a_known_country() {
    let s = stack();
    s.ecb
        .set("FRA", Indicator::PolicyRate, MockBehavior::Return(months(2024, 2.0)))
        .await;
    let radar = s.radar();
    let france = radar.resolve_country("France").unwrap();

    let entry = radar
        .resolve_indicator(&france, Indicator::PolicyRate, None)
        .await;

    assert_eq!(entry.provider(), Some(ProviderKey::ECB));
    assert_eq!(entry.attempts()[0].reason, FailureReason::Empty);
}
