use std::time::Duration;

use radar::{FailureReason, Indicator, Period, ProviderKey, RadarError};
use radar_mock::MockBehavior;

use crate::helpers::{m, months, stack, years};

#[tokio::test]
async fn germany_cpi_comes_from_imf_alone() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 1.0)))
        .await;
    s.eurostat
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 9.0)))
        .await;
    s.wb.set("DEU", Indicator::CpiInflation, MockBehavior::Return(years(2000, 2023, 2.0)))
        .await;

    let report = s
        .radar()
        .country_report("germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();

    assert_eq!(report.country.iso3, "DEU");
    let res = report.get(Indicator::CpiInflation).unwrap().resolution().unwrap();
    assert_eq!(res.provider, ProviderKey::IMF_IFS);
    assert_eq!(res.period, m(2024, 12));
    assert_eq!(res.value, 13.0);
    assert_eq!(s.eurostat.total_calls().await, 0);
    assert_eq!(s.wb.total_calls().await, 0);
}

#[tokio::test(start_paused = true)]
async fn germany_unemployment_survives_a_hanging_imf() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::UnemploymentRate, MockBehavior::Hang)
        .await;
    s.eurostat
        .set(
            "DEU",
            Indicator::UnemploymentRate,
            MockBehavior::Return(vec![(m(2024, 10), 3.4), (m(2024, 11), 3.5)]),
        )
        .await;

    let radar = s
        .builder()
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let report = radar
        .country_report("Germany", &[Indicator::UnemploymentRate], None)
        .await
        .unwrap();
    let res = report
        .get(Indicator::UnemploymentRate)
        .unwrap()
        .resolution()
        .unwrap();

    assert_eq!(res.provider, ProviderKey::EUROSTAT);
    assert_eq!(res.value, 3.5);
    assert_eq!(res.attempts.len(), 1);
    assert_eq!(res.attempts[0].provider, ProviderKey::IMF_IFS);
    assert_eq!(res.attempts[0].reason, FailureReason::Timeout);
}

#[tokio::test]
async fn tuvalu_only_has_world_bank_gdp() {
    let s = stack();
    s.wb.set("TUV", Indicator::GdpGrowth, MockBehavior::Return(years(2004, 2023, 1.0)))
        .await;

    let report = s
        .radar()
        .country_report("Tuvalu", &Indicator::ALL, None)
        .await
        .unwrap();

    assert_eq!(report.len(), Indicator::ALL.len());
    let gdp = report.get(Indicator::GdpGrowth).unwrap().resolution().unwrap();
    assert_eq!(gdp.provider, ProviderKey::WORLD_BANK);
    assert_eq!(gdp.period, Period::Year(2023));
    assert_eq!(
        gdp.attempts[0].reason,
        FailureReason::UnsupportedCountry,
        "IMF cannot map Tuvalu"
    );

    let unavailable: Vec<_> = report.unavailable().collect();
    assert_eq!(unavailable.len(), Indicator::ALL.len() - 1);
    assert!(!unavailable.contains(&Indicator::GdpGrowth));

    let cpi = report.get(Indicator::CpiInflation).unwrap();
    let reasons: Vec<_> = cpi.attempts().iter().map(|a| a.reason.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            FailureReason::UnsupportedCountry,
            FailureReason::UnsupportedCountry,
            FailureReason::Empty,
        ]
    );

    assert_eq!(s.imf.total_calls().await, 0);
    assert_eq!(s.eurostat.total_calls().await, 0);
    assert_eq!(s.ecb.total_calls().await, 0);
}

#[tokio::test]
async fn one_failing_indicator_does_not_fail_the_report() {
    let s = stack();
    s.imf
        .set(
            "DEU",
            Indicator::Reserves,
            MockBehavior::Fail(RadarError::network("imf-ifs", "connection reset")),
        )
        .await;
    s.wb.set(
        "DEU",
        Indicator::Reserves,
        MockBehavior::Fail(RadarError::network("world-bank-wdi", "status 500")),
    )
    .await;
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 0.5)))
        .await;

    let report = s
        .radar()
        .country_report(
            "Germany",
            &[Indicator::CpiInflation, Indicator::Reserves],
            None,
        )
        .await
        .unwrap();

    assert!(report.get(Indicator::CpiInflation).unwrap().is_available());
    let reserves = report.get(Indicator::Reserves).unwrap();
    assert!(!reserves.is_available());
    let providers: Vec<_> = reserves.attempts().iter().map(|a| a.provider).collect();
    assert_eq!(providers, vec![ProviderKey::IMF_IFS, ProviderKey::WORLD_BANK]);
    assert!(
        reserves
            .attempts()
            .iter()
            .all(|a| matches!(a.reason, FailureReason::Network { .. }))
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["reserves_usd"]["unavailable"], serde_json::json!(true));
    assert_eq!(json["cpi_yoy"]["provider_source"], serde_json::json!("imf-ifs"));
}

#[tokio::test]
async fn duplicate_indicators_collapse() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::ExchangeRate, MockBehavior::Return(months(2024, 0.9)))
        .await;

    let report = s
        .radar()
        .country_report(
            "DE",
            &[Indicator::ExchangeRate, Indicator::ExchangeRate],
            None,
        )
        .await
        .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(s.imf.calls(Indicator::ExchangeRate).await, 1);
}
