use radar::{FailureReason, Frequency, Indicator, Period, ProviderKey, Radar, RadarError};
use radar_mock::{DynamicMockProvider, MockBehavior};

use crate::helpers::{stack, years};

#[tokio::test]
async fn unknown_name_fails_the_whole_report() {
    let s = stack();
    let err = s
        .radar()
        .country_report("Atlantis", &Indicator::ALL, None)
        .await
        .unwrap_err();

    assert_eq!(err, RadarError::unknown_country("Atlantis"));
    assert_eq!(s.total_calls().await, 0);
}

#[tokio::test]
async fn country_no_provider_maps_is_unknown() {
    let (ecb, ctl) = DynamicMockProvider::builder(ProviderKey::ECB.as_str())
        .reports(Indicator::PolicyRate, Frequency::Monthly)
        .covers(&["DE", "FR"])
        .build();
    let radar = Radar::builder().with_provider(ecb).build().unwrap();

    let err = radar.debt_report("Brazil", None).await.unwrap_err();

    assert!(matches!(err, RadarError::UnknownCountry { .. }));
    assert_eq!(ctl.total_calls().await, 0);
}

#[test]
fn names_aliases_and_codes_resolve() {
    let radar = stack().radar();
    for query in ["Germany", "  germany ", "DE", "deu"] {
        assert_eq!(radar.resolve_country(query).unwrap().iso3, "DEU", "{query}");
    }
    assert_eq!(radar.resolve_country("hellas").unwrap().iso2, "GR");
    assert!(radar.resolve_country("").is_err());
    assert!(radar.resolve_country("XX").is_err());
}

#[tokio::test]
async fn any_iso_country_resolves_through_world_bank() {
    let s = stack();
    s.wb.set("LKA", Indicator::GdpGrowth, MockBehavior::Return(years(2004, 2023, 1.0)))
        .await;

    let report = s
        .radar()
        .country_report("Sri Lanka", &[Indicator::GdpGrowth], None)
        .await
        .unwrap();

    assert_eq!(report.country.iso3, "LKA");
    let res = report.get(Indicator::GdpGrowth).unwrap().resolution().unwrap();
    assert_eq!(res.provider, ProviderKey::WORLD_BANK);
    assert_eq!(res.period, Period::Year(2023));
    assert_eq!(res.attempts[0].provider, ProviderKey::IMF_IFS);
    assert_eq!(res.attempts[0].reason, FailureReason::UnsupportedCountry);
    assert_eq!(s.imf.total_calls().await, 0);

    for query in ["Lebanon", "lbn", "Vanuatu", "Côte d'Ivoire"] {
        assert!(s.radar().resolve_country(query).is_ok(), "{query}");
    }
}
