use proptest::prelude::*;
use radar::{Indicator, RadarError};
use radar_mock::MockBehavior;

use crate::helpers::{Stack, months, stack, years};

async fn seeded() -> Stack {
    let s = stack();
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 1.0)))
        .await;
    s.imf
        .set(
            "DEU",
            Indicator::Reserves,
            MockBehavior::Fail(RadarError::network("imf-ifs", "status 500")),
        )
        .await;
    s.eurostat
        .set("DEU", Indicator::UnemploymentRate, MockBehavior::Return(months(2024, 3.0)))
        .await;
    s.ecb
        .set("DEU", Indicator::PolicyRate, MockBehavior::Return(months(2024, 2.0)))
        .await;
    s.wb.set_for_all(
        Indicator::GovernmentEffectiveness,
        MockBehavior::Return(years(2010, 2023, 1.2)),
    )
    .await;
    s.wb.set("DEU", Indicator::Reserves, MockBehavior::Return(years(2000, 2023, 200.0)))
        .await;
    s
}

#[tokio::test]
async fn same_inputs_give_byte_identical_reports() {
    let s = seeded().await;
    let radar = s.radar();

    let first = radar
        .country_report("Germany", &Indicator::ALL, None)
        .await
        .unwrap();
    let second = radar
        .country_report("Germany", &Indicator::ALL, None)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn report_keys_follow_display_order() {
    let s = seeded().await;
    let report = s
        .radar()
        .country_report(
            "Germany",
            &[Indicator::GovernmentEffectiveness, Indicator::CpiInflation],
            None,
        )
        .await
        .unwrap();

    let text = serde_json::to_string(&report).unwrap();
    assert!(text.find("cpi_yoy").unwrap() < text.find("government_effectiveness").unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 24, .. ProptestConfig::default() })]
    #[test]
    fn request_order_never_changes_the_report(
        shuffled in Just(Indicator::ALL.to_vec()).prop_shuffle(),
        take in 1usize..=9,
    ) {
        let picked: Vec<Indicator> = shuffled.into_iter().take(take).collect();
        let mut canonical = picked.clone();
        canonical.sort();

        let (a, b) = tokio_test::block_on(async move {
            let s = seeded().await;
            let radar = s.radar();
            let a = radar.country_report("Germany", &picked, None).await.unwrap();
            let b = radar.country_report("Germany", &canonical, None).await.unwrap();
            (serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap())
        });

        prop_assert_eq!(a, b);
    }
}
