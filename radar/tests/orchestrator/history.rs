use radar::{Indicator, Period, ReportOptions, SeriesMode};
use radar_mock::MockBehavior;

use crate::helpers::{m, months, stack, years};

#[tokio::test]
async fn mini_history_uses_the_frequency_window() {
    let s = stack();
    let mut two_years = months(2023, 0.0);
    two_years.extend(months(2024, 10.0));
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(two_years))
        .await;
    s.wb.set(
        "DEU",
        Indicator::CurrentAccountBalance,
        MockBehavior::Return(years(1990, 2023, 0.0)),
    )
    .await;

    let opts = ReportOptions {
        series: SeriesMode::Mini,
        keep: None,
    };
    let report = s
        .radar()
        .country_report(
            "Germany",
            &[Indicator::CpiInflation, Indicator::CurrentAccountBalance],
            Some(opts),
        )
        .await
        .unwrap();

    let cpi = report.get(Indicator::CpiInflation).unwrap().resolution().unwrap();
    let points = cpi.series.as_ref().unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points.first().unwrap().period, m(2024, 1));
    assert_eq!(points.last().unwrap().period, cpi.period);

    let ca = report
        .get(Indicator::CurrentAccountBalance)
        .unwrap()
        .resolution()
        .unwrap();
    let points = ca.series.as_ref().unwrap();
    assert_eq!(points.len(), 20);
    assert_eq!(points[0].period, Period::Year(2004));
}

#[tokio::test]
async fn keep_overrides_the_window_and_defaults_apply() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 0.0)))
        .await;

    let radar = s
        .builder()
        .report_options(ReportOptions {
            series: SeriesMode::Full,
            keep: None,
        })
        .build()
        .unwrap();

    let full = radar
        .country_report("Germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();
    let res = full.get(Indicator::CpiInflation).unwrap().resolution().unwrap();
    assert_eq!(res.series.as_ref().map(Vec::len), Some(12));

    let keep = ReportOptions {
        series: SeriesMode::None,
        keep: Some(3),
    };
    let trimmed = radar
        .country_report("Germany", &[Indicator::CpiInflation], Some(keep))
        .await
        .unwrap();
    let json = serde_json::to_value(&trimmed).unwrap();
    let series = json["cpi_yoy"]["series"].as_array().unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0]["period"], serde_json::json!("2024-10"));
}

#[tokio::test]
async fn no_history_by_default() {
    let s = stack();
    s.imf
        .set("DEU", Indicator::CpiInflation, MockBehavior::Return(months(2024, 0.0)))
        .await;

    let report = s
        .radar()
        .country_report("Germany", &[Indicator::CpiInflation], None)
        .await
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["cpi_yoy"].get("series").is_none());
}
