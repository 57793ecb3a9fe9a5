// Shared fixtures so tests can `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use radar::{Frequency, Indicator, Period, Provider, ProviderKey, Radar, RadarBuilder};
use radar_core::country::{EU_EEA_UK, EURO_AREA};
use radar_mock::{DynamicMockProvider, MockController};

/// Countries the IMF mock maps (Tuvalu deliberately absent).
pub const IMF_COVERAGE: &[&str] = &["DE", "FR", "IT", "ES", "GB", "US", "JP", "SE", "BR"];

/// Four mock providers with the same keys and capabilities as the real
/// adapters, plus their controllers.
pub struct Stack {
    pub imf: MockController,
    pub eurostat: MockController,
    pub ecb: MockController,
    pub wb: MockController,
    pub providers: Vec<Arc<dyn Provider>>,
}

impl Stack {
    /// Builder with every mock registered and a short provider timeout.
    pub fn builder(&self) -> RadarBuilder {
        self.providers
            .iter()
            .cloned()
            .fold(Radar::builder(), RadarBuilder::with_provider)
            .provider_timeout(Duration::from_millis(200))
    }

    pub fn radar(&self) -> Radar {
        self.builder().build().unwrap()
    }

    /// Total calls across all four mocks.
    pub async fn total_calls(&self) -> usize {
        self.imf.total_calls().await
            + self.eurostat.total_calls().await
            + self.ecb.total_calls().await
            + self.wb.total_calls().await
    }
}

pub fn stack() -> Stack {
    use Frequency::{Annual, Monthly, Quarterly};
    use Indicator as I;

    let (imf, imf_ctl) = DynamicMockProvider::builder(ProviderKey::IMF_IFS.as_str())
        .reports(I::CpiInflation, Monthly)
        .reports(I::ExchangeRate, Monthly)
        .reports(I::Reserves, Monthly)
        .reports(I::UnemploymentRate, Monthly)
        .reports(I::PolicyRate, Monthly)
        .reports(I::GdpGrowth, Quarterly)
        .reports(I::GovernmentDebtRatio, Annual)
        .covers(IMF_COVERAGE)
        .build();
    let (es, es_ctl) = DynamicMockProvider::builder(ProviderKey::EUROSTAT.as_str())
        .reports(I::CpiInflation, Monthly)
        .reports(I::UnemploymentRate, Monthly)
        .reports(I::GovernmentDebtRatio, Annual)
        .covers(EU_EEA_UK)
        .build();
    let (ecb, ecb_ctl) = DynamicMockProvider::builder(ProviderKey::ECB.as_str())
        .reports(I::PolicyRate, Monthly)
        .covers(EURO_AREA)
        .build();
    let mut wb_builder = DynamicMockProvider::builder(ProviderKey::WORLD_BANK.as_str());
    for i in Indicator::ALL {
        if i != I::PolicyRate {
            wb_builder = wb_builder.reports(i, Annual);
        }
    }
    let (wb, wb_ctl) = wb_builder.build();

    Stack {
        imf: imf_ctl,
        eurostat: es_ctl,
        ecb: ecb_ctl,
        wb: wb_ctl,
        providers: vec![imf, es, ecb, wb],
    }
}

pub fn m(year: i32, month: u8) -> Period {
    Period::month(year, month).unwrap()
}

pub fn q(year: i32, quarter: u8) -> Period {
    Period::quarter(year, quarter).unwrap()
}

pub const fn y(year: i32) -> Period {
    Period::Year(year)
}

/// Twelve monthly points for `year`, value `base + month`.
pub fn months(year: i32, base: f64) -> Vec<(Period, f64)> {
    (1..=12).map(|mo| (m(year, mo), base + f64::from(mo))).collect()
}

/// Annual points for `from..=to`, value `base + offset`.
pub fn years(from: i32, to: i32, base: f64) -> Vec<(Period, f64)> {
    (from..=to)
        .map(|yr| (y(yr), base + f64::from(yr - from)))
        .collect()
}
