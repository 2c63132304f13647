//! # Product Registry
//!
//! Static reference data for the six on-the-run US Treasuries: CUSIP,
//! ticker, coupon, maturity and PV01.
//!
//! Connectors resolve incoming product identifiers here. An unknown
//! CUSIP yields `None`; tolerant ingest substitutes `Bond::default()`
//! at the boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::bond::{Bond, BondIdType};

struct BondEntry {
    cusip: &'static str,
    ticker: &'static str,
    /// Coupon scaled by 1e5 (1750 = 1.750%).
    coupon_1e5: i64,
    maturity: (i32, u32, u32),
    /// PV01 scaled by 1e8.
    pv01_1e8: i64,
}

const TREASURIES: [BondEntry; 6] = [
    BondEntry {
        cusip: "9128283H1",
        ticker: "US2Y",
        coupon_1e5: 1_750,
        maturity: (2019, 11, 30),
        pv01_1e8: 1_948_992,
    },
    BondEntry {
        cusip: "9128283L2",
        ticker: "US3Y",
        coupon_1e5: 1_875,
        maturity: (2020, 12, 15),
        pv01_1e8: 2_865_304,
    },
    BondEntry {
        cusip: "912828M80",
        ticker: "US5Y",
        coupon_1e5: 2_000,
        maturity: (2022, 11, 30),
        pv01_1e8: 4_581_119,
    },
    BondEntry {
        cusip: "9128283J7",
        ticker: "US7Y",
        coupon_1e5: 2_125,
        maturity: (2024, 11, 30),
        pv01_1e8: 6_127_718,
    },
    BondEntry {
        cusip: "9128283F5",
        ticker: "US10Y",
        coupon_1e5: 2_250,
        maturity: (2027, 12, 15),
        pv01_1e8: 8_161_449,
    },
    BondEntry {
        cusip: "912810RZ3",
        ticker: "US30Y",
        coupon_1e5: 2_750,
        maturity: (2047, 12, 15),
        pv01_1e8: 15_013_155,
    },
];

fn find(cusip: &str) -> Option<&'static BondEntry> {
    TREASURIES.iter().find(|entry| entry.cusip == cusip)
}

/// Looks up the bond for a CUSIP.
///
/// # Examples
///
/// ```
/// use bond_fabric::infrastructure::registry;
///
/// let bond = registry::bond("9128283F5").unwrap();
/// assert_eq!(bond.ticker(), "US10Y");
/// assert!(registry::bond("XXXXXXXXX").is_none());
/// ```
#[must_use]
pub fn bond(cusip: &str) -> Option<Bond> {
    let entry = find(cusip)?;
    let (year, month, day) = entry.maturity;
    let maturity = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(Bond::new(
        entry.cusip,
        BondIdType::Cusip,
        entry.ticker,
        Decimal::new(entry.coupon_1e5, 5),
        maturity,
    ))
}

/// Looks up the PV01 for a CUSIP.
#[must_use]
pub fn pv01(cusip: &str) -> Option<Decimal> {
    find(cusip).map(|entry| Decimal::new(entry.pv01_1e8, 8))
}

/// Returns the supported CUSIPs.
#[must_use]
pub fn supported_cusips() -> Vec<&'static str> {
    TREASURIES.iter().map(|entry| entry.cusip).collect()
}
