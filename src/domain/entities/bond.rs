//! # Bond Product
//!
//! US Treasury bond metadata.
//!
//! A [`Bond`] is immutable once constructed. Unknown products ingested
//! from a stream are represented by `Bond::default()` (empty identifier,
//! zero coupon), which downstream stores accept unchanged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier scheme of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum BondIdType {
    /// 9-character US security identifier.
    #[default]
    Cusip = 0,
    /// International securities identification number.
    Isin = 1,
}

impl fmt::Display for BondIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cusip => write!(f, "CUSIP"),
            Self::Isin => write!(f, "ISIN"),
        }
    }
}

/// A US Treasury bond product.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::entities::bond::{Bond, BondIdType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let maturity = NaiveDate::from_ymd_opt(2019, 11, 30).unwrap();
/// let bond = Bond::new("9128283H1", BondIdType::Cusip, "US2Y", Decimal::new(1750, 5), maturity);
/// assert_eq!(bond.product_id(), "9128283H1");
/// assert_eq!(bond.ticker(), "US2Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bond {
    /// Product identifier (the CUSIP for Treasuries).
    product_id: String,
    /// Identifier scheme.
    id_type: BondIdType,
    /// Short ticker, e.g. `US10Y`.
    ticker: String,
    /// Annual coupon as a fraction (0.0225 = 2.250%).
    coupon: Decimal,
    /// Maturity date.
    maturity: NaiveDate,
}

impl Bond {
    /// Creates a new bond.
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        id_type: BondIdType,
        ticker: impl Into<String>,
        coupon: Decimal,
        maturity: NaiveDate,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            id_type,
            ticker: ticker.into(),
            coupon,
            maturity,
        }
    }

    /// Returns the product identifier.
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the identifier scheme.
    #[inline]
    #[must_use]
    pub fn id_type(&self) -> BondIdType {
        self.id_type
    }

    /// Returns the ticker.
    #[inline]
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the annual coupon as a fraction.
    #[inline]
    #[must_use]
    pub fn coupon(&self) -> Decimal {
        self.coupon
    }

    /// Returns the maturity date.
    #[inline]
    #[must_use]
    pub fn maturity(&self) -> NaiveDate {
        self.maturity
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}% {}",
            self.ticker,
            self.product_id,
            self.coupon * Decimal::ONE_HUNDRED,
            self.maturity
        )
    }
}
