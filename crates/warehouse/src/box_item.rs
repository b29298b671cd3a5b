//! A single packaged item carried on a pallet.

use chrono::{Days, NaiveDate};

use palletstore_core::{DomainError, DomainResult, ValueObject};

use crate::dimensions::Dimensions;

/// Shelf life applied to a box that only knows its production date.
pub const SHELF_LIFE_DAYS: u64 = 100;

/// Where a box's expiration date comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expiration {
    /// Set directly on the box; wins over any production date.
    Explicit(NaiveDate),
    /// Production date plus [`SHELF_LIFE_DAYS`].
    FromProduction(NaiveDate),
    /// Neither date is known (or the derived date is past the calendar's end).
    Unknown,
}

impl Expiration {
    /// Resolve in order: explicit, then derived from production, then unknown.
    pub fn resolve(explicit: Option<NaiveDate>, production: Option<NaiveDate>) -> Self {
        if let Some(date) = explicit {
            return Self::Explicit(date);
        }
        production
            .and_then(|p| p.checked_add_days(Days::new(SHELF_LIFE_DAYS)))
            .map_or(Self::Unknown, Self::FromProduction)
    }

    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Explicit(date) | Self::FromProduction(date) => Some(date),
            Self::Unknown => None,
        }
    }
}

/// Value object: a packaged item with dimensions, weight and dates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxItem {
    dimensions: Dimensions,
    weight: f64,
    production_date: Option<NaiveDate>,
    explicit_expiration: Option<NaiveDate>,
}

impl ValueObject for BoxItem {}

impl BoxItem {
    /// Weight must be finite and non-negative.
    pub fn new(dimensions: Dimensions, weight: f64) -> DomainResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(DomainError::validation(format!(
                "weight must be a non-negative number (got {weight})"
            )));
        }
        Ok(Self {
            dimensions,
            weight,
            production_date: None,
            explicit_expiration: None,
        })
    }

    pub fn produced_on(mut self, date: Option<NaiveDate>) -> Self {
        self.production_date = date;
        self
    }

    pub fn expires_on(mut self, date: Option<NaiveDate>) -> Self {
        self.explicit_expiration = date;
        self
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    pub fn production_date(&self) -> Option<NaiveDate> {
        self.production_date
    }

    /// The explicitly assigned expiration date, ignoring derivation.
    pub fn explicit_expiration(&self) -> Option<NaiveDate> {
        self.explicit_expiration
    }

    pub fn expiration(&self) -> Expiration {
        Expiration::resolve(self.explicit_expiration, self.production_date)
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration().date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unit_box(weight: f64) -> BoxItem {
        BoxItem::new(Dimensions::new(1.0, 1.0, 1.0).unwrap(), weight).unwrap()
    }

    #[test]
    fn expiration_derives_from_production_date() {
        let item = unit_box(10.0).produced_on(Some(date(2024, 1, 1)));
        assert_eq!(item.expiration(), Expiration::FromProduction(date(2024, 4, 10)));
        assert_eq!(item.expiration_date(), Some(date(2024, 4, 10)));
        assert_eq!(item.volume(), 1.0);
    }

    #[test]
    fn explicit_expiration_wins_over_production() {
        let item = unit_box(10.0)
            .produced_on(Some(date(2024, 1, 1)))
            .expires_on(Some(date(2024, 2, 1)));
        assert_eq!(item.expiration(), Expiration::Explicit(date(2024, 2, 1)));
    }

    #[test]
    fn explicit_expiration_without_production() {
        let item = unit_box(1.0).expires_on(Some(date(2025, 6, 30)));
        assert_eq!(item.expiration_date(), Some(date(2025, 6, 30)));
    }

    #[test]
    fn no_dates_means_unknown_expiration() {
        let item = unit_box(1.0);
        assert_eq!(item.expiration(), Expiration::Unknown);
        assert_eq!(item.expiration_date(), None);
    }

    #[test]
    fn derived_date_past_calendar_end_is_unknown() {
        let item = unit_box(1.0).produced_on(Some(NaiveDate::MAX));
        assert_eq!(item.expiration(), Expiration::Unknown);
    }

    #[test]
    fn rejects_negative_weight() {
        let dims = Dimensions::new(1.0, 1.0, 1.0).unwrap();
        assert!(matches!(
            BoxItem::new(dims, -0.5),
            Err(DomainError::Validation(_))
        ));
        assert!(BoxItem::new(dims, 0.0).is_ok());
    }
}
