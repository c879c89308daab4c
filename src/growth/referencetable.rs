use crate::growth::growtherror::GrowthError;
use crate::growth::referencepoint::ReferencePoint;

/// Reference curve for one metric and one sex: a non-empty list of knots,
/// strictly ascending in age, every knot with `S > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    points: Vec<ReferencePoint>
}

impl ReferenceTable {
    pub fn new(points: Vec<ReferencePoint>) -> Result<ReferenceTable, GrowthError> {
        if points.is_empty() {
            return Err(GrowthError::EmptyTable);
        }
        for (index, point) in points.iter().enumerate() {
            if !(point.s > 0.0) || !point.s.is_finite() {
                return Err(GrowthError::NonPositiveCoefficientOfVariation {
                    age_months: point.age_months,
                    s: point.s
                });
            }
            let ordered = index == 0 || points[index - 1].age_months < point.age_months;
            if !point.age_months.is_finite() || !ordered {
                return Err(GrowthError::UnsortedTable { index, age_months: point.age_months });
            }
        }
        Ok(ReferenceTable { points })
    }

    pub fn from_slice(points: &[ReferencePoint]) -> Result<ReferenceTable, GrowthError> {
        ReferenceTable::new(points.to_vec())
    }

    /// Skips validation; only for the built-in tables, which are checked by
    /// the `whoreferencedata` tests.
    pub(crate) fn from_trusted(points: &[ReferencePoint]) -> ReferenceTable {
        debug_assert!(ReferenceTable::from_slice(points).is_ok());
        ReferenceTable { points: points.to_vec() }
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn first(&self) -> &ReferencePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &ReferencePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn min_age(&self) -> f64 {
        self.first().age_months
    }

    pub fn max_age(&self) -> f64 {
        self.last().age_months
    }

    /// LMS parameters at `age_months`.
    ///
    /// Ages at or below the first knot return the first knot unchanged, ages
    /// at or above the last knot return the last knot unchanged. In between,
    /// L, M and S are interpolated linearly from the bracketing knots.
    pub fn interpolate(&self, age_months: f64) -> ReferencePoint {
        let first = self.first();
        let last = self.last();
        if age_months.is_nan() || age_months <= first.age_months {
            return *first;
        }
        if age_months >= last.age_months {
            return *last;
        }

        // first.age < age < last.age, so 1 <= upper_index <= len - 1
        let upper_index = self.points.partition_point(|p| p.age_months <= age_months);
        let lower = &self.points[upper_index - 1];
        let upper = &self.points[upper_index];
        lower.lerp(upper, age_months)
    }
}

pub fn interpolate_lms(table: &ReferenceTable, age_months: f64) -> ReferencePoint {
    table.interpolate(age_months)
}
