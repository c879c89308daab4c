use std::sync::{
    Arc,
    LazyLock
};

use crate::growth::curvepoint::CurvePoint;
use crate::growth::growtherror::GrowthError;
use crate::growth::growthmetric::GrowthMetric;
use crate::growth::interpretation::{
    Interpretation,
    Language
};
use crate::growth::percentileresult::PercentileResult;
use crate::growth::referencetable::ReferenceTable;
use crate::growth::sex::{
    ReferenceSex,
    Sex
};
use crate::growth::whoreferencedata::who_reference_points;
use crate::manager::referencetablemanager::ReferenceTableManager;
use crate::math::normaldistribution::z_score_to_percentile;
use crate::math::round::round;

pub const MIN_AGE_MONTHS: f64 = 0.0;
pub const MAX_AGE_MONTHS: f64 = 60.0;
pub const DEFAULT_CURVE_STEP_MONTHS: u32 = 3;

static WHO_ENGINE: LazyLock<GrowthPercentileEngine> = LazyLock::new(|| GrowthPercentileEngine {
    weight: MetricTables::who(GrowthMetric::Weight),
    height: MetricTables::who(GrowthMetric::Height),
    head_circumference: MetricTables::who(GrowthMetric::HeadCircumference),
    language: Language::default()
});

// ─────────────────────────────────────────────────────────────────────────────
// MetricTables
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct MetricTables {
    male: Arc<ReferenceTable>,
    female: Arc<ReferenceTable>
}

impl MetricTables {
    fn from_manager(manager: &ReferenceTableManager, metric: GrowthMetric) -> Result<MetricTables, GrowthError> {
        Ok(MetricTables {
            male: manager.get(metric, ReferenceSex::Male)?,
            female: manager.get(metric, ReferenceSex::Female)?
        })
    }

    fn who(metric: GrowthMetric) -> MetricTables {
        MetricTables {
            male: Arc::new(ReferenceTable::from_trusted(who_reference_points(metric, ReferenceSex::Male))),
            female: Arc::new(ReferenceTable::from_trusted(who_reference_points(metric, ReferenceSex::Female)))
        }
    }

    fn get(&self, sex: ReferenceSex) -> &ReferenceTable {
        match sex {
            ReferenceSex::Male => self.male.as_ref(),
            ReferenceSex::Female => self.female.as_ref()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GrowthPercentileEngine
// ─────────────────────────────────────────────────────────────────────────────

/// Percentile lookups and reference curves over one complete set of tables
/// (three metrics, two sexes). Immutable once built and safe to share
/// between threads.
#[derive(Debug, Clone)]
pub struct GrowthPercentileEngine {
    weight: MetricTables,
    height: MetricTables,
    head_circumference: MetricTables,
    language: Language
}

impl GrowthPercentileEngine {
    /// Engine over the built-in WHO tables with English labels.
    pub fn who() -> &'static GrowthPercentileEngine {
        &WHO_ENGINE
    }

    pub fn new(manager: &ReferenceTableManager, language: Language) -> Result<GrowthPercentileEngine, GrowthError> {
        Ok(GrowthPercentileEngine {
            weight: MetricTables::from_manager(manager, GrowthMetric::Weight)?,
            height: MetricTables::from_manager(manager, GrowthMetric::Height)?,
            head_circumference: MetricTables::from_manager(manager, GrowthMetric::HeadCircumference)?,
            language
        })
    }

    pub fn with_language(mut self, language: Language) -> GrowthPercentileEngine {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn table(&self, metric: GrowthMetric, sex: Sex) -> &ReferenceTable {
        let tables = match metric {
            GrowthMetric::Weight => &self.weight,
            GrowthMetric::Height => &self.height,
            GrowthMetric::HeadCircumference => &self.head_circumference
        };
        tables.get(sex.reference_sex())
    }

    /// Percentile of `value` for a child of `sex` aged `age_months`.
    ///
    /// Fails with `AgeOutOfRange` outside [0, 60] months and with
    /// `NonPositiveMeasurement` when `value` is not a positive finite number.
    pub fn try_calculate_percentile(&self,
                                    metric: GrowthMetric,
                                    value: f64,
                                    age_months: f64,
                                    sex: Sex) -> Result<PercentileResult, GrowthError> {
        if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&age_months) {
            return Err(GrowthError::AgeOutOfRange { age_months });
        }
        if !(value > 0.0) || !value.is_finite() {
            return Err(GrowthError::NonPositiveMeasurement { value });
        }

        let lms = self.table(metric, sex).interpolate(age_months);
        let z_score = lms.z_score(value);
        let percentile = z_score_to_percentile(z_score);
        let interpretation = Interpretation::from_percentile(percentile);

        Ok(PercentileResult {
            value,
            percentile,
            z_score: round(z_score, 2),
            interpretation,
            interpretation_text: interpretation.text(self.language).to_owned()
        })
    }

    /// Same as [`try_calculate_percentile`](Self::try_calculate_percentile),
    /// with rejected queries reported as `None`.
    pub fn calculate_percentile(&self,
                                metric: GrowthMetric,
                                value: f64,
                                age_months: f64,
                                sex: Sex) -> Option<PercentileResult> {
        match self.try_calculate_percentile(metric, value, age_months, sex) {
            Ok(result) => Some(result),
            Err(error) => {
                log::debug!("no {} percentile: {}", metric, error);
                None
            }
        }
    }

    pub fn calculate_weight_percentile(&self, weight_kg: f64, age_months: f64, sex: Sex) -> Option<PercentileResult> {
        self.calculate_percentile(GrowthMetric::Weight, weight_kg, age_months, sex)
    }

    pub fn calculate_height_percentile(&self, height_cm: f64, age_months: f64, sex: Sex) -> Option<PercentileResult> {
        self.calculate_percentile(GrowthMetric::Height, height_cm, age_months, sex)
    }

    pub fn calculate_head_circumference_percentile(&self, head_cm: f64, age_months: f64, sex: Sex) -> Option<PercentileResult> {
        self.calculate_percentile(GrowthMetric::HeadCircumference, head_cm, age_months, sex)
    }

    fn curves(&self, metric: GrowthMetric, sex: Sex, max_age_months: f64, step_months: u32) -> PercentileCurves<'_> {
        // f64::min ignores NaN; keep it so the curve comes out empty
        let upper_age = if max_age_months.is_nan() { f64::NAN } else { max_age_months.min(MAX_AGE_MONTHS) };
        log::trace!("{} curve for {:?} up to {} months every {} months", metric, sex, upper_age, step_months);
        PercentileCurves {
            table: self.table(metric, sex),
            next_age: 0,
            step_months,
            upper_age
        }
    }

    /// Lazy curve over ages `0, step, 2·step, …` up to
    /// `min(max_age_months, 60)`. Limits past 60 are clamped, not rejected.
    pub fn percentile_curves(&self,
                             metric: GrowthMetric,
                             sex: Sex,
                             max_age_months: f64,
                             step_months: u32) -> Result<PercentileCurves<'_>, GrowthError> {
        if step_months == 0 {
            return Err(GrowthError::ZeroCurveStep);
        }
        Ok(self.curves(metric, sex, max_age_months, step_months))
    }

    pub fn generate_percentile_curves_with_step(&self,
                                                metric: GrowthMetric,
                                                sex: Sex,
                                                max_age_months: f64,
                                                step_months: u32) -> Result<Vec<CurvePoint>, GrowthError> {
        Ok(self.percentile_curves(metric, sex, max_age_months, step_months)?.collect())
    }

    /// Curve sampled every three months.
    pub fn generate_percentile_curves(&self,
                                      metric: GrowthMetric,
                                      sex: Sex,
                                      max_age_months: f64) -> Vec<CurvePoint> {
        self.curves(metric, sex, max_age_months, DEFAULT_CURVE_STEP_MONTHS).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PercentileCurves
// ─────────────────────────────────────────────────────────────────────────────

/// Iterator over the points of a percentile curve. Holds no state besides
/// its position; a clone taken before iterating replays the same curve.
#[derive(Debug, Clone)]
pub struct PercentileCurves<'a> {
    table: &'a ReferenceTable,
    next_age: u32,
    step_months: u32,
    upper_age: f64
}

impl Iterator for PercentileCurves<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let age = self.next_age as f64;
        if !(age <= self.upper_age) {
            return None;
        }
        self.next_age = self.next_age.saturating_add(self.step_months);
        Some(CurvePoint::from_lms(age, &self.table.interpolate(age)))
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::growth::growtherror::GrowthError;
    use crate::growth::growthmetric::GrowthMetric;
    use crate::growth::interpretation::{
        Interpretation,
        Language
    };
    use crate::growth::sex::Sex;

    use super::GrowthPercentileEngine;

    #[test]
    fn median_boy_at_twelve_months() {
        let result = GrowthPercentileEngine::who()
            .calculate_percentile(GrowthMetric::Weight, 9.6479, 12.0, Sex::Male)
            .unwrap();
        assert_eq!(result.value, 9.6479);
        assert_eq!(result.z_score, 0.0);
        assert_eq!(result.percentile, 50.0);
        assert_eq!(result.interpretation, Interpretation::Normal);
        assert_eq!(result.interpretation_text, "Normal (15-85%)");
    }

    #[test]
    fn out_of_range_ages_are_rejected() {
        let engine = GrowthPercentileEngine::who();
        assert!(engine.calculate_percentile(GrowthMetric::Weight, 9.2, -1.0, Sex::Male).is_none());
        assert!(engine.calculate_percentile(GrowthMetric::Weight, 9.2, 61.0, Sex::Male).is_none());
        assert!(engine.calculate_percentile(GrowthMetric::Weight, 9.2, f64::NAN, Sex::Male).is_none());
        assert!(engine.calculate_percentile(GrowthMetric::Weight, 17.8, 60.0, Sex::Male).is_some());
        assert!(engine.calculate_percentile(GrowthMetric::Weight, 3.3, 0.0, Sex::Male).is_some());
        assert!(matches!(
            engine.try_calculate_percentile(GrowthMetric::Height, 80.0, 60.5, Sex::Female),
            Err(GrowthError::AgeOutOfRange { .. })
        ));
    }

    #[test]
    fn non_positive_measurements_are_rejected() {
        let engine = GrowthPercentileEngine::who();
        for value in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                engine.try_calculate_percentile(GrowthMetric::Weight, value, 6.0, Sex::Female),
                Err(GrowthError::NonPositiveMeasurement { .. })
            ));
        }
    }

    #[test]
    fn neutral_sex_uses_male_tables() {
        let engine = GrowthPercentileEngine::who();
        for metric in GrowthMetric::ALL {
            let neutral = engine.calculate_percentile(metric, 10.0, 7.5, Sex::Neutral);
            let male = engine.calculate_percentile(metric, 10.0, 7.5, Sex::Male);
            assert_eq!(neutral, male);
        }
    }

    #[test]
    fn two_sd_above_height_median() {
        // L = 1 at 24 months for boys: X = M·(1 + 2·S)
        let height = 87.1 * (1.0 + 2.0 * 0.0331);
        let result = GrowthPercentileEngine::who()
            .calculate_height_percentile(height, 24.0, Sex::Male)
            .unwrap();
        assert_eq!(result.z_score, 2.0);
        assert_eq!(result.percentile, 97.7);
        assert_eq!(result.interpretation, Interpretation::VeryHigh);
    }

    #[test]
    fn interpolated_age_between_knots() {
        let engine = GrowthPercentileEngine::who();
        // girls head circumference at 13.5 months: M halfway between 12 and 15
        let median = (44.8965 + 45.55) / 2.0;
        let result = engine
            .calculate_head_circumference_percentile(median, 13.5, Sex::Female)
            .unwrap();
        assert_eq!(result.z_score, 0.0);
        assert_eq!(result.percentile, 50.0);
    }

    #[test]
    fn low_weight_girl() {
        let result = GrowthPercentileEngine::who()
            .calculate_weight_percentile(6.0, 9.0, Sex::Female)
            .unwrap();
        assert!(result.z_score < -2.0);
        assert_eq!(result.interpretation, Interpretation::VeryLow);
    }

    #[test]
    fn turkish_labels() {
        let engine = GrowthPercentileEngine::who().clone().with_language(Language::Turkish);
        let result = engine
            .calculate_weight_percentile(9.6479, 12.0, Sex::Male)
            .unwrap();
        assert_eq!(result.interpretation_text, "Normal (15-85%)");
        let low = engine.calculate_weight_percentile(6.0, 9.0, Sex::Female).unwrap();
        assert_eq!(low.interpretation_text, "Çok düşük (<%3)");
    }

    #[test]
    fn curves_cover_every_third_month() {
        let curve = GrowthPercentileEngine::who()
            .generate_percentile_curves(GrowthMetric::Weight, Sex::Male, 60.0);
        assert_eq!(curve.len(), 21);
        assert_eq!(curve[0].age_months, 0.0);
        assert_eq!(curve[20].age_months, 60.0);
        assert_eq!(curve[4].p50, 9.6);
        assert_abs_diff_eq!(curve[20].p50, 17.8, epsilon = 1e-9);
    }

    #[test]
    fn curves_clamp_to_sixty_months() {
        let engine = GrowthPercentileEngine::who();
        let clamped = engine.generate_percentile_curves(GrowthMetric::Height, Sex::Female, 120.0);
        let full = engine.generate_percentile_curves(GrowthMetric::Height, Sex::Female, 60.0);
        assert_eq!(clamped, full);
    }

    #[test]
    fn curve_end_is_limited_by_step() {
        let engine = GrowthPercentileEngine::who();
        let curve = engine.generate_percentile_curves(GrowthMetric::Weight, Sex::Female, 10.0);
        let ages: Vec<f64> = curve.iter().map(|p| p.age_months).collect();
        assert_eq!(ages, vec![0.0, 3.0, 6.0, 9.0]);

        let curve = engine
            .generate_percentile_curves_with_step(GrowthMetric::Weight, Sex::Female, 24.0, 12)
            .unwrap();
        let ages: Vec<f64> = curve.iter().map(|p| p.age_months).collect();
        assert_eq!(ages, vec![0.0, 12.0, 24.0]);
    }

    #[test]
    fn negative_or_nan_max_age_gives_empty_curve() {
        let engine = GrowthPercentileEngine::who();
        assert!(engine.generate_percentile_curves(GrowthMetric::Weight, Sex::Male, -1.0).is_empty());
        assert!(engine.generate_percentile_curves(GrowthMetric::Weight, Sex::Male, f64::NAN).is_empty());
        assert_eq!(engine.generate_percentile_curves(GrowthMetric::Weight, Sex::Male, 0.0).len(), 1);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(matches!(
            GrowthPercentileEngine::who().percentile_curves(GrowthMetric::Weight, Sex::Male, 60.0, 0),
            Err(GrowthError::ZeroCurveStep)
        ));
    }

    #[test]
    fn curve_iterator_is_restartable() {
        let engine = GrowthPercentileEngine::who();
        let curves = engine
            .percentile_curves(GrowthMetric::HeadCircumference, Sex::Male, 36.0, 6)
            .unwrap();
        let first: Vec<_> = curves.clone().collect();
        let second: Vec<_> = curves.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn curve_bands_are_ordered() {
        let engine = GrowthPercentileEngine::who();
        for metric in GrowthMetric::ALL {
            for sex in [Sex::Male, Sex::Female] {
                for point in engine.percentile_curves(metric, sex, 60.0, 1).unwrap() {
                    let bands = point.bands();
                    assert!(bands.windows(2).all(|w| w[0] <= w[1]), "{:?}", point);
                }
            }
        }
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrowthPercentileEngine>();
    }
}
