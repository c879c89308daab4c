//! WHO Child Growth Standards, LMS parameters for ages 0 to 60 months.
//!
//! Monthly knots up to 12 months, then 15, 18, 21, 24 and every 6 months to 60.

use crate::growth::growthmetric::GrowthMetric;
use crate::growth::referencepoint::ReferencePoint;
use crate::growth::sex::ReferenceSex;

const fn p(age_months: f64, l: f64, m: f64, s: f64) -> ReferencePoint {
    ReferencePoint::new(age_months, l, m, s)
}

/// Weight-for-age, boys (kg)
pub const WEIGHT_FOR_AGE_BOYS: [ReferencePoint; 23] = [
    p(0.0,  0.3487,  3.3464,   0.14602),
    p(1.0,  0.2297,  4.4709,   0.13395),
    p(2.0,  0.197,   5.5675,   0.12385),
    p(3.0,  0.1738,  6.3762,   0.11727),
    p(4.0,  0.1553,  7.0023,   0.11316),
    p(5.0,  0.1395,  7.5105,   0.1108),
    p(6.0,  0.1257,  7.934,    0.10958),
    p(7.0,  0.1134,  8.297,    0.10902),
    p(8.0,  0.1021,  8.6151,   0.10882),
    p(9.0,  0.0917,  8.9014,   0.10881),
    p(10.0, 0.082,   9.1649,   0.10891),
    p(11.0, 0.0730,  9.4122,   0.10906),
    p(12.0, 0.0644,  9.6479,   0.10925),
    p(15.0, 0.0430,  10.3002,  0.10949),
    p(18.0, 0.0250,  10.9000,  0.10980),
    p(21.0, 0.0100,  11.4700,  0.11010),
    p(24.0, -0.0050, 12.0200,  0.11040),
    p(30.0, -0.0300, 13.0500,  0.11100),
    p(36.0, -0.0500, 14.0000,  0.11160),
    p(42.0, -0.0650, 14.9500,  0.11230),
    p(48.0, -0.0800, 15.9000,  0.11300),
    p(54.0, -0.0900, 16.8500,  0.11370),
    p(60.0, -0.1000, 17.8000,  0.11440),
];

/// Weight-for-age, girls (kg)
pub const WEIGHT_FOR_AGE_GIRLS: [ReferencePoint; 23] = [
    p(0.0,  0.3809,  3.2322,   0.14171),
    p(1.0,  0.1714,  4.1873,   0.13724),
    p(2.0,  0.0962,  5.1282,   0.12960),
    p(3.0,  0.0402,  5.8458,   0.12619),
    p(4.0,  -0.0050, 6.4237,   0.12402),
    p(5.0,  -0.0430, 6.8985,   0.12274),
    p(6.0,  -0.0760, 7.297,    0.12204),
    p(7.0,  -0.1050, 7.6422,   0.12178),
    p(8.0,  -0.1310, 7.9487,   0.12181),
    p(9.0,  -0.1550, 8.2254,   0.12199),
    p(10.0, -0.1770, 8.4800,   0.12223),
    p(11.0, -0.1970, 8.7192,   0.12247),
    p(12.0, -0.2160, 8.9481,   0.12268),
    p(15.0, -0.2600, 9.5200,   0.12310),
    p(18.0, -0.3000, 10.0700,  0.12350),
    p(21.0, -0.3350, 10.6000,  0.12400),
    p(24.0, -0.3650, 11.1200,  0.12450),
    p(30.0, -0.4100, 12.1000,  0.12550),
    p(36.0, -0.4450, 13.0500,  0.12660),
    p(42.0, -0.4700, 14.0000,  0.12780),
    p(48.0, -0.4900, 14.9500,  0.12900),
    p(54.0, -0.5050, 15.9000,  0.13030),
    p(60.0, -0.5150, 16.8500,  0.13160),
];

/// Length/height-for-age, boys (cm)
pub const HEIGHT_FOR_AGE_BOYS: [ReferencePoint; 23] = [
    p(0.0,  1.0,     49.8842,  0.03795),
    p(1.0,  1.0,     54.7244,  0.03557),
    p(2.0,  1.0,     58.4249,  0.03424),
    p(3.0,  1.0,     61.4292,  0.03328),
    p(4.0,  1.0,     63.886,   0.03257),
    p(5.0,  1.0,     65.9026,  0.03204),
    p(6.0,  1.0,     67.6236,  0.03165),
    p(7.0,  1.0,     69.1645,  0.03139),
    p(8.0,  1.0,     70.5994,  0.03124),
    p(9.0,  1.0,     71.9687,  0.03117),
    p(10.0, 1.0,     73.2812,  0.03118),
    p(11.0, 1.0,     74.5388,  0.03125),
    p(12.0, 1.0,     75.7488,  0.03137),
    p(15.0, 1.0,     79.0000,  0.03175),
    p(18.0, 1.0,     82.0000,  0.03220),
    p(21.0, 1.0,     84.7000,  0.03265),
    p(24.0, 1.0,     87.1000,  0.03310),
    p(30.0, 1.0,     91.3000,  0.03390),
    p(36.0, 1.0,     95.1000,  0.03460),
    p(42.0, 1.0,     98.6000,  0.03520),
    p(48.0, 1.0,     102.0000, 0.03570),
    p(54.0, 1.0,     105.1000, 0.03620),
    p(60.0, 1.0,     108.0000, 0.03660),
];

/// Length/height-for-age, girls (cm)
pub const HEIGHT_FOR_AGE_GIRLS: [ReferencePoint; 23] = [
    p(0.0,  1.0,     49.1477,  0.0379),
    p(1.0,  1.0,     53.6872,  0.0364),
    p(2.0,  1.0,     57.0673,  0.0352),
    p(3.0,  1.0,     59.8029,  0.0342),
    p(4.0,  1.0,     62.0899,  0.0335),
    p(5.0,  1.0,     64.0301,  0.0329),
    p(6.0,  1.0,     65.7311,  0.0324),
    p(7.0,  1.0,     67.2873,  0.0321),
    p(8.0,  1.0,     68.7498,  0.0318),
    p(9.0,  1.0,     70.1435,  0.0316),
    p(10.0, 1.0,     71.4818,  0.0315),
    p(11.0, 1.0,     72.771,   0.0314),
    p(12.0, 1.0,     74.015,   0.0314),
    p(15.0, 1.0,     77.2000,  0.0316),
    p(18.0, 1.0,     80.1000,  0.0319),
    p(21.0, 1.0,     82.8000,  0.0323),
    p(24.0, 1.0,     85.2000,  0.0328),
    p(30.0, 1.0,     89.5000,  0.0339),
    p(36.0, 1.0,     93.4000,  0.0351),
    p(42.0, 1.0,     96.9000,  0.0362),
    p(48.0, 1.0,     100.3000, 0.0373),
    p(54.0, 1.0,     103.5000, 0.0384),
    p(60.0, 1.0,     106.5000, 0.0394),
];

/// Head circumference-for-age, boys (cm)
pub const HEAD_CIRCUMFERENCE_FOR_AGE_BOYS: [ReferencePoint; 23] = [
    p(0.0,  1.0,     34.4618,  0.03686),
    p(1.0,  1.0,     37.2759,  0.03133),
    p(2.0,  1.0,     39.1285,  0.02997),
    p(3.0,  1.0,     40.5135,  0.02918),
    p(4.0,  1.0,     41.6317,  0.02868),
    p(5.0,  1.0,     42.5576,  0.02837),
    p(6.0,  1.0,     43.3306,  0.02817),
    p(7.0,  1.0,     43.9803,  0.02804),
    p(8.0,  1.0,     44.53,    0.02796),
    p(9.0,  1.0,     45.0000,  0.02792),
    p(10.0, 1.0,     45.4051,  0.0279),
    p(11.0, 1.0,     45.7573,  0.0279),
    p(12.0, 1.0,     46.0661,  0.02791),
    p(15.0, 1.0,     46.7500,  0.02800),
    p(18.0, 1.0,     47.3000,  0.02810),
    p(21.0, 1.0,     47.7500,  0.02820),
    p(24.0, 1.0,     48.1000,  0.02830),
    p(30.0, 1.0,     48.7000,  0.02850),
    p(36.0, 1.0,     49.2000,  0.02870),
    p(42.0, 1.0,     49.6000,  0.02890),
    p(48.0, 1.0,     49.9500,  0.02910),
    p(54.0, 1.0,     50.2500,  0.02930),
    p(60.0, 1.0,     50.5000,  0.02950),
];

/// Head circumference-for-age, girls (cm)
pub const HEAD_CIRCUMFERENCE_FOR_AGE_GIRLS: [ReferencePoint; 23] = [
    p(0.0,  1.0,     33.8787,  0.03496),
    p(1.0,  1.0,     36.5463,  0.03148),
    p(2.0,  1.0,     38.2521,  0.03008),
    p(3.0,  1.0,     39.5328,  0.02922),
    p(4.0,  1.0,     40.5817,  0.02866),
    p(5.0,  1.0,     41.459,   0.02826),
    p(6.0,  1.0,     42.1995,  0.02798),
    p(7.0,  1.0,     42.829,   0.02778),
    p(8.0,  1.0,     43.3671,  0.02763),
    p(9.0,  1.0,     43.83,    0.02752),
    p(10.0, 1.0,     44.2319,  0.02744),
    p(11.0, 1.0,     44.5844,  0.02738),
    p(12.0, 1.0,     44.8965,  0.02734),
    p(15.0, 1.0,     45.5500,  0.02730),
    p(18.0, 1.0,     46.0500,  0.02730),
    p(21.0, 1.0,     46.4500,  0.02730),
    p(24.0, 1.0,     46.8000,  0.02730),
    p(30.0, 1.0,     47.4000,  0.02740),
    p(36.0, 1.0,     47.9000,  0.02750),
    p(42.0, 1.0,     48.3000,  0.02760),
    p(48.0, 1.0,     48.6500,  0.02770),
    p(54.0, 1.0,     48.9500,  0.02780),
    p(60.0, 1.0,     49.2000,  0.02790),
];

/// Built-in knots for a metric and sex.
pub fn who_reference_points(metric: GrowthMetric, sex: ReferenceSex) -> &'static [ReferencePoint] {
    match (metric, sex) {
        (GrowthMetric::Weight, ReferenceSex::Male) => &WEIGHT_FOR_AGE_BOYS,
        (GrowthMetric::Weight, ReferenceSex::Female) => &WEIGHT_FOR_AGE_GIRLS,
        (GrowthMetric::Height, ReferenceSex::Male) => &HEIGHT_FOR_AGE_BOYS,
        (GrowthMetric::Height, ReferenceSex::Female) => &HEIGHT_FOR_AGE_GIRLS,
        (GrowthMetric::HeadCircumference, ReferenceSex::Male) => &HEAD_CIRCUMFERENCE_FOR_AGE_BOYS,
        (GrowthMetric::HeadCircumference, ReferenceSex::Female) => &HEAD_CIRCUMFERENCE_FOR_AGE_GIRLS
    }
}
