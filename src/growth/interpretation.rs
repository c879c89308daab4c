use serde::{
    Deserialize,
    Serialize
};

/// Clinical bucket a percentile falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpretation {
    VeryLow,
    Low,
    Normal,
    High,
    VeryHigh
}

/// Language of the human readable interpretation labels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish
}

impl Interpretation {
    /// Buckets: `< 3`, `< 15`, `<= 85`, `<= 97`, above.
    pub fn from_percentile(percentile: f64) -> Interpretation {
        if percentile < 3.0 {
            Interpretation::VeryLow
        } else if percentile < 15.0 {
            Interpretation::Low
        } else if percentile <= 85.0 {
            Interpretation::Normal
        } else if percentile <= 97.0 {
            Interpretation::High
        } else {
            Interpretation::VeryHigh
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Interpretation::VeryLow => "Very low (<3%)",
                Interpretation::Low => "Low (3-15%)",
                Interpretation::Normal => "Normal (15-85%)",
                Interpretation::High => "High (85-97%)",
                Interpretation::VeryHigh => "Very high (>97%)"
            },
            Language::Turkish => match self {
                Interpretation::VeryLow => "Çok düşük (<%3)",
                Interpretation::Low => "Düşük (3-15%)",
                Interpretation::Normal => "Normal (15-85%)",
                Interpretation::High => "Yüksek (85-97%)",
                Interpretation::VeryHigh => "Çok yüksek (>%97)"
            }
        }
    }
}

/// Bucket and English label for a percentile.
pub fn get_interpretation(percentile: f64) -> (Interpretation, &'static str) {
    let interpretation = Interpretation::from_percentile(percentile);
    (interpretation, interpretation.text(Language::English))
}
