//! The discrete comparison scale offered in every off-diagonal cell.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the 18 fixed points of the pairwise comparison scale.
///
/// The scale spans the reciprocal judgments `1/9 ... 1/2`, the
/// no-preference value `1`, and the direct judgments `2 ... 9`. Each
/// value has a canonical display label and a numeric magnitude, and
/// every value except `0` and `1` has exactly one reciprocal partner
/// such that the pair represents mirrored judgments.
///
/// # The `0` value
///
/// The scale also carries a `0` value that is its own reciprocal and
/// has magnitude 0. This sits outside the canonical 1-9 comparison
/// scale and breaks the usual reciprocal-pair symmetry (there is no
/// magnitude whose product with 0 is 1). The upstream service accepts
/// and aggregates it, so the behavior is kept exactly as observed
/// rather than corrected here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ScaleValue {
    OneNinth,
    OneEighth,
    OneSeventh,
    OneSixth,
    OneFifth,
    OneQuarter,
    OneThird,
    OneHalf,
    Zero,
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

/// Reciprocal partners, one row per mirrored pair. `Zero` and `One`
/// are their own reciprocals and are absent by construction.
const RECIPROCAL_PAIRS: [(ScaleValue, ScaleValue); 8] = [
    (ScaleValue::OneNinth, ScaleValue::Nine),
    (ScaleValue::OneEighth, ScaleValue::Eight),
    (ScaleValue::OneSeventh, ScaleValue::Seven),
    (ScaleValue::OneSixth, ScaleValue::Six),
    (ScaleValue::OneFifth, ScaleValue::Five),
    (ScaleValue::OneQuarter, ScaleValue::Four),
    (ScaleValue::OneThird, ScaleValue::Three),
    (ScaleValue::OneHalf, ScaleValue::Two),
];

static LABEL_INDEX: Lazy<HashMap<&'static str, ScaleValue>> = Lazy::new(|| {
    ScaleValue::ALL
        .iter()
        .map(|value| (value.label(), *value))
        .collect()
});

impl ScaleValue {
    /// Every scale value, in ascending magnitude order.
    pub const ALL: [ScaleValue; 18] = [
        ScaleValue::OneNinth,
        ScaleValue::OneEighth,
        ScaleValue::OneSeventh,
        ScaleValue::OneSixth,
        ScaleValue::OneFifth,
        ScaleValue::OneQuarter,
        ScaleValue::OneThird,
        ScaleValue::OneHalf,
        ScaleValue::Zero,
        ScaleValue::One,
        ScaleValue::Two,
        ScaleValue::Three,
        ScaleValue::Four,
        ScaleValue::Five,
        ScaleValue::Six,
        ScaleValue::Seven,
        ScaleValue::Eight,
        ScaleValue::Nine,
    ];

    /// Returns the canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScaleValue::OneNinth => "1/9",
            ScaleValue::OneEighth => "1/8",
            ScaleValue::OneSeventh => "1/7",
            ScaleValue::OneSixth => "1/6",
            ScaleValue::OneFifth => "1/5",
            ScaleValue::OneQuarter => "1/4",
            ScaleValue::OneThird => "1/3",
            ScaleValue::OneHalf => "1/2",
            ScaleValue::Zero => "0",
            ScaleValue::One => "1",
            ScaleValue::Two => "2",
            ScaleValue::Three => "3",
            ScaleValue::Four => "4",
            ScaleValue::Five => "5",
            ScaleValue::Six => "6",
            ScaleValue::Seven => "7",
            ScaleValue::Eight => "8",
            ScaleValue::Nine => "9",
        }
    }

    /// Returns the numeric magnitude submitted to the scoring service.
    pub fn magnitude(&self) -> f64 {
        match self {
            ScaleValue::OneNinth => 1.0 / 9.0,
            ScaleValue::OneEighth => 1.0 / 8.0,
            ScaleValue::OneSeventh => 1.0 / 7.0,
            ScaleValue::OneSixth => 1.0 / 6.0,
            ScaleValue::OneFifth => 1.0 / 5.0,
            ScaleValue::OneQuarter => 1.0 / 4.0,
            ScaleValue::OneThird => 1.0 / 3.0,
            ScaleValue::OneHalf => 1.0 / 2.0,
            ScaleValue::Zero => 0.0,
            ScaleValue::One => 1.0,
            ScaleValue::Two => 2.0,
            ScaleValue::Three => 3.0,
            ScaleValue::Four => 4.0,
            ScaleValue::Five => 5.0,
            ScaleValue::Six => 6.0,
            ScaleValue::Seven => 7.0,
            ScaleValue::Eight => 8.0,
            ScaleValue::Nine => 9.0,
        }
    }

    /// Returns the reciprocal scale value.
    ///
    /// Total over the scale: paired values map to their partner,
    /// `Zero` and `One` map to themselves.
    pub fn reciprocal(&self) -> ScaleValue {
        for (low, high) in RECIPROCAL_PAIRS {
            if *self == low {
                return high;
            }
            if *self == high {
                return low;
            }
        }
        *self
    }

    /// Returns true if this value is its own reciprocal.
    pub fn is_self_reciprocal(&self) -> bool {
        self.reciprocal() == *self
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ScaleValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LABEL_INDEX.get(s).copied().ok_or_else(|| {
            ValidationError::invalid_format("scale_label", format!("unknown label '{}'", s))
        })
    }
}

impl From<ScaleValue> for String {
    fn from(value: ScaleValue) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for ScaleValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
