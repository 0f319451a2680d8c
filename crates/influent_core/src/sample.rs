//! Influent sample and batch records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBatchSizeError;
use crate::profile::InfluentProfile;

/// One synthetic influent measurement.
///
/// Field names on the wire follow the conventional engineering notation
/// (`temp_C`, `pH`, `TSS_in_mgL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InfluentSample {
    /// Flow rate, m3/h (whole number)
    pub flow_m3_h: f64,
    /// Temperature, degrees Celsius
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// pH
    #[serde(rename = "pH")]
    pub ph: f64,
    /// Total suspended solids, mg/L
    #[serde(rename = "TSS_in_mgL")]
    pub tss_in_mgl: f64,
    /// Biochemical oxygen demand, mg/L
    #[serde(rename = "BOD_in_mgL")]
    pub bod_in_mgl: f64,
    /// Chemical oxygen demand, mg/L
    #[serde(rename = "COD_in_mgL")]
    pub cod_in_mgl: f64,
    /// Oil and grease, mg/L
    #[serde(rename = "oil_grease_in_mgL")]
    pub oil_grease_in_mgl: f64,
    /// Turbidity, NTU
    #[serde(rename = "turbidity_in_NTU")]
    pub turbidity_in_ntu: f64,
}

impl InfluentSample {
    /// Field values in the same order as [`InfluentProfile::fields`].
    pub fn values(&self) -> [f64; 8] {
        [
            self.flow_m3_h,
            self.temp_c,
            self.ph,
            self.tss_in_mgl,
            self.bod_in_mgl,
            self.cod_in_mgl,
            self.oil_grease_in_mgl,
            self.turbidity_in_ntu,
        ]
    }

    /// Whether every field lies within its profile range, up to the rounding
    /// tolerance of that field.
    pub fn within_profile(&self, profile: &InfluentProfile) -> bool {
        profile
            .fields()
            .iter()
            .zip(self.values())
            .all(|(range, value)| range.contains_rounded(value))
    }
}

/// Number of samples in a batch, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Smallest batch
    pub const MIN: usize = 1;
    /// Largest batch
    pub const MAX: usize = 100;
    /// Batch size when none is requested
    pub const DEFAULT: usize = 5;

    /// Clamps a requested size into `[MIN, MAX]`.
    ///
    /// Out-of-range requests are not an error: `0` and negatives become
    /// `MIN`, anything above `MAX` becomes `MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use influent_core::sample::BatchSize;
    ///
    /// assert_eq!(BatchSize::clamped(10).get(), 10);
    /// assert_eq!(BatchSize::clamped(0).get(), 1);
    /// assert_eq!(BatchSize::clamped(1000).get(), 100);
    /// ```
    pub fn clamped(requested: i64) -> Self {
        let n = requested.clamp(Self::MIN as i64, Self::MAX as i64);
        Self(n as usize)
    }

    /// The number of samples.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for BatchSize {
    type Err = ParseBatchSizeError;

    /// Parses a decimal integer of any magnitude and clamps it.
    ///
    /// Integers that overflow `i64` saturate to the nearest bound, so
    /// `"99999999999999999999"` yields `MAX` just like `"1000"` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use influent_core::sample::BatchSize;
    ///
    /// assert_eq!("10".parse::<BatchSize>().unwrap().get(), 10);
    /// assert_eq!("99999999999999999999".parse::<BatchSize>().unwrap().get(), 100);
    /// assert_eq!("-99999999999999999999".parse::<BatchSize>().unwrap().get(), 1);
    /// assert!("2.5".parse::<BatchSize>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBatchSizeError(s.to_string()));
        }

        // Syntax is checked, so a failed parse can only be overflow
        Ok(match s.parse::<i64>() {
            Ok(n) => Self::clamped(n),
            Err(_) if negative => Self(Self::MIN),
            Err(_) => Self(Self::MAX),
        })
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for BatchSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered list of independent samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InfluentBatch {
    /// Number of samples, always equal to `influents.len()`
    pub count: usize,
    /// The samples, in generation order
    pub influents: Vec<InfluentSample>,
}

impl InfluentBatch {
    /// Wraps samples into a batch, deriving `count` from their number.
    pub fn new(influents: Vec<InfluentSample>) -> Self {
        Self {
            count: influents.len(),
            influents,
        }
    }
}

impl From<Vec<InfluentSample>> for InfluentBatch {
    fn from(influents: Vec<InfluentSample>) -> Self {
        Self::new(influents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midpoint_sample() -> InfluentSample {
        InfluentSample {
            flow_m3_h: 260.0,
            temp_c: 22.5,
            ph: 7.2,
            tss_in_mgl: 440.0,
            bod_in_mgl: 300.0,
            cod_in_mgl: 600.0,
            oil_grease_in_mgl: 25.5,
            turbidity_in_ntu: 260.0,
        }
    }

    #[test]
    fn test_sample_wire_names() {
        let json = serde_json::to_value(midpoint_sample()).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "BOD_in_mgL",
                "COD_in_mgL",
                "TSS_in_mgL",
                "flow_m3_h",
                "oil_grease_in_mgL",
                "pH",
                "temp_C",
                "turbidity_in_NTU",
            ]
        );
        assert_eq!(json["pH"], 7.2);
    }

    #[test]
    fn test_values_follow_profile_order() {
        let s = midpoint_sample();
        let names: Vec<&str> = InfluentProfile::STANDARD
            .fields()
            .iter()
            .map(|f| f.name)
            .collect();
        let json = serde_json::to_value(s).unwrap();

        for (name, value) in names.iter().zip(s.values()) {
            assert_eq!(json[*name].as_f64().unwrap(), value);
        }
    }

    #[test]
    fn test_within_profile() {
        let profile = InfluentProfile::STANDARD;
        assert!(midpoint_sample().within_profile(&profile));

        let mut acidic = midpoint_sample();
        acidic.ph = 4.0;
        assert!(!acidic.within_profile(&profile));
    }

    #[test]
    fn test_batch_size_clamping() {
        assert_eq!(BatchSize::clamped(1).get(), 1);
        assert_eq!(BatchSize::clamped(100).get(), 100);
        assert_eq!(BatchSize::clamped(0).get(), BatchSize::MIN);
        assert_eq!(BatchSize::clamped(-7).get(), BatchSize::MIN);
        assert_eq!(BatchSize::clamped(101).get(), BatchSize::MAX);
        assert_eq!(BatchSize::clamped(i64::MAX).get(), BatchSize::MAX);
        assert_eq!(BatchSize::clamped(i64::MIN).get(), BatchSize::MIN);
    }

    #[test]
    fn test_batch_size_parse() {
        let parse = |s: &str| s.parse::<BatchSize>().map(BatchSize::get);

        assert_eq!(parse("10"), Ok(10));
        assert_eq!(parse("+7"), Ok(7));
        assert_eq!(parse("0"), Ok(1));
        assert_eq!(parse("-3"), Ok(1));
        assert_eq!(parse("1000"), Ok(100));
        assert_eq!(parse("007"), Ok(7));
    }

    #[test]
    fn test_batch_size_parse_saturates_beyond_i64() {
        let parse = |s: &str| s.parse::<BatchSize>().map(BatchSize::get);

        assert_eq!(parse("9223372036854775808"), Ok(100));
        assert_eq!(parse("99999999999999999999"), Ok(100));
        assert_eq!(parse("-9223372036854775809"), Ok(1));
        assert_eq!(parse("-99999999999999999999"), Ok(1));
    }

    #[test]
    fn test_batch_size_parse_rejects_non_integers() {
        for s in ["", "-", "+", "ten", "2.5", "1e3", " 5", "5 ", "--5"] {
            assert_eq!(
                s.parse::<BatchSize>(),
                Err(ParseBatchSizeError(s.to_string())),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_batch_size_default() {
        assert_eq!(BatchSize::default().get(), 5);
        assert_eq!(BatchSize::default().to_string(), "5");
    }

    #[test]
    fn test_batch_count_matches_len() {
        let batch = InfluentBatch::new(vec![midpoint_sample(); 3]);
        assert_eq!(batch.count, 3);
        assert_eq!(batch.influents.len(), 3);

        let empty: InfluentBatch = Vec::new().into();
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn test_batch_json_shape() {
        let batch = InfluentBatch::new(vec![midpoint_sample(); 2]);
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["influents"].as_array().unwrap().len(), 2);
        assert_eq!(json["influents"][0]["flow_m3_h"], 260.0);
    }
}
