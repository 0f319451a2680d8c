//! Range table for influent parameters.
//!
//! A profile assigns every sample field a closed interval `[low, high]` and a
//! rounding precision. [`InfluentProfile::STANDARD`] is the built-in table used
//! by the service; other profiles can be assembled in code for tests or
//! offline studies.

use crate::error::ProfileError;

/// Bounds and precision for one influent parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    /// Wire name of the field (as serialised in JSON)
    pub name: &'static str,
    /// Inclusive lower bound
    pub low: f64,
    /// Inclusive upper bound
    pub high: f64,
    /// Decimal places kept after rounding
    pub decimals: u32,
}

impl FieldRange {
    /// Creates a validated field range.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::NonFiniteBound`] if either bound is NaN or infinite
    /// - [`ProfileError::InvertedRange`] if `low > high`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use influent_core::profile::FieldRange;
    ///
    /// let ph = FieldRange::new("pH", 6.0, 8.5, 1).unwrap();
    /// assert_eq!(ph.width(), 2.5);
    ///
    /// assert!(FieldRange::new("pH", 8.5, 6.0, 1).is_err());
    /// ```
    pub fn new(name: &'static str, low: f64, high: f64, decimals: u32) -> Result<Self, ProfileError> {
        let range = Self::fixed(name, low, high, decimals);
        range.validate()?;
        Ok(range)
    }

    /// Unchecked constructor for compile-time tables.
    const fn fixed(name: &'static str, low: f64, high: f64, decimals: u32) -> Self {
        Self {
            name,
            low,
            high,
            decimals,
        }
    }

    /// Checks the bounds are finite and ordered.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ProfileError::NonFiniteBound {
                field: self.name,
                low: self.low,
                high: self.high,
            });
        }
        if self.low > self.high {
            return Err(ProfileError::InvertedRange {
                field: self.name,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Width of the interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies in `[low, high]`, allowing half a unit at the
    /// field's precision on either side.
    pub fn contains_rounded(&self, value: f64) -> bool {
        let tol = crate::rounding::tolerance(self.decimals);
        value >= self.low - tol && value <= self.high + tol
    }
}

/// Complete range table: one [`FieldRange`] per influent parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluentProfile {
    /// Flow rate, m3/h
    pub flow: FieldRange,
    /// Temperature, degrees Celsius
    pub temperature: FieldRange,
    /// pH, unitless
    pub ph: FieldRange,
    /// Total suspended solids, mg/L
    pub tss: FieldRange,
    /// Biochemical oxygen demand, mg/L
    pub bod: FieldRange,
    /// Chemical oxygen demand, mg/L
    pub cod: FieldRange,
    /// Oil and grease, mg/L
    pub oil_grease: FieldRange,
    /// Turbidity, NTU
    pub turbidity: FieldRange,
}

impl InfluentProfile {
    /// Typical municipal raw wastewater.
    pub const STANDARD: InfluentProfile = InfluentProfile {
        flow: FieldRange::fixed("flow_m3_h", 20.0, 500.0, 0),
        temperature: FieldRange::fixed("temp_C", 10.0, 35.0, 1),
        ph: FieldRange::fixed("pH", 6.0, 8.5, 1),
        tss: FieldRange::fixed("TSS_in_mgL", 80.0, 800.0, 1),
        bod: FieldRange::fixed("BOD_in_mgL", 100.0, 500.0, 1),
        cod: FieldRange::fixed("COD_in_mgL", 200.0, 1000.0, 1),
        oil_grease: FieldRange::fixed("oil_grease_in_mgL", 1.0, 50.0, 1),
        turbidity: FieldRange::fixed("turbidity_in_NTU", 20.0, 500.0, 1),
    };

    /// All field ranges in wire order.
    pub fn fields(&self) -> [FieldRange; 8] {
        [
            self.flow,
            self.temperature,
            self.ph,
            self.tss,
            self.bod,
            self.cod,
            self.oil_grease,
            self.turbidity,
        ]
    }

    /// Looks up a field range by its wire name.
    pub fn field(&self, name: &str) -> Result<FieldRange, ProfileError> {
        self.fields()
            .into_iter()
            .find(|range| range.name == name)
            .ok_or_else(|| ProfileError::UnknownField(name.to_string()))
    }

    /// Validates every field range.
    pub fn validate(&self) -> Result<(), ProfileError> {
        self.fields().iter().try_for_each(FieldRange::validate)
    }
}

impl Default for InfluentProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_profile_table() {
        let p = InfluentProfile::STANDARD;
        let table: Vec<(&str, f64, f64, u32)> = p
            .fields()
            .iter()
            .map(|f| (f.name, f.low, f.high, f.decimals))
            .collect();

        assert_eq!(
            table,
            vec![
                ("flow_m3_h", 20.0, 500.0, 0),
                ("temp_C", 10.0, 35.0, 1),
                ("pH", 6.0, 8.5, 1),
                ("TSS_in_mgL", 80.0, 800.0, 1),
                ("BOD_in_mgL", 100.0, 500.0, 1),
                ("COD_in_mgL", 200.0, 1000.0, 1),
                ("oil_grease_in_mgL", 1.0, 50.0, 1),
                ("turbidity_in_NTU", 20.0, 500.0, 1),
            ]
        );
    }

    #[test]
    fn test_standard_profile_is_valid() {
        assert!(InfluentProfile::STANDARD.validate().is_ok());
        assert_eq!(InfluentProfile::default(), InfluentProfile::STANDARD);
    }

    #[test]
    fn test_field_lookup() {
        let p = InfluentProfile::STANDARD;
        assert_eq!(p.field("pH").unwrap().high, 8.5);
        assert_eq!(p.field("COD_in_mgL").unwrap().low, 200.0);
        assert_eq!(
            p.field("salinity"),
            Err(ProfileError::UnknownField("salinity".to_string()))
        );
    }

    #[test]
    fn test_field_range_rejects_bad_bounds() {
        assert!(matches!(
            FieldRange::new("x", 2.0, 1.0, 1),
            Err(ProfileError::InvertedRange { .. })
        ));
        assert!(matches!(
            FieldRange::new("x", f64::NAN, 1.0, 1),
            Err(ProfileError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            FieldRange::new("x", 0.0, f64::INFINITY, 1),
            Err(ProfileError::NonFiniteBound { .. })
        ));
        // Degenerate interval is allowed
        assert!(FieldRange::new("x", 3.0, 3.0, 0).is_ok());
    }

    #[test]
    fn test_profile_validate_reports_first_bad_field() {
        let mut p = InfluentProfile::STANDARD;
        p.bod.low = 900.0;
        match p.validate() {
            Err(ProfileError::InvertedRange { field, .. }) => assert_eq!(field, "BOD_in_mgL"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_contains_rounded_tolerance() {
        let ph = InfluentProfile::STANDARD.ph;
        assert!(ph.contains_rounded(6.0));
        assert!(ph.contains_rounded(8.5));
        assert!(ph.contains_rounded(8.54));
        assert!(!ph.contains_rounded(8.6));
        assert!(!ph.contains_rounded(5.9));

        let flow = InfluentProfile::STANDARD.flow;
        assert!(flow.contains_rounded(500.4));
        assert!(!flow.contains_rounded(501.0));
    }
}
