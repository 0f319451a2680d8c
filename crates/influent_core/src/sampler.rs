//! Bounded uniform sampler.
//!
//! Each field is drawn independently from its closed interval and rounded to
//! the field's precision. The sampler holds only an immutable profile; the
//! random source is always passed in by the caller.

use rand::Rng;

use crate::error::ProfileError;
use crate::profile::{FieldRange, InfluentProfile};
use crate::rng::uniform_inclusive;
use crate::rounding::round_to;
use crate::sample::{BatchSize, InfluentBatch, InfluentSample};

/// Draws influent samples from a fixed range profile.
///
/// # Examples
///
/// ```rust
/// use influent_core::rng::InfluentRng;
/// use influent_core::sampler::Sampler;
///
/// let sampler = Sampler::standard();
/// let mut rng = InfluentRng::from_seed(42);
///
/// let sample = sampler.sample(&mut rng);
/// assert!((6.0..=8.5).contains(&sample.ph));
/// assert_eq!(sample.flow_m3_h.fract(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sampler {
    profile: InfluentProfile,
}

impl Sampler {
    /// Creates a sampler over the given profile.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProfileError`] found in `profile`; a sampler only
    /// ever holds a validated profile, so drawing from it cannot fail.
    pub fn new(profile: InfluentProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// Sampler over [`InfluentProfile::STANDARD`].
    pub fn standard() -> Self {
        Self {
            profile: InfluentProfile::STANDARD,
        }
    }

    /// The profile this sampler draws from.
    pub fn profile(&self) -> &InfluentProfile {
        &self.profile
    }

    /// Draws one sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> InfluentSample {
        let p = &self.profile;
        InfluentSample {
            flow_m3_h: draw(rng, &p.flow),
            temp_c: draw(rng, &p.temperature),
            ph: draw(rng, &p.ph),
            tss_in_mgl: draw(rng, &p.tss),
            bod_in_mgl: draw(rng, &p.bod),
            cod_in_mgl: draw(rng, &p.cod),
            oil_grease_in_mgl: draw(rng, &p.oil_grease),
            turbidity_in_ntu: draw(rng, &p.turbidity),
        }
    }

    /// Draws `size` independent samples.
    pub fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, size: BatchSize) -> InfluentBatch {
        let influents = (0..size.get()).map(|_| self.sample(rng)).collect();
        InfluentBatch::new(influents)
    }
}

#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R, range: &FieldRange) -> f64 {
    round_to(uniform_inclusive(rng, range.low, range.high), range.decimals)
}

/// Draws one sample from the standard profile using the thread-local
/// generator.
pub fn generate_sample() -> InfluentSample {
    Sampler::standard().sample(&mut rand::thread_rng())
}
