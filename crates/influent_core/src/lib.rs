//! # influent_core: Synthetic Influent Parameter Sampling
//!
//! ## Foundation Layer Role
//!
//! influent_core is the bottom layer of the influent generator, providing:
//! - The static range table for the eight influent parameters (`profile`)
//! - Fixed-precision rounding (`rounding`)
//! - A seedable random source for reproducible runs (`rng`)
//! - Sample and batch records plus the batch-size policy (`sample`)
//! - The bounded uniform sampler itself (`sampler`)
//! - Error types: `ProfileError`, `ParseBatchSizeError` (`error`)
//!
//! The crate has no I/O and no async code; the HTTP service lives in
//! `influent_server`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use influent_core::rng::InfluentRng;
//! use influent_core::sample::BatchSize;
//! use influent_core::sampler::Sampler;
//!
//! let sampler = Sampler::standard();
//! let mut rng = InfluentRng::from_seed(42);
//!
//! let sample = sampler.sample(&mut rng);
//! assert!(sample.within_profile(sampler.profile()));
//!
//! let batch = sampler.sample_batch(&mut rng, BatchSize::clamped(10));
//! assert_eq!(batch.count, 10);
//! ```
//!
//! ## Feature Flags
//!
//! - `openapi`: derive `utoipa::ToSchema` for the wire records

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod profile;
pub mod rng;
pub mod rounding;
pub mod sample;
pub mod sampler;

pub use error::{ParseBatchSizeError, ProfileError};
pub use profile::{FieldRange, InfluentProfile};
pub use sample::{BatchSize, InfluentBatch, InfluentSample};
pub use sampler::{generate_sample, Sampler};
