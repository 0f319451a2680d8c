//! Random source selection for request handlers
//!
//! Handlers never touch a process-wide generator directly. They borrow one
//! from a [`SampleSource`], which is either the calling thread's own
//! generator or a single seeded stream shared behind a mutex.

use std::sync::{Arc, Mutex};

use influent_core::rng::InfluentRng;
use rand::RngCore;

use crate::error::{ApiError, ApiResult};

/// Where request handlers draw randomness from
#[derive(Debug, Clone, Default)]
pub enum SampleSource {
    /// Thread-local generator per request; no coordination between requests
    #[default]
    Entropy,
    /// One reproducible stream shared by all requests
    Seeded(Arc<Mutex<InfluentRng>>),
}

impl SampleSource {
    /// Seeded stream if `seed` is set, otherwise per-request entropy
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Arc::new(Mutex::new(InfluentRng::from_seed(seed)))),
            None => Self::Entropy,
        }
    }

    /// The seed of a seeded stream
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Entropy => None,
            Self::Seeded(rng) => rng.lock().ok().map(|rng| rng.seed()),
        }
    }

    /// Run `f` with a generator borrowed from this source.
    ///
    /// The seeded stream is locked for the duration of `f`, so a batch is
    /// always a contiguous slice of the stream.
    pub fn with_rng<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut dyn RngCore) -> T,
    {
        match self {
            Self::Entropy => Ok(f(&mut rand::thread_rng())),
            Self::Seeded(rng) => {
                let mut guard = rng
                    .lock()
                    .map_err(|_| ApiError::Internal("random source is poisoned".to_string()))?;
                Ok(f(&mut *guard))
            }
        }
    }
}
