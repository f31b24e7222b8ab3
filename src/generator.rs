use std::time::Duration;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt;
use crate::scene::{self, BuildError, GenerationOptions, SceneObject};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("failed to build model: {0}")]
    Build(#[from] BuildError),
}

/// Artificial generation delay in milliseconds, `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 3000,
        }
    }
}

impl LatencyRange {
    pub const NONE: LatencyRange = LatencyRange { min_ms: 0, max_ms: 0 };

    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..self.max_ms))
    }
}

/// Turns prompt text into a scene object after a paced delay.
#[derive(Debug, Clone, Default)]
pub struct ModelGenerator {
    latency: LatencyRange,
}

impl ModelGenerator {
    pub fn new(latency: LatencyRange) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> LatencyRange {
        self.latency
    }

    pub async fn generate(
        &self,
        text: &str,
        options: &GenerationOptions,
    ) -> Result<SceneObject, GenerationError> {
        let delay = self.latency.sample(&mut rand::rng());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let parsed = prompt::parse(text);
        let object = scene::build(&parsed, options)?;
        info!(
            "generated {} for {:?} after {} ms",
            object.summary(),
            text,
            delay.as_millis()
        );
        Ok(object)
    }
}
