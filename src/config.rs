use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::generator::LatencyRange;
use crate::scene::GenerationOptions;
use crate::viewport::ViewportSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "prompt3d".to_string(),
        }
    }
}

/// Everything the binary needs; every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub generation: GenerationOptions,
    pub latency: LatencyRange,
    pub viewport: ViewportSettings,
    pub user: Option<String>,
    pub prompt: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Config file (if any) with command-line flags applied on top.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(complexity) = cli.complexity {
            self.generation.complexity = complexity;
        }
        if let Some(size) = cli.size {
            self.generation.size = size;
        }
        if let Some(color) = cli.color {
            self.generation.color = color;
        }
        if let Some(user) = &cli.user {
            self.user = Some(user.clone());
        }
        if let Some(prompt) = &cli.prompt {
            self.prompt = Some(prompt.clone());
        }
        if cli.no_delay {
            self.latency = LatencyRange::NONE;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let size = self.generation.size;
        if !size.is_finite() || size <= 0.0 {
            bail!("generation.size must be positive, got {}", size);
        }
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }
}
