pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod generator;
pub mod geometry;
pub mod material;
pub mod math;
pub mod preview;
pub mod prompt;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod types;
pub mod ui;
pub mod viewport;

pub use generator::{GenerationError, LatencyRange, ModelGenerator};
pub use prompt::{parse, ParsedPrompt, PrimitiveKind};
pub use scene::{build, GenerationOptions, SceneObject};
