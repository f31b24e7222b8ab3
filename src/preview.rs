//! Preview images from an external image-generation service.

use futures::future::BoxFuture;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("image service unavailable: {0}")]
    Unavailable(String),
    #[error("image service rejected request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub count: u32,
}

impl ImageRequest {
    /// Request for a single high-quality isometric render of `prompt`.
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            prompt: format!(
                "3D render of {}, high quality, professional lighting, white background, isometric view",
                prompt
            ),
            size: "1024x1024".to_string(),
            quality: "high".to_string(),
            count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

pub trait ImageService: Send + Sync {
    fn generate_image(
        &self,
        request: ImageRequest,
    ) -> BoxFuture<'_, Result<Vec<GeneratedImage>, PreviewError>>;
}

/// Best-effort preview URL: any failure or an empty result gives "".
pub async fn fetch_preview_url(service: &dyn ImageService, prompt: &str) -> String {
    match service.generate_image(ImageRequest::for_prompt(prompt)).await {
        Ok(images) => match images.into_iter().next() {
            Some(image) => image.url,
            None => {
                warn!("image service returned no images for {:?}", prompt);
                String::new()
            }
        },
        Err(e) => {
            warn!("preview image failed for {:?}: {}", prompt, e);
            String::new()
        }
    }
}

/// Service used when no image backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreview;

impl ImageService for NoPreview {
    fn generate_image(
        &self,
        _request: ImageRequest,
    ) -> BoxFuture<'_, Result<Vec<GeneratedImage>, PreviewError>> {
        Box::pin(async { Err(PreviewError::Unavailable("no image service configured".into())) })
    }
}
