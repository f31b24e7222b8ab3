//! In-memory record of what the user generated during this run.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};
use log::{error, info};
use thiserror::Error;
use tokio::sync::watch;

use crate::auth::AuthProvider;
use crate::generator::{GenerationError, ModelGenerator};
use crate::preview::{self, ImageService};
use crate::scene::{GenerationOptions, SceneObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Generating,
    Completed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct GeneratedModel {
    pub id: ModelId,
    pub prompt: String,
    /// Empty when no preview could be produced.
    pub image_url: String,
    pub model: Option<Arc<SceneObject>>,
    pub created_at: DateTime<Local>,
    pub status: GenerationStatus,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("sign in to generate models")]
    Unauthenticated,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Default)]
struct SessionState {
    /// Newest first.
    models: Vec<GeneratedModel>,
    options: GenerationOptions,
    progress: u8,
    in_flight: usize,
}

struct Inner {
    state: Mutex<SessionState>,
    generator: ModelGenerator,
    auth: Arc<dyn AuthProvider>,
    images: Arc<dyn ImageService>,
    current: watch::Sender<Option<Arc<SceneObject>>>,
    next_id: AtomicU64,
}

/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    pub fn new(
        generator: ModelGenerator,
        auth: Arc<dyn AuthProvider>,
        images: Arc<dyn ImageService>,
    ) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SessionState::default()),
                generator,
                auth,
                images,
                current,
                next_id: AtomicU64::new(1),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, id: ModelId, f: impl FnOnce(&mut GeneratedModel)) {
        let mut state = self.state();
        if let Some(record) = state.models.iter_mut().find(|m| m.id == id) {
            f(record);
        }
    }

    fn set_progress(&self, progress: u8) {
        self.state().progress = progress;
    }

    /// Generate a model for `prompt` and make it the current one.
    ///
    /// Records are created before any await, so callers see the Generating
    /// entry immediately. Concurrent calls each update their own record.
    pub async fn generate(&self, prompt: &str) -> Result<ModelId, SessionError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SessionError::EmptyPrompt);
        }
        if !self.inner.auth.current().is_signed_in() {
            return Err(SessionError::Unauthenticated);
        }

        let id = ModelId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let options = {
            let mut state = self.state();
            state.models.insert(
                0,
                GeneratedModel {
                    id,
                    prompt: prompt.to_string(),
                    image_url: String::new(),
                    model: None,
                    created_at: Local::now(),
                    status: GenerationStatus::Generating,
                },
            );
            state.in_flight += 1;
            state.progress = 20;
            state.options
        };
        info!("{} started: {:?}", id, prompt);

        let result = self.run(id, prompt, &options).await;

        let mut state = self.state();
        state.in_flight = state.in_flight.saturating_sub(1);
        state.progress = 0;
        drop(state);

        match result {
            Ok(()) => {
                info!("{} completed", id);
                Ok(id)
            }
            Err(e) => {
                error!("{} failed: {}", id, e);
                self.update(id, |record| record.status = GenerationStatus::Failed);
                Err(e.into())
            }
        }
    }

    async fn run(
        &self,
        id: ModelId,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<(), GenerationError> {
        self.set_progress(50);
        let object = Arc::new(self.inner.generator.generate(prompt, options).await?);

        self.set_progress(70);
        self.inner.current.send_replace(Some(object.clone()));

        self.set_progress(80);
        let image_url = preview::fetch_preview_url(self.inner.images.as_ref(), prompt).await;

        self.set_progress(90);
        self.update(id, |record| {
            record.model = Some(object);
            record.image_url = image_url;
            record.status = GenerationStatus::Completed;
        });
        self.set_progress(100);
        Ok(())
    }

    /// Re-display an earlier model. False when the record has no model.
    pub fn select(&self, id: ModelId) -> bool {
        let model = self
            .state()
            .models
            .iter()
            .find(|m| m.id == id)
            .and_then(|m| m.model.clone());
        match model {
            Some(model) => {
                self.inner.current.send_replace(Some(model));
                true
            }
            None => false,
        }
    }

    pub fn models(&self) -> Vec<GeneratedModel> {
        self.state().models.clone()
    }

    pub fn get(&self, id: ModelId) -> Option<GeneratedModel> {
        self.state().models.iter().find(|m| m.id == id).cloned()
    }

    pub fn progress(&self) -> u8 {
        self.state().progress
    }

    pub fn is_generating(&self) -> bool {
        self.state().in_flight > 0
    }

    pub fn options(&self) -> GenerationOptions {
        self.state().options
    }

    /// Applies to generations started afterwards.
    pub fn set_options(&self, options: GenerationOptions) {
        self.state().options = options;
    }

    pub fn subscribe_current(&self) -> watch::Receiver<Option<Arc<SceneObject>>> {
        self.inner.current.subscribe()
    }

    pub fn current(&self) -> Option<Arc<SceneObject>> {
        self.inner.current.borrow().clone()
    }

    pub fn auth(&self) -> &Arc<dyn AuthProvider> {
        &self.inner.auth
    }
}
