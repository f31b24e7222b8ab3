use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use prompt3d::auth::{LocalAuth, User};
use prompt3d::generator::{LatencyRange, ModelGenerator};
use prompt3d::preview::{GeneratedImage, ImageRequest, ImageService, PreviewError};
use prompt3d::prompt::PrimitiveKind;
use prompt3d::scene::GenerationOptions;
use prompt3d::session::{GenerationStatus, Session, SessionError};

struct FailingImages;

impl ImageService for FailingImages {
    fn generate_image(
        &self,
        _request: ImageRequest,
    ) -> BoxFuture<'_, Result<Vec<GeneratedImage>, PreviewError>> {
        Box::pin(async { Err(PreviewError::Unavailable("offline".into())) })
    }
}

#[derive(Default)]
struct CountingImages {
    calls: AtomicUsize,
}

impl ImageService for CountingImages {
    fn generate_image(
        &self,
        request: ImageRequest,
    ) -> BoxFuture<'_, Result<Vec<GeneratedImage>, PreviewError>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            assert!(request.prompt.starts_with("3D render of "));
            Ok(vec![GeneratedImage {
                url: format!("https://images.test/{}.png", n),
            }])
        })
    }
}

fn session_with(latency: LatencyRange, images: Arc<dyn ImageService>) -> (Session, Arc<LocalAuth>) {
    let auth = Arc::new(LocalAuth::signed_in(User::new("tester")));
    let session = Session::new(ModelGenerator::new(latency), auth.clone(), images);
    (session, auth)
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_preview_still_completes() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        let id = session.generate("red sphere").await.unwrap();

        let record = session.get(id).unwrap();
        assert_eq!(record.status, GenerationStatus::Completed);
        assert_eq!(record.image_url, "");
        let object = record.model.unwrap();
        assert_eq!(object.primary().geometry.kind(), PrimitiveKind::Sphere);
    }

    #[tokio::test]
    async fn test_preview_url_recorded() {
        let images = Arc::new(CountingImages::default());
        let (session, _) = session_with(LatencyRange::NONE, images.clone());
        let id = session.generate("blue torus").await.unwrap();

        assert_eq!(session.get(id).unwrap().image_url, "https://images.test/0.png");
        assert_eq!(images.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generated_model_becomes_current() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        let mut current = session.subscribe_current();
        session.generate("green cone").await.unwrap();

        assert!(current.has_changed().unwrap());
        let object = current.borrow_and_update().clone().unwrap();
        assert_eq!(object.primary().geometry.kind(), PrimitiveKind::Cone);
        assert_eq!(session.progress(), 0);
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        assert_eq!(session.generate("   ").await, Err(SessionError::EmptyPrompt));
        assert!(session.models().is_empty());
    }

    #[tokio::test]
    async fn test_signed_out_user_rejected() {
        let (session, auth) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        auth.sign_out();
        assert_eq!(
            session.generate("red sphere").await,
            Err(SessionError::Unauthenticated)
        );
        assert!(session.models().is_empty());
    }

    #[tokio::test]
    async fn test_failed_build_marks_record_failed() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        session.set_options(GenerationOptions {
            size: -1.0,
            ..Default::default()
        });

        let result = session.generate("cube").await;
        assert!(matches!(result, Err(SessionError::Generation(_))));

        let models = session.models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].status, GenerationStatus::Failed);
        assert!(models[0].model.is_none());
        assert!(!session.is_generating());
        assert_eq!(session.progress(), 0);
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn test_records_newest_first() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        let first = session.generate("box").await.unwrap();
        let second = session.generate("sphere").await.unwrap();

        let ids: Vec<_> = session.models().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![second, first]);
    }
}

#[cfg(test)]
mod timing_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_record_visible_while_generating() {
        let latency = LatencyRange {
            min_ms: 1000,
            max_ms: 1000,
        };
        let (session, _) = session_with(latency, Arc::new(FailingImages));

        let task = {
            let session = session.clone();
            tokio::spawn(async move { session.generate("purple torus").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(session.is_generating());
        assert_eq!(session.progress(), 50);
        let models = session.models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].status, GenerationStatus::Generating);
        assert!(models[0].model.is_none());

        let id = task.await.unwrap().unwrap();
        assert_eq!(session.get(id).unwrap().status, GenerationStatus::Completed);
        assert!(!session.is_generating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_generations_update_own_records() {
        let latency = LatencyRange {
            min_ms: 1000,
            max_ms: 3000,
        };
        let (session, _) = session_with(latency, Arc::new(FailingImages));

        let a = {
            let session = session.clone();
            tokio::spawn(async move { session.generate("red sphere").await })
        };
        let b = {
            let session = session.clone();
            tokio::spawn(async move { session.generate("yellow cone").await })
        };
        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();
        assert_ne!(a, b);

        let sphere = session.get(a).unwrap().model.unwrap();
        let cone = session.get(b).unwrap().model.unwrap();
        assert_eq!(sphere.primary().geometry.kind(), PrimitiveKind::Sphere);
        assert_eq!(cone.primary().geometry.kind(), PrimitiveKind::Cone);
        assert_eq!(session.models().len(), 2);
        assert!(!session.is_generating());
    }
}

#[cfg(test)]
mod select_tests {
    use super::*;

    #[tokio::test]
    async fn test_select_republishes_earlier_model() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        let first = session.generate("white octahedron").await.unwrap();
        session.generate("black plane").await.unwrap();

        let mut current = session.subscribe_current();
        current.borrow_and_update();
        assert!(session.select(first));
        assert!(current.has_changed().unwrap());
        let object = current.borrow_and_update().clone().unwrap();
        assert_eq!(object.primary().geometry.kind(), PrimitiveKind::Octahedron);
    }

    #[tokio::test]
    async fn test_select_unknown_id_is_ignored() {
        let (session, _) = session_with(LatencyRange::NONE, Arc::new(FailingImages));
        let id = session.generate("box").await.unwrap();
        let other = Session::new(
            ModelGenerator::new(LatencyRange::NONE),
            Arc::new(LocalAuth::signed_in(User::new("other"))),
            Arc::new(FailingImages),
        );
        assert!(!other.select(id));
    }
}
