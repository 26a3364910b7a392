use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui;
use log::error;

use myworld_agent::ValidationGenerator;

use crate::media;

use super::messages::AppMessage;
use super::state::{ImageTarget, PendingValidation};

/// Runs the generator for one post and reports back by id. Always sends
/// exactly one message.
pub fn request_validation(
    runtime: &tokio::runtime::Handle,
    generator: ValidationGenerator,
    tx: Sender<AppMessage>,
    ctx: Option<egui::Context>,
    pending: PendingValidation,
) {
    runtime.spawn(async move {
        let comments = generator.generate(&pending.content).await;
        let message = AppMessage::ValidationResolved {
            post_id: pending.post_id,
            comments,
        };
        if tx.send(message).is_err() {
            error!("failed to send ValidationResolved message");
        }
        if let Some(ctx) = ctx {
            ctx.request_repaint();
        }
    });
}

pub fn pick_image(tx: Sender<AppMessage>, ctx: Option<egui::Context>, target: ImageTarget) {
    thread::spawn(move || {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file();
        let result = picked
            .map(|path| media::file_to_data_url(&path))
            .transpose();
        if tx.send(AppMessage::ImageSelected { target, result }).is_err() {
            error!("failed to send ImageSelected message");
        }
        if let Some(ctx) = ctx {
            ctx.request_repaint();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use myworld_agent::{fallback_comments, CommentSource, ValidationComment};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::app::state::AppState;

    /// Echoes the post text back as a single comment after a delay that
    /// shrinks with the text length, so longer posts resolve first.
    struct Echo;

    #[async_trait]
    impl CommentSource for Echo {
        async fn fetch_comments(&self, post_content: &str) -> anyhow::Result<Vec<ValidationComment>> {
            let delay = 200u64.saturating_sub(post_content.len() as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![ValidationComment::new("Echo", post_content)])
        }
    }

    struct Down;

    #[async_trait]
    impl CommentSource for Down {
        async fn fetch_comments(&self, _post_content: &str) -> anyhow::Result<Vec<ValidationComment>> {
            anyhow::bail!("connection refused")
        }
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime")
    }

    fn resolve_next(rx: &mpsc::Receiver<AppMessage>, state: &mut AppState, rng: &mut StdRng) -> String {
        match rx.recv_timeout(Duration::from_secs(5)).expect("message") {
            AppMessage::ValidationResolved { post_id, comments } => {
                assert!(state.apply_validation(&post_id, &comments, rng));
                post_id
            }
            AppMessage::ImageSelected { .. } => panic!("unexpected image message"),
        }
    }

    #[test]
    fn concurrent_completions_resolve_out_of_order_by_id() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let generator = ValidationGenerator::new(Arc::new(Echo));
        let mut state = AppState::default();
        let mut rng = StdRng::seed_from_u64(1);

        let short = state.compose_post("hi").expect("accepted");
        request_validation(rt.handle(), generator.clone(), tx.clone(), None, short.clone());
        let long = state.compose_post("a much longer reflection").expect("accepted");
        request_validation(rt.handle(), generator, tx, None, long.clone());

        // Feed is interactive while both are in flight.
        assert!(state.posts.iter().all(|p| p.comments.is_empty()));

        let first_done = resolve_next(&rx, &mut state, &mut rng);
        let second_done = resolve_next(&rx, &mut state, &mut rng);
        assert_eq!(first_done, long.post_id);
        assert_eq!(second_done, short.post_id);

        for pending in [&short, &long] {
            let post = state.post(&pending.post_id).expect("post");
            assert_eq!(post.comments.len(), 1);
            assert_eq!(post.comments[0].content, pending.content);
        }
    }

    #[test]
    fn failing_generator_still_resolves_with_fallback() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::default();
        let mut rng = StdRng::seed_from_u64(2);

        let pending = state.compose_post("rainy day").expect("accepted");
        request_validation(
            rt.handle(),
            ValidationGenerator::new(Arc::new(Down)),
            tx,
            None,
            pending.clone(),
        );
        resolve_next(&rx, &mut state, &mut rng);

        let post = state.post(&pending.post_id).expect("post");
        let authors: Vec<_> = post.comments.iter().map(|c| c.author_name.clone()).collect();
        let expected: Vec<_> = fallback_comments().into_iter().map(|c| c.author_name).collect();
        assert_eq!(authors, expected);
        assert!((10..=59).contains(&post.likes));
    }
}
