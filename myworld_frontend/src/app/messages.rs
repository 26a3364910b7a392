use log::{error, info, warn};

use myworld_agent::ValidationComment;

use super::state::ImageTarget;
use super::MyWorldApp;

pub enum AppMessage {
    ValidationResolved {
        post_id: String,
        comments: Vec<ValidationComment>,
    },
    /// `Ok(None)` when the file dialog was dismissed.
    ImageSelected {
        target: ImageTarget,
        result: Result<Option<String>, anyhow::Error>,
    },
}

pub fn process_messages(app: &mut MyWorldApp) {
    while let Ok(message) = app.rx.try_recv() {
        match message {
            AppMessage::ValidationResolved { post_id, comments } => {
                app.pending_validations.remove(&post_id);
                let mut rng = rand::thread_rng();
                if app.state.apply_validation(&post_id, &comments, &mut rng) {
                    info!("post {post_id} received {} comments", comments.len());
                } else {
                    warn!("ignoring validation for unknown or already resolved post {post_id}");
                }
            }
            AppMessage::ImageSelected { target, result } => {
                app.profile_edit.picking = None;
                match result {
                    Ok(Some(data_url)) => app.profile_edit.set_image(target, data_url),
                    Ok(None) => {}
                    Err(err) => {
                        error!("failed to load {target:?} image: {err:#}");
                        app.profile_edit.error = Some(format!("Could not load image: {err}"));
                    }
                }
            }
        }
    }
}
