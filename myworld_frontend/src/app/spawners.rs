use log::debug;

use super::state::ImageTarget;
use super::tasks;
use super::MyWorldApp;

impl MyWorldApp {
    /// Optimistic insert, then hand the post to the generator.
    pub(super) fn spawn_compose_post(&mut self) {
        let Some(pending) = self.state.compose_post(&self.compose.draft) else {
            return;
        };
        debug!("composed post {}", pending.post_id);
        self.compose.draft.clear();
        self.compose.open = false;
        self.pending_validations.insert(pending.post_id.clone());
        tasks::request_validation(
            self.runtime.handle(),
            self.generator.clone(),
            self.tx.clone(),
            self.ctx.clone(),
            pending,
        );
    }

    pub(super) fn spawn_pick_image(&mut self, target: ImageTarget) {
        if self.profile_edit.picking.is_some() {
            return;
        }
        self.profile_edit.picking = Some(target);
        self.profile_edit.error = None;
        tasks::pick_image(self.tx.clone(), self.ctx.clone(), target);
    }
}
