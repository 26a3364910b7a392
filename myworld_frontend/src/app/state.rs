use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use uuid::Uuid;

use myworld_agent::ValidationComment;

use crate::models::{Comment, Post, ProfileUpdate, UserProfile, ViewType, JUST_NOW};

const AVATAR_BASE: &str = "https://i.pravatar.cc/150";

// Everything except A-Z a-z 0-9 - _ . ! ~ * ' ( ) is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The whole in-memory world: one profile, the feed (newest first) and the
/// active view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub user: UserProfile,
    pub posts: Vec<Post>,
    pub view: ViewType,
}

/// Handed to the async step after an optimistic insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    pub post_id: String,
    pub content: String,
}

impl AppState {
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            posts: Vec::new(),
            view: ViewType::Home,
        }
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Optimistically puts a new post at the head of the feed. Blank input is
    /// ignored and yields `None`.
    pub fn compose_post(&mut self, content: &str) -> Option<PendingValidation> {
        if content.trim().is_empty() {
            return None;
        }
        let post = Post {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            timestamp: JUST_NOW.to_string(),
            likes: 0,
            reposts: 0,
            comments: Vec::new(),
            has_media: false,
            media_url: None,
            validated: false,
        };
        let pending = PendingValidation {
            post_id: post.id.clone(),
            content: post.content.clone(),
        };
        self.posts.insert(0, post);
        Some(pending)
    }

    /// Replaces the post with `post_id` in the current feed by a copy carrying
    /// fresh counters and `comments`. Returns `false` if the post is gone or
    /// has already been validated.
    pub fn apply_validation<R: Rng + ?Sized>(
        &mut self,
        post_id: &str,
        comments: &[ValidationComment],
        rng: &mut R,
    ) -> bool {
        let Some(index) = self.posts.iter().position(|p| p.id == post_id) else {
            return false;
        };
        let current = &self.posts[index];
        if current.validated {
            return false;
        }
        let updated = Post {
            likes: rng.gen_range(10..=59),
            reposts: rng.gen_range(0..=4),
            comments: comments
                .iter()
                .enumerate()
                .map(|(idx, vc)| Comment {
                    id: format!("comment-{idx}"),
                    author_name: vc.author_name.clone(),
                    author_avatar: avatar_for(&vc.author_name),
                    content: vc.content.clone(),
                    timestamp: JUST_NOW.to_string(),
                })
                .collect(),
            validated: true,
            ..current.clone()
        };
        self.posts[index] = updated;
        true
    }

    pub fn update_user(&mut self, update: ProfileUpdate) {
        let user = &mut self.user;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(handle) = update.handle {
            user.handle = handle;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(cover) = update.cover_photo {
            user.cover_photo = Some(cover);
        }
    }

    pub fn navigate(&mut self, view: ViewType) {
        self.view = view;
    }
}

/// Avatar reference derived only from the author name.
pub fn avatar_for(author_name: &str) -> String {
    format!("{AVATAR_BASE}?u={}", utf8_percent_encode(author_name, URI_COMPONENT))
}

#[derive(Default)]
pub struct ComposeState {
    pub open: bool,
    pub draft: String,
    focus_requested: bool,
}

impl ComposeState {
    pub fn show(&mut self) {
        if !self.open {
            self.open = true;
            self.focus_requested = true;
        }
    }

    /// True only on the first frame after the composer opened.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

/// Which profile image a file pick is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Avatar,
    Cover,
}

#[derive(Default)]
pub struct ProfileEditState {
    pub draft: Option<UserProfile>,
    pub picking: Option<ImageTarget>,
    pub error: Option<String>,
}

impl ProfileEditState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn begin(&mut self, user: &UserProfile) {
        self.draft = Some(user.clone());
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.draft = None;
        self.error = None;
    }

    /// Ends editing and returns the update to apply, if editing.
    pub fn finish(&mut self) -> Option<ProfileUpdate> {
        self.error = None;
        self.draft.take().map(|draft| ProfileUpdate::from_draft(&draft))
    }

    pub fn set_image(&mut self, target: ImageTarget, data_url: String) {
        if let Some(draft) = self.draft.as_mut() {
            match target {
                ImageTarget::Avatar => draft.avatar = data_url,
                ImageTarget::Cover => draft.cover_photo = Some(data_url),
            }
        }
    }
}
