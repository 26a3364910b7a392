use serde::{Deserialize, Serialize};

pub const JUST_NOW: &str = "Just now";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub avatar: String,
    #[serde(default)]
    pub cover_photo: Option<String>,
    pub followers: u64,
    pub following: u64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "user-1".into(),
            name: "Alex Rivers".into(),
            handle: "alexrivers".into(),
            bio: "Finding peace in the digital noise. My private world of reflections and daily moments."
                .into(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=400&h=400&fit=crop"
                .into(),
            cover_photo: Some(
                "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=1000&q=80".into(),
            ),
            followers: 1_200_450,
            following: 124,
        }
    }
}

/// Partial profile edit; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
}

impl ProfileUpdate {
    /// Every editable field of `draft`, as saved from the profile form.
    pub fn from_draft(draft: &UserProfile) -> Self {
        Self {
            name: Some(draft.name.clone()),
            handle: Some(draft.handle.clone()),
            bio: Some(draft.bio.clone()),
            avatar: Some(draft.avatar.clone()),
            cover_photo: draft.cover_photo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub reposts: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub has_media: bool,
    #[serde(default)]
    pub media_url: Option<String>,
    /// Set once comments and counters have been filled in.
    #[serde(default)]
    pub validated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    #[default]
    Home,
    Profile,
}
