pub(super) mod compose;
pub(super) mod feed;
pub(super) mod images;
pub(super) mod layout;
pub(super) mod profile;
