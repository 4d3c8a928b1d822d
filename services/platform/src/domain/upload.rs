//! Rules for paths kept in upload columns, relative to the upload root.

use std::path::{Component, Path};

/// Directory under the upload root holding user avatars.
pub const AVATAR_DIR: &str = "avatars";

/// Non-empty and made of plain components only, so joining it onto the upload
/// root stays inside the root.
pub fn is_contained(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// A contained path naming a file inside [`AVATAR_DIR`].
pub fn is_avatar_path(path: &str) -> bool {
    if !is_contained(path) {
        return false;
    }
    let mut parts = Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir));
    let in_avatar_dir = matches!(
        parts.next(),
        Some(Component::Normal(dir)) if dir.to_str() == Some(AVATAR_DIR)
    );
    in_avatar_dir && parts.next().is_some()
}
