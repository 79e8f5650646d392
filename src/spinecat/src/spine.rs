//! Spine animation bundle discovery.
//!
//! A bundle folder must hold exactly one usable `.skel` and one
//! `.atlas` file plus any number of `.png` textures. A folder missing
//! either definition file is treated as incomplete and skipped.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assets::{collect_matching, find_first, has_extension, relative_path};

/// A Spine-style animation asset set.
///
/// All paths are relative to the public root, forward slashes, so the
/// catalogue can be served as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpineBundle {
    pub skeleton: String,
    pub atlas: String,
    pub images: Vec<String>,
}

/// Discover the bundle in `base_dir/folder_name`, if complete.
///
/// - Folder absent: `None`, silently (most characters have no bundle
///   for most categories).
/// - Folder present but missing the skeleton or atlas: `None`, with a
///   warning naming the folder.
/// - Image order follows directory enumeration order.
pub fn load_bundle(base_dir: &Path, folder_name: &str, root: &Path) -> Option<SpineBundle> {
    let folder = base_dir.join(folder_name);
    if !folder.is_dir() {
        return None;
    }

    let skeleton = find_first(&folder, |n| has_extension(n, "skel"));
    let atlas = find_first(&folder, |n| has_extension(n, "atlas"));

    let (Some(skeleton), Some(atlas)) = (skeleton, atlas) else {
        log::warn!("Animation folder '{folder_name}' is incomplete (missing .skel or .atlas)");
        return None;
    };

    let images = collect_matching(&folder, |n| has_extension(n, "png"))
        .iter()
        .filter_map(|p| relative_path(p, root))
        .collect();

    Some(SpineBundle {
        skeleton: relative_path(&skeleton, root)?,
        atlas: relative_path(&atlas, root)?,
        images,
    })
}
