//! Lexical path resolution

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` without touching the filesystem.
///
/// Absolute inputs are kept; relative ones are joined onto `base`. `.` and
/// `..` components are folded lexically, so the target need not exist.
pub fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Fold `.` and `..` components of a path.
///
/// A `..` that would climb above the root is dropped; a leading `..` on a
/// relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
