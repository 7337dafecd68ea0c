//! Path reference resolution for shader and option-setting files.

use std::path::{Path, PathBuf};

/// Default extension of the system option setting file that sits next to a
/// shader source file.
pub const SYSTEM_OPTIONS_EXTENSION: &str = "systemoptions";

/// Resolve a file reference stored in a variant list.
///
/// Absolute references are returned as-is. Relative references are taken
/// relative to the folder of the referencing document, when there is one.
pub fn resolve_path_reference(document_path: Option<&Path>, reference: &str) -> PathBuf {
    let reference = Path::new(reference);
    if reference.is_absolute() {
        return reference.to_path_buf();
    }
    match document_path.and_then(Path::parent) {
        Some(folder) => folder.join(reference),
        None => reference.to_path_buf(),
    }
}

/// Sibling settings file for a resolved shader path, e.g.
/// `shaders/lit.shader` -> `shaders/lit.systemoptions`.
pub fn settings_path_for(shader_path: &Path, extension: &str) -> PathBuf {
    shader_path.with_extension(extension)
}
