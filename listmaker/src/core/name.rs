//! List name derivation from file names.

use std::path::Path;

/// Strip the extension: everything from the last `.` onward.
///
/// Names without a dot, or whose only dot is the first character, are
/// returned unchanged.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// Active list name for a list file path: its base name without extension.
pub fn list_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    strip_extension(&file_name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_last_extension_only() {
        assert_eq!(strip_extension("todo.txt"), "todo");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("trailing."), "trailing");
    }

    #[test]
    fn leaves_dotfiles_and_bare_names_alone() {
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("README"), "README");
    }

    #[test]
    fn derives_name_from_path_base_name() {
        assert_eq!(
            list_name_from_path(Path::new("/home/user/lists/groceries.txt")),
            "groceries"
        );
        assert_eq!(list_name_from_path(Path::new("notes")), "notes");
    }
}
