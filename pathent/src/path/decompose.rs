//! Pure string decomposition of path names.
//!
//! None of these functions touch the filesystem. They operate on the stored
//! path string of a [`PathEntity`](super::PathEntity) and on its final
//! component.
//!
//! A dot only starts a suffix when it is neither the first nor the last
//! character of the name: a leading dot marks a hidden file, and a trailing
//! dot carries no suffix content.

use super::normalize::SEPARATOR;

/// The final separator-delimited component of `path`.
///
/// Returns an empty string when `path` ends with a separator.
///
/// # Examples
///
/// ```
/// use pathent::path::decompose::name;
///
/// let path = format!("docs{}archive.tar.gz", std::path::MAIN_SEPARATOR);
/// assert_eq!(name(&path), "archive.tar.gz");
/// assert_eq!(name("plain"), "plain");
/// ```
#[must_use]
pub fn name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(i) => &path[i + SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Byte index of the dot that starts the final suffix, if any.
fn suffix_start(name: &str) -> Option<usize> {
    name.rfind('.')
        .filter(|&i| i > 0 && i + 1 < name.len())
}

/// The last suffix of `name`, including its leading dot.
///
/// # Examples
///
/// ```
/// use pathent::path::decompose::suffix;
///
/// assert_eq!(suffix("archive.tar.gz"), ".gz");
/// assert_eq!(suffix(".bashrc"), "");
/// assert_eq!(suffix("trailing."), "");
/// ```
#[must_use]
pub fn suffix(name: &str) -> &str {
    suffix_start(name).map_or("", |i| &name[i..])
}

/// Every suffix of `name`, each including its leading dot.
///
/// Names ending with a dot have no suffixes. Leading dots are stripped before
/// splitting, so a hidden file with a single dot has none either.
///
/// # Examples
///
/// ```
/// use pathent::path::decompose::suffixes;
///
/// assert_eq!(suffixes("archive.tar.gz"), vec![".tar", ".gz"]);
/// assert!(suffixes(".bashrc").is_empty());
/// assert!(suffixes("odd.").is_empty());
/// ```
#[must_use]
pub fn suffixes(name: &str) -> Vec<String> {
    if name.ends_with('.') {
        return Vec::new();
    }
    name.trim_start_matches('.')
        .split('.')
        .skip(1)
        .map(|part| format!(".{part}"))
        .collect()
}

/// `name` without its last suffix.
///
/// # Examples
///
/// ```
/// use pathent::path::decompose::stem;
///
/// assert_eq!(stem("archive.tar.gz"), "archive.tar");
/// assert_eq!(stem(".bashrc"), ".bashrc");
/// assert_eq!(stem("trailing."), "trailing.");
/// ```
#[must_use]
pub fn stem(name: &str) -> &str {
    suffix_start(name).map_or(name, |i| &name[..i])
}
