//! Path decomposition and search-path splitting.
//!
//! These operate on plain strings rather than `std::path::Path`: the legacy
//! data files mix `/` and `\` separators freely, and the degenerate cases
//! (no separator, no extension) have pinned behavior that callers rely on.

use crate::split::split;

/// Returns everything before the last `/` or `\`, or `""` when the name
/// contains no separator.
pub fn get_path(filename: &str) -> &str {
    match filename.rfind(['/', '\\']) {
        Some(i) => &filename[..i],
        None => "",
    }
}

/// Returns everything after the last `/` or `\`, or the whole string when
/// the name contains no separator.
pub fn get_basename(filename: &str) -> &str {
    match filename.rfind(['/', '\\']) {
        Some(i) => &filename[i + 1..],
        None => filename,
    }
}

/// Removes the last `.` and everything after it.
///
/// Without a `.` the input comes back unchanged, the same degenerate result
/// as [`get_extension`]; there is no explicit "no extension" signal.
pub fn remove_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(i) => &filename[..i],
        None => filename,
    }
}

/// Returns everything after the last `.`, or the whole string when there is
/// no `.`.
pub fn get_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(i) => &filename[i + 1..],
        None => filename,
    }
}

/// Splits a `:`-separated search path into its components.
///
/// Trailing `/` are stripped from each component (they break `stat()` on
/// Windows) and empty components are dropped. Drive-letter recombination
/// follows the build target; see [`split_path_with_drive_letters`].
pub fn split_path(path: &str) -> Vec<String> {
    split_path_with_drive_letters(path, cfg!(windows))
}

/// As [`split_path`], with the drive-letter handling made explicit.
///
/// When `merge_drive_letters` is set, a single-character component is
/// re-merged with the following component plus `:`, so `c:/dir` survives
/// the `:` split (`["c", "/dir"]` becomes `["c:/dir"]`; a trailing lone
/// `"c"` becomes `"c:"`).
pub fn split_path_with_drive_letters(path: &str, merge_drive_letters: bool) -> Vec<String> {
    let mut dirs: Vec<String> = split(path, ':');
    for dir in &mut dirs {
        while dir.ends_with('/') {
            dir.pop();
        }
    }
    dirs.retain(|dir| !dir.is_empty());

    if merge_drive_letters {
        // Walk from the end so a merge never disturbs the components still
        // to be visited.
        let mut i = dirs.len();
        while i > 0 {
            i -= 1;
            if dirs[i].len() > 1 {
                continue;
            }
            if i == dirs.len() - 1 {
                dirs[i].push(':');
            } else {
                let next = dirs.remove(i + 1);
                dirs[i].push(':');
                dirs[i].push_str(&next);
            }
        }
    }
    dirs
}
