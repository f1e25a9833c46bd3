// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Log directory resolution.
//!
//! Turns a user-supplied directory string into a directory that is
//! guaranteed to exist, creating it on demand and falling back to the
//! working directory when creation fails.

use std::fs;
use std::io;
use std::path::MAIN_SEPARATOR;
use std::path::Path;
use std::path::PathBuf;

/// Converts foreign path-separator styles to the host convention.
///
/// Both `/` and `\` are treated as separators in the input; native
/// separators pass through unchanged.
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

// A path that is only a separator collapses to empty; otherwise a single
// trailing separator is stripped so directory creation sees a clean name.
fn strip_trailing_separator(mut path: String) -> String {
    if path.len() == 1 && path.ends_with(MAIN_SEPARATOR) {
        path.clear();
    } else if path.ends_with(MAIN_SEPARATOR) {
        path.pop();
    }
    path
}

/// Resolves `path` to an existing directory, creating it if absent.
///
/// An empty input (or one that collapses to empty after normalization)
/// short-circuits to `cwd` without touching the filesystem.
pub fn resolve_strict(path: &str, cwd: &Path) -> io::Result<PathBuf> {
    if path.is_empty() {
        return Ok(cwd.to_path_buf());
    }

    let normalized = normalize_separators(path);
    if Path::new(&normalized).is_dir() {
        return Ok(PathBuf::from(normalized));
    }

    let stripped = strip_trailing_separator(normalized);
    if stripped.is_empty() {
        return Ok(cwd.to_path_buf());
    }

    fs::create_dir_all(&stripped)?;
    Ok(PathBuf::from(stripped))
}

/// Lenient variant of [`resolve_strict`]: a creation failure is printed to
/// stdout and `cwd` is returned instead. This call never propagates an
/// error.
pub fn resolve(path: &str, cwd: &Path) -> PathBuf {
    resolve_strict(path, cwd).unwrap_or_else(|err| {
        println!("failed to create log directory {path:?}: {err}");
        cwd.to_path_buf()
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_normalize_separators() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(normalize_separators("a/b\\c"), format!("a{sep}b{sep}c"));
        assert_eq!(normalize_separators("plain"), "plain");
        assert_eq!(normalize_separators(""), "");
    }

    #[test]
    fn test_strip_trailing_separator() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(strip_trailing_separator(format!("a{sep}b{sep}")), format!("a{sep}b"));
        assert_eq!(strip_trailing_separator(sep.to_string()), "");
        assert_eq!(strip_trailing_separator("a".to_string()), "a");
    }

    #[test]
    fn test_empty_path_short_circuits_to_cwd() {
        let cwd = Path::new("/fallback");
        assert_eq!(resolve("", cwd), cwd);
    }

    #[test]
    fn test_existing_directory_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Path::new("/fallback");
        let input = dir.path().to_str().unwrap();
        assert_eq!(resolve(input, cwd), dir.path());
    }

    #[test]
    fn test_missing_directory_created() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Path::new("/fallback");
        let target = dir.path().join("nested").join("logs");
        let resolved = resolve(target.to_str().unwrap(), cwd);
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_trailing_separator_stripped_before_creation() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Path::new("/fallback");
        let target = dir.path().join("logs");
        let input = format!("{}{}", target.display(), MAIN_SEPARATOR);
        let resolved = resolve(&input, cwd);
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_creation_failure_falls_back_to_cwd() {
        let cwd = Path::new("/fallback");
        // /proc is not writable; creation must fail and recover.
        assert_eq!(resolve("/proc/plainlog-no-such-dir", cwd), cwd);
    }
}
