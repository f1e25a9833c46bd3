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

//! Logger name validation.
//!
//! A logger name must not look like a filename: the `_log.txt` suffix is
//! appended by the logger, so a name carrying its own extension separator is
//! rejected.

use std::path::Path;

use crate::error::InvalidName;

/// Checks that `name` does not contain an extension separator.
///
/// Empty names are valid and yield a log file literally named `_log.txt`.
pub fn validate(name: &str) -> Result<&str, InvalidName> {
    if name.contains('.') {
        Err(InvalidName(name.to_string()))
    } else {
        Ok(name)
    }
}

/// Lenient variant of [`validate`]: an invalid name falls back to the
/// working directory rendered as a string.
///
/// Callers that want to reject invalid names instead should use
/// [`validate`] directly.
pub fn validate_or_cwd(name: &str, cwd: &Path) -> String {
    match validate(name) {
        Ok(name) => name.to_string(),
        Err(_) => cwd.display().to_string(),
    }
}
