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

//! Logger configuration: the resolved (directory, program name, filter)
//! triple and the log file name derived from it.

use std::path::Path;
use std::path::PathBuf;

use crate::LogLevel;
use crate::name;
use crate::path;

/// A fully-resolved logger configuration, immutable after construction.
///
/// The directory is guaranteed to exist once construction completes; the
/// program name is guaranteed not to contain an extension separator. The
/// log file name is derived on demand and never cached, so it is always a
/// pure function of the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    directory: PathBuf,
    program_name: String,
    filter: LogLevel,
}

impl LoggerConfig {
    /// Configuration for the current working directory under the current
    /// process's name.
    pub fn new() -> Self {
        let cwd = current_dir();
        let program_name = process_name();
        Self {
            directory: cwd,
            program_name,
            filter: LogLevel::All,
        }
    }

    /// Configuration for the current working directory under the given
    /// logger name.
    pub fn with_name(name: &str) -> Self {
        let cwd = current_dir();
        Self::resolved_in(cwd, "", name)
    }

    /// Configuration for the given directory path (relative or absolute,
    /// created if absent) under the given logger name.
    pub fn with_path_and_name(directory: &str, name: &str) -> Self {
        let cwd = current_dir();
        Self::resolved_in(cwd, directory, name)
    }

    /// Resolves `directory` and `name` against an explicit working
    /// directory instead of the ambient one.
    ///
    /// The public constructors delegate here with the ambient working
    /// directory; taking it as a parameter keeps resolution testable by
    /// injection.
    pub fn resolved_in(cwd: PathBuf, directory: &str, name: &str) -> Self {
        let directory = path::resolve(directory, &cwd);
        let program_name = name::validate_or_cwd(name, &cwd);
        Self {
            directory,
            program_name,
            filter: LogLevel::All,
        }
    }

    /// Replaces the level filter. Defaults to [`LogLevel::All`].
    pub fn with_filter(mut self, filter: LogLevel) -> Self {
        self.filter = filter;
        self
    }

    /// The directory log files are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The validated program name used in the log file name.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The configured level filter.
    pub fn filter(&self) -> LogLevel {
        self.filter
    }

    /// The derived log file path: `<directory>/<program_name>_log.txt`.
    pub fn log_file_path(&self) -> PathBuf {
        self.directory.join(format!("{}_log.txt", self.program_name))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn process_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_default()
}
