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

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::LogLevel;
use crate::LoggerConfig;
use crate::args;

/// A leveled file logger.
///
/// A logger is fully configured at construction and stateless afterwards:
/// every write opens the log file in append mode, writes one line, and
/// closes the handle. Writes at a level the filter rejects are no-ops.
///
/// Write failures are reported through the returned `Result`; nothing in
/// this type panics on I/O errors.
///
/// # Examples
///
/// ```no_run
/// use plainlog::{Logger, LogLevel};
///
/// let logger = Logger::filtered_with_path("logs", "svc", LogLevel::Error);
/// logger.log_error("boom").unwrap();
/// logger.log_info("filtered out, no file change").unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Logs to the current working directory under the current process's
    /// name.
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::new())
    }

    /// Logs to the current working directory under the given logger name.
    pub fn with_name(name: &str) -> Self {
        Self::from_config(LoggerConfig::with_name(name))
    }

    /// Logs to the given directory (created if absent) under the given
    /// logger name.
    pub fn with_path(directory: &str, name: &str) -> Self {
        Self::from_config(LoggerConfig::with_path_and_name(directory, name))
    }

    /// Default logger with a level filter.
    pub fn filtered(filter: LogLevel) -> Self {
        Self::from_config(LoggerConfig::new().with_filter(filter))
    }

    /// Named logger with a level filter.
    pub fn filtered_with_name(name: &str, filter: LogLevel) -> Self {
        Self::from_config(LoggerConfig::with_name(name).with_filter(filter))
    }

    /// Fully specified logger: directory, name, and level filter.
    pub fn filtered_with_path(directory: &str, name: &str, filter: LogLevel) -> Self {
        Self::from_config(LoggerConfig::with_path_and_name(directory, name).with_filter(filter))
    }

    /// Builds a logger from command-line tokens; see [`args::parse`].
    ///
    /// If the tokens requested a clear, it is applied best-effort: a
    /// failure is printed to stdout rather than propagated.
    pub fn from_args<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let parsed = args::parse(tokens);
        let logger = Self::from_config(parsed.config);
        if parsed.clear {
            if let Err(err) = logger.clear() {
                println!("failed to clear log file: {err:#}");
            }
        }
        logger
    }

    /// Wraps an already-resolved configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// This logger's configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The derived log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.config.log_file_path()
    }

    /// Truncates the log file to zero length, creating it if absent.
    pub fn clear(&self) -> anyhow::Result<()> {
        let path = self.config.log_file_path();
        File::create(&path)
            .with_context(|| format!("failed to truncate log file {}", path.display()))?;
        Ok(())
    }

    /// Writes one line at whichever single level this logger is configured
    /// for. A filter of [`LogLevel::All`] dispatches to [`Logger::log_all`].
    pub fn log(&self, line: &str) -> anyhow::Result<()> {
        match self.config.filter() {
            LogLevel::All => self.log_all(line),
            LogLevel::Info => self.log_info(line),
            LogLevel::Debug => self.log_debug(line),
            LogLevel::Warn => self.log_warn(line),
            LogLevel::Error => self.log_error(line),
        }
    }

    /// Writes an untagged, indented line regardless of the filter.
    pub fn log_all(&self, line: &str) -> anyhow::Result<()> {
        self.write(LogLevel::All, line)
    }

    /// Writes an `INFO`-tagged line if the filter admits it.
    pub fn log_info(&self, line: &str) -> anyhow::Result<()> {
        self.write(LogLevel::Info, line)
    }

    /// Writes a `DEBUG`-tagged line if the filter admits it.
    pub fn log_debug(&self, line: &str) -> anyhow::Result<()> {
        self.write(LogLevel::Debug, line)
    }

    /// Writes a `WARN`-tagged line if the filter admits it.
    pub fn log_warn(&self, line: &str) -> anyhow::Result<()> {
        self.write(LogLevel::Warn, line)
    }

    /// Writes an `ERROR`-tagged line if the filter admits it.
    pub fn log_error(&self, line: &str) -> anyhow::Result<()> {
        self.write(LogLevel::Error, line)
    }

    fn write(&self, level: LogLevel, line: &str) -> anyhow::Result<()> {
        // ALL lines are unconditional; tagged lines respect the filter.
        if level != LogLevel::All && !self.config.filter().accepts(level) {
            return Ok(());
        }
        self.append(&format!("{}{} | {}\n", level.tag(), timestamp(), line))
    }

    fn append(&self, formatted: &str) -> anyhow::Result<()> {
        let path = self.config.log_file_path();
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        file.write_all(formatted.as_bytes())
            .with_context(|| format!("failed to append to log file {}", path.display()))?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string()
}
