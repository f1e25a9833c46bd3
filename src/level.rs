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

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// A log level a line can be written at, doubling as a level filter.
///
/// [`LogLevel::All`] is both a concrete writable level (the one with no
/// textual tag) and a filter value meaning "accept every level."
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    All,
    Info,
    Debug,
    Warn,
    Error,
}

impl LogLevel {
    /// The line prefix for this level, padded so the `|` columns align.
    ///
    /// `All` carries no textual tag; its lines are indented instead.
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            LogLevel::All => "\t\t",
            LogLevel::Info => "INFO  | ",
            LogLevel::Debug => "DEBUG | ",
            LogLevel::Warn => "WARN  | ",
            LogLevel::Error => "ERROR | ",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Whether a line written at `level` passes this filter.
    pub(crate) fn accepts(&self, level: LogLevel) -> bool {
        *self == LogLevel::All || *self == level
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(LogLevel::All),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
