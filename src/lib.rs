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

//! Plainlog is a minimal leveled file logger: it formats timestamped,
//! level-tagged lines and appends them to a log file whose path is derived
//! from a program name and a working directory.
//!
//! # Overview
//!
//! A [`Logger`] is fully configured at construction. Every write is an
//! independent, synchronous open-append-close; there is no buffering, no
//! background flusher, and no persistent file handle. The log file lives at
//! `<directory>/<program_name>_log.txt`, where the directory is created on
//! demand and the program name defaults to the current executable's name.
//!
//! # Examples
//!
//! Log to the current working directory under the process name:
//!
//! ```no_run
//! let logger = plainlog::Logger::new();
//! logger.log_info("service started").unwrap();
//! ```
//!
//! Configure directory, name, and a level filter from the command line:
//!
//! ```no_run
//! let logger = plainlog::Logger::from_args(std::env::args().skip(1));
//! logger.log("visible only at the configured level").unwrap();
//! ```

pub mod args;
pub mod config;
mod error;
mod level;
mod logger;
pub mod name;
pub mod path;

pub use error::InvalidName;
pub use error::ParseLevelError;
pub use level::LogLevel;
pub use logger::Logger;

pub use config::LoggerConfig;
