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

//! Command-line option parsing into a logger configuration.
//!
//! The surface is deliberately tiny and lenient: four options, no mandatory
//! flags, and no parse errors. Unrecognized tokens are skipped, a value
//! flag with no following token is dropped, and an unparseable level keeps
//! the default filter.

use crate::LogLevel;
use crate::LoggerConfig;

/// The outcome of [`parse`]: a resolved configuration plus whether the
/// tokens requested clearing the log file.
#[derive(Debug)]
pub struct ParsedArgs {
    pub config: LoggerConfig,
    pub clear: bool,
}

/// Parses command-line tokens into a logger configuration.
///
/// Recognized options (case-sensitive, exact match):
///
/// | Flag        | Short | Value  | Effect                          |
/// |-------------|-------|--------|---------------------------------|
/// | `--type`    | `-t`  | LEVEL  | sets the level filter           |
/// | `--path`    | `-p`  | PATH   | sets the log directory          |
/// | `--logname` | `-ln` | NAME   | sets the program name           |
/// | `--clear`   | `-c`  | none   | truncate the log after building |
///
/// Value flags bind to their immediately following token, whatever it is.
/// If no recognized option occurs at all, the result is the default
/// configuration and `clear` is false.
pub fn parse<I>(tokens: I) -> ParsedArgs
where
    I: IntoIterator<Item = String>,
{
    let pairs = collect_pairs(tokens);
    if pairs.is_empty() {
        return ParsedArgs {
            config: LoggerConfig::new(),
            clear: false,
        };
    }

    let mut filter = LogLevel::All;
    let mut clear = false;
    let mut path = String::new();
    let mut name = String::new();

    for (flag, value) in pairs {
        match flag.as_str() {
            "--type" | "-t" => filter = value.parse().unwrap_or_default(),
            "--clear" | "-c" => clear = true,
            "--path" | "-p" => path = value,
            "--logname" | "-ln" => name = value,
            _ => {}
        }
    }

    ParsedArgs {
        config: LoggerConfig::with_path_and_name(&path, &name).with_filter(filter),
        clear,
    }
}

// Pairs each value flag with its following token. A value flag that is the
// last token is dropped; anything unrecognized is skipped without
// consuming a value.
fn collect_pairs<I>(tokens: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = String>,
{
    let mut pairs = Vec::new();
    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--type" | "-t" | "--path" | "-p" | "--logname" | "-ln" => {
                if let Some(value) = tokens.next() {
                    pairs.push((token, value));
                }
            }
            "--clear" | "-c" => pairs.push((token, String::new())),
            _ => {}
        }
    }
    pairs
}
