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

use std::fs;

use plainlog::LogLevel;
use plainlog::Logger;
use rand::Rng;
use rand::distr::Alphanumeric;

fn generate_random_string() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(50..=100);
    std::iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len)
        .collect()
}

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_from_args_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("x");

    let logger = Logger::from_args(args(&[
        "--type",
        "ERROR",
        "--path",
        target.to_str().unwrap(),
        "--logname",
        "svc",
    ]));
    assert_eq!(logger.config().filter(), LogLevel::Error);
    assert_eq!(logger.log_file_path(), target.join("svc_log.txt"));

    logger.log_error("boom").unwrap();
    logger.log_info("skip").unwrap();

    let contents = fs::read_to_string(logger.log_file_path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("boom"));
    assert!(!contents.contains("skip"));
}

#[test]
fn test_from_args_clear_truncates_existing_log() {
    let dir = tempfile::tempdir().unwrap();

    let logger = Logger::filtered_with_path(dir.path().to_str().unwrap(), "svc", LogLevel::All);
    for _ in 0..3 {
        logger.log_info(&generate_random_string()).unwrap();
    }
    assert!(fs::metadata(logger.log_file_path()).unwrap().len() > 0);

    let cleared = Logger::from_args(args(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--logname",
        "svc",
        "--clear",
    ]));
    assert_eq!(cleared.log_file_path(), logger.log_file_path());
    assert_eq!(fs::metadata(cleared.log_file_path()).unwrap().len(), 0);
}

#[test]
fn test_every_write_path_appends_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::filtered_with_path(dir.path().to_str().unwrap(), "seq", LogLevel::All);

    logger.log_all("all").unwrap();
    logger.log_info("info").unwrap();
    logger.log_debug("debug").unwrap();
    logger.log_warn("warn").unwrap();
    logger.log_error("error").unwrap();

    let contents = fs::read_to_string(logger.log_file_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("\t\t"));
    assert!(lines[1].starts_with("INFO  | "));
    assert!(lines[2].starts_with("DEBUG | "));
    assert!(lines[3].starts_with("WARN  | "));
    assert!(lines[4].starts_with("ERROR | "));
}

#[test]
fn test_random_payload_survives_append() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::filtered_with_path(dir.path().to_str().unwrap(), "payload", LogLevel::All);

    let payload = generate_random_string();
    logger.log_all(&payload).unwrap();

    let contents = fs::read_to_string(logger.log_file_path()).unwrap();
    assert!(contents.contains(&payload));
}

#[test]
fn test_dotted_logname_falls_back_to_directory_string() {
    let dir = tempfile::tempdir().unwrap();

    let logger = Logger::from_args(args(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--logname",
        "svc.txt",
    ]));
    // A name carrying an extension separator falls back to the working
    // directory rendered as a string.
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(logger.config().program_name(), cwd.display().to_string());
}
