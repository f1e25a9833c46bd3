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

use plainlog::LogLevel;
use plainlog::Logger;

fn main() -> anyhow::Result<()> {
    // Unfiltered logger writing to ./logs/demo_log.txt.
    let logger = Logger::with_path("logs", "demo");
    logger.clear()?;

    logger.log_all("unconditional line, no tag")?;
    logger.log_info("Hello info!")?;
    logger.log_debug("Hello debug!")?;
    logger.log_warn("Hello warn!")?;
    logger.log_error("Hello error!")?;

    // A filtered logger only emits its own level, except log_all.
    let errors_only = Logger::filtered_with_path("logs", "errors", LogLevel::Error);
    errors_only.log_info("dropped")?;
    errors_only.log_error("kept")?;
    errors_only.log_all("also kept")?;

    println!("wrote {}", logger.log_file_path().display());
    println!("wrote {}", errors_only.log_file_path().display());
    Ok(())
}
