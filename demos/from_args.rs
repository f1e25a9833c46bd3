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

use plainlog::Logger;

/// Try for example:
///
/// ```shell
/// cargo run --example from_args -- --type WARN --path logs --logname svc
/// cargo run --example from_args -- --clear --path logs --logname svc
/// ```
fn main() -> anyhow::Result<()> {
    let logger = Logger::from_args(std::env::args().skip(1));

    logger.log("written at the configured level")?;
    logger.log_warn("only visible when the filter admits WARN")?;
    logger.log_all("always visible")?;

    println!("wrote {}", logger.log_file_path().display());
    Ok(())
}
