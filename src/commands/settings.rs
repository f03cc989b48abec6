// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{settings_path, Settings};
use anyhow::Result;

pub fn handle(settings: &Settings) -> Result<()> {
    println!("Settings file: {}", settings_path()?.display());
    println!("{}", serde_json::to_string_pretty(&settings.redacted())?);
    Ok(())
}
