/*
 * Copyright 2024 Ivan Yurchenko
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::error::Error;
use std::io::Write;

use clap::Parser;
use log::error;

use crate::lookup::find_on_path;
use crate::resolver::PathResolver;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Print the full path of executables found on the search path.
#[derive(Parser, Debug)]
#[command(name = "lookpath")]
pub struct Cli {
    /// Executable names, looked up in order.
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

/// Resolves every name and writes one path per line to `out`.
///
/// Stops at the first failure, which is logged, and returns the process exit status.
/// Usage errors never get here: clap exits with status 2 while parsing [`Cli`].
pub fn run(names: &[String], resolver: &impl PathResolver, out: &mut impl Write) -> u8 {
    for name in names {
        let path = match find_on_path(resolver, name) {
            Ok(path) => path,

            Err(e) => {
                match e.source() {
                    Some(source) => error!("Lookup of {:?} failed: {}: {}", name, e, source),
                    None => error!("Lookup of {:?} failed: {}", name, e),
                }
                return FAILURE;
            }
        };

        if let Err(e) = writeln!(out, "{}", path.display()) {
            error!("Failed to print {}: {}", path.display(), e);
            return FAILURE;
        }
    }
    SUCCESS
}
