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

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lookpath::cli::{run, Cli};
use lookpath::RealPathResolver;

fn main() -> ExitCode {
    init_logging();

    // Exits with status 2 on usage errors.
    let cli = Cli::parse();

    let resolver = RealPathResolver::new();
    ExitCode::from(run(&cli.names, &resolver, &mut io::stdout().lock()))
}

/// Records from the `log` facade are forwarded to stderr; `RUST_LOG` overrides the `error` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
