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

use std::path::PathBuf;

use log::{debug, warn};

use crate::error::LookupError;
use crate::resolver::PathResolver;

/// Looks `name` up with any [`PathResolver`].
///
/// Failures are returned to the caller, which decides whether they are fatal.
pub fn find_on_path(resolver: &impl PathResolver, name: &str) -> Result<PathBuf, LookupError> {
    match resolver.resolve(name) {
        Ok(path) => {
            debug!("Found {:?} at {}", name, path.display());
            Ok(path)
        }

        Err(e) => {
            warn!("Failed to find {:?}: {}", name, e);
            Err(e)
        }
    }
}
