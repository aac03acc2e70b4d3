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

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::error::LookupError;
use crate::resolver::PathResolver;
use crate::search_path::SearchPath;

/// Resolves names with the operating system's executable search.
#[derive(Debug, Clone, Default)]
pub struct RealPathResolver {
    search_path: Option<SearchPath>,
}

impl RealPathResolver {
    /// Searches `PATH` of the current process.
    pub fn new() -> RealPathResolver {
        RealPathResolver { search_path: None }
    }

    /// Searches the given directories instead of `PATH`.
    /// Relative entries are resolved against the current directory.
    pub fn with_search_path(search_path: SearchPath) -> RealPathResolver {
        RealPathResolver {
            search_path: Some(search_path),
        }
    }
}

impl PathResolver for RealPathResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, LookupError> {
        if name.is_empty() {
            return Err(LookupError::not_found(name));
        }

        let result = match &self.search_path {
            None => which::which(name),

            Some(search_path) => {
                let paths = search_path.to_os_string()?;
                let cwd = env::current_dir()?;
                debug!("Searching {:?} in {:?}", name, paths);
                which::which_in(name, Some(paths), cwd)
            }
        };

        match result {
            Ok(path) => Ok(path),

            Err(which::Error::CannotFindBinaryPath) => Err(LookupError::not_found(name)),

            Err(e) => Err(LookupError::from(e)),
        }
    }
}
