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

use std::io::ErrorKind;
use std::path;
use std::path::PathBuf;

use log::debug;

use crate::error::LookupError;
use crate::fs::file_system::FileSystem;
use crate::resolver::PathResolver;
use crate::search_path::SearchPath;

/// Resolves names by checking `<dir>/<name>` for each search path entry against a
/// [`FileSystem`], typically a [`VirtualFileSystem`](crate::VirtualFileSystem).
/// The outcome depends only on the search path and the filesystem contents.
#[derive(Debug)]
pub struct FakePathResolver<'a, F: FileSystem> {
    search_path: SearchPath,
    fs: &'a F,
}

impl<'a, F: FileSystem> FakePathResolver<'a, F> {
    pub fn new(search_path: SearchPath, fs: &'a F) -> FakePathResolver<'a, F> {
        FakePathResolver { search_path, fs }
    }
}

impl<F: FileSystem> PathResolver for FakePathResolver<'_, F> {
    fn resolve(&self, name: &str) -> Result<PathBuf, LookupError> {
        // `<dir>/<name>` stays under `dir` even when `name` starts with a separator.
        let relative = name.trim_start_matches(path::is_separator);
        if relative.is_empty() {
            return Err(LookupError::not_found(name));
        }

        for dir in self.search_path.dirs() {
            let candidate = dir.join(relative);
            match self.fs.open(&candidate) {
                Ok(_) => return Ok(candidate),

                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{} doesn't exist", candidate.display());
                }

                Err(e) => return Err(LookupError::from(e)),
            }
        }

        Err(LookupError::not_found(name))
    }
}
