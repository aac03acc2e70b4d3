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
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::LookupError;

/// Ordered list of directories consulted when resolving an executable name.
/// The earliest directory containing a match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    const PATH_VAR: &'static str = "PATH";

    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads `PATH` of the current process. A missing variable gives an empty search path.
    pub fn from_env() -> Self {
        match env::var_os(SearchPath::PATH_VAR) {
            Some(value) => SearchPath::new(env::split_paths(&value)),
            None => SearchPath::default(),
        }
    }

    pub fn push<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dirs.push(dir.into());
        self
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Joins the entries into a platform search-path string, e.g. `/usr/bin:/bin`.
    pub fn to_os_string(&self) -> Result<OsString, LookupError> {
        env::join_paths(&self.dirs).map_err(LookupError::from)
    }
}
