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
use std::path::Path;

/// Kind of an existing filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Dir,
    File,
}

/// Read-only existence queries the fake resolver runs candidates through.
pub trait FileSystem {
    /// Returns the kind of the entry at `path`, or an error of kind
    /// [`io::ErrorKind::NotFound`] if nothing was created there.
    fn open(&self, path: &Path) -> io::Result<Entry>;
}
