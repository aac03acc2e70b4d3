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

#[cfg(test)]
use std::path::{Path, PathBuf};

#[cfg(test)]
use fastrand::alphanumeric;

#[cfg(test)]
use crate::fs::virtual_file_system::VirtualFileSystem;

#[cfg(test)]
pub(crate) fn random_name(len: usize) -> String {
    (0..len).map(|_| alphanumeric()).collect()
}

/// Builds a virtual filesystem from a scenario: directories first, then files.
#[cfg(test)]
pub(crate) fn virtual_fs(dirs: &[&str], files: &[&str]) -> VirtualFileSystem {
    let mut fs = VirtualFileSystem::new();
    for dir in dirs {
        fs.create_dir_all(dir).unwrap();
    }
    for file in files {
        fs.create_file(file).unwrap();
    }
    fs
}

#[cfg(all(test, unix))]
pub(crate) fn create_executable(dir: &Path, name: &str) -> PathBuf {
    use std::fs::{File as StdFile, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    StdFile::create(&path).unwrap();
    std::fs::set_permissions(&path, Permissions::from_mode(0o755)).unwrap();
    path
}
