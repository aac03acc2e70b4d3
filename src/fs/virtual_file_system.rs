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

use std::collections::HashMap;
use std::io;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use log::debug;

use crate::fs::file_system::{Entry, FileSystem};

/// In-memory tree of directories and empty files.
///
/// Only existence is modelled: there is no content, no permissions and no deletion.
/// Relative paths are treated as relative to the root.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    entries: HashMap<PathBuf, Entry>,
}

impl VirtualFileSystem {
    pub fn new() -> VirtualFileSystem {
        let mut entries = HashMap::new();
        entries.insert(PathBuf::from(MAIN_SEPARATOR_STR), Entry::Dir);
        VirtualFileSystem { entries }
    }

    /// Creates the directory and all its missing ancestors. Creating an existing directory is a no-op.
    pub fn create_dir_all<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let path = normalize(path.as_ref())?;
        let mut ancestors: Vec<&Path> = path.ancestors().collect();
        ancestors.reverse();

        // Nothing is created if some ancestor turns out to be a file.
        if let Some(file) = ancestors
            .iter()
            .find(|a| self.entries.get(**a) == Some(&Entry::File))
        {
            return Err(not_a_directory(file));
        }

        for ancestor in ancestors {
            if !self.entries.contains_key(ancestor) {
                debug!("Creating virtual directory {}", ancestor.display());
                self.entries.insert(ancestor.to_path_buf(), Entry::Dir);
            }
        }
        Ok(())
    }

    /// Creates an empty file. The parent directory must already exist.
    pub fn create_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let path = normalize(path.as_ref())?;
        if self.entries.get(&path) == Some(&Entry::Dir) {
            return Err(io::Error::new(
                ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            ));
        }

        match path.parent().map(|parent| (parent, self.entries.get(parent))) {
            Some((_, Some(Entry::Dir))) => {}

            Some((parent, Some(Entry::File))) => return Err(not_a_directory(parent)),

            Some((parent, None)) => return Err(not_found(parent)),

            None => return Err(not_found(&path)),
        }

        debug!("Creating virtual file {}", path.display());
        self.entries.insert(path, Entry::File);
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.open(path.as_ref()).is_ok()
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for VirtualFileSystem {
    fn open(&self, path: &Path) -> io::Result<Entry> {
        let normalized = normalize(path)?;
        match self.entries.get(&normalized) {
            Some(entry) => Ok(*entry),
            None => Err(not_found(path)),
        }
    }
}

fn normalize(path: &Path) -> io::Result<PathBuf> {
    if path.as_os_str().is_empty() || path.to_string_lossy().contains('\0') {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("invalid path: {:?}", path),
        ));
    }

    let mut normalized = PathBuf::from(MAIN_SEPARATOR_STR);
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),

            Component::CurDir => {}

            // Popping the root is a no-op, so `..` never escapes it.
            Component::ParentDir => {
                normalized.pop();
            }

            Component::Normal(name) => normalized.push(name),
        }
    }
    Ok(normalized)
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

fn not_a_directory(path: &Path) -> io::Error {
    io::Error::new(
        ErrorKind::Other,
        format!("not a directory: {}", path.display()),
    )
}

#[cfg(unix)]
#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use rstest::rstest;

    use crate::fs::file_system::{Entry, FileSystem};
    use crate::fs::virtual_file_system::{normalize, VirtualFileSystem};

    #[rstest]
    #[case("/", "/")]
    #[case("/some/path", "/some/path")]
    #[case("/some/path/", "/some/path")]
    #[case("/some//path", "/some/path")]
    #[case("/some/./path", "/some/path")]
    #[case("/some/../other/path", "/other/path")]
    #[case("/../some", "/some")]
    #[case("some/path", "/some/path")]
    #[case(".", "/")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(Path::new(input)).unwrap(), PathBuf::from(expected));
    }

    #[rstest]
    #[case("")]
    #[case("/some/pa\0th")]
    fn test_normalize_invalid(#[case] input: &str) {
        let error = normalize(Path::new(input)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn root_exists() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.open(Path::new("/")).unwrap(), Entry::Dir);
    }

    #[test]
    fn create_dir_all_with_ancestors() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some/path").unwrap();
        assert_eq!(fs.open(Path::new("/some")).unwrap(), Entry::Dir);
        assert_eq!(fs.open(Path::new("/some/path")).unwrap(), Entry::Dir);
        assert!(!fs.exists("/other"));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some/path").unwrap();
        fs.create_file("/some/path/my-bin").unwrap();
        fs.create_dir_all("/some/path").unwrap();
        fs.create_dir_all("/some/path/").unwrap();
        assert_eq!(fs.open(Path::new("/some/path")).unwrap(), Entry::Dir);
        assert_eq!(fs.open(Path::new("/some/path/my-bin")).unwrap(), Entry::File);
    }

    #[test]
    fn create_dir_all_invalid_path() {
        let mut fs = VirtualFileSystem::new();
        let error = fs.create_dir_all("").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn create_dir_all_through_file() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some").unwrap();
        fs.create_file("/some/file").unwrap();
        let error = fs.create_dir_all("/some/file/path").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Other);
        assert_eq!(format!("{}", error), "not a directory: /some/file");
        assert!(!fs.exists("/some/file/path"));
        assert_eq!(fs.open(Path::new("/some/file")).unwrap(), Entry::File);
    }

    #[test]
    fn create_file() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some/path").unwrap();
        fs.create_file("/some/path/my-bin").unwrap();
        assert_eq!(fs.open(Path::new("/some/path/my-bin")).unwrap(), Entry::File);
        // Re-creating truncates, which for an empty file changes nothing.
        fs.create_file("/some/path/my-bin").unwrap();
        assert_eq!(fs.open(Path::new("/some/path/my-bin")).unwrap(), Entry::File);
    }

    #[test]
    fn create_file_without_parent() {
        let mut fs = VirtualFileSystem::new();
        let error = fs.create_file("/some/path/my-bin").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(format!("{}", error), "no such file or directory: /some/path");
        assert!(!fs.exists("/some/path/my-bin"));
    }

    #[test]
    fn create_file_over_directory() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some/path").unwrap();
        let error = fs.create_file("/some/path").unwrap_err();
        assert_eq!(format!("{}", error), "is a directory: /some/path");
        assert_eq!(fs.open(Path::new("/some/path")).unwrap(), Entry::Dir);
    }

    #[test]
    fn create_file_under_file() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some").unwrap();
        fs.create_file("/some/file").unwrap();
        let error = fs.create_file("/some/file/my-bin").unwrap_err();
        assert_eq!(format!("{}", error), "not a directory: /some/file");
    }

    #[test]
    fn open_non_existent() {
        let fs = VirtualFileSystem::new();
        let error = fs.open(Path::new("/some/path/my-bin")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(
            format!("{}", error),
            "no such file or directory: /some/path/my-bin"
        );
    }

    #[test]
    fn open_normalizes() {
        let mut fs = VirtualFileSystem::new();
        fs.create_dir_all("/some/path").unwrap();
        fs.create_file("/some/path/my-bin").unwrap();
        assert!(fs.exists("/some//path/./my-bin"));
        assert!(fs.exists("/some/other/../path/my-bin"));
    }

    #[test]
    // for coverage
    fn test_debug() {
        format!("{:?}", VirtualFileSystem::default());
    }
}
