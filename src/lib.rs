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

//! Executable lookup behind a one-method [`PathResolver`] trait.
//!
//! [`RealPathResolver`] asks the operating system, [`FakePathResolver`] searches an
//! explicit [`SearchPath`] against a [`VirtualFileSystem`]. Code written against
//! [`find_on_path`] runs the same with either of them.

pub mod cli;
mod error;
mod fs;
mod lookup;
mod resolver;
mod search_path;
mod test_utils;

pub use crate::error::LookupError;
pub use crate::fs::file_system::{Entry, FileSystem};
pub use crate::fs::virtual_file_system::VirtualFileSystem;
pub use crate::lookup::find_on_path;
pub use crate::resolver::fake_path_resolver::FakePathResolver;
pub use crate::resolver::real_path_resolver::RealPathResolver;
pub use crate::resolver::PathResolver;
pub use crate::search_path::SearchPath;
