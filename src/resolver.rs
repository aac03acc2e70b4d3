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

use crate::error::LookupError;

pub(crate) mod fake_path_resolver;
pub(crate) mod mock_path_resolver;
pub(crate) mod real_path_resolver;

/// Finds the full path of a named executable.
pub trait PathResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, LookupError>;
}
