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

use std::env::JoinPathsError;
use std::io;

use thiserror::Error;

/// Failure of an executable lookup.
///
/// Both resolvers report a missing executable as [`LookupError::NotFound`],
/// so callers can match on the variant regardless of which resolver they were given.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{name:?} wasn't found in path")]
    NotFound { name: String },

    #[error("executable search failed")]
    SearchFailure {
        #[from]
        source: which::Error,
    },

    #[error("search path is malformed")]
    MalformedSearchPath {
        #[from]
        source: JoinPathsError,
    },

    #[error("IO error")]
    IO {
        #[from]
        source: io::Error,
    },
}

impl LookupError {
    pub(crate) fn not_found(name: &str) -> LookupError {
        LookupError::NotFound {
            name: name.to_owned(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}
