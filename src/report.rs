// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::Error;

/// What a batch operation does to each output.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Action {
    Generate,
    Placeholder,
}

impl Action {
    fn done(self, path: &Path) -> String {
        match self {
            Action::Generate => format!("Generated {}", path.display()),
            Action::Placeholder => format!("Created placeholder: {}", path.display()),
        }
    }

    fn failed(self, path: &Path, e: &Error) -> String {
        match self {
            Action::Generate => format!("Error generating {}: {}", path.display(), e),
            Action::Placeholder => {
                format!("Error creating placeholder {}: {}", path.display(), e)
            }
        }
    }
}

/// An outcome of a batch operation.
///
/// Batch operations never stop on a single failed output,
/// they record it here and move on.
#[derive(Default, Debug)]
pub struct Report {
    /// Files that were written.
    pub written: Vec<PathBuf>,
    /// Files that were already up to date.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be produced, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl Report {
    /// Records the result of producing `path`.
    pub(crate) fn record(&mut self, path: &Path, result: Result<(), Error>, action: Action) {
        match result {
            Ok(()) => {
                log::info!("{}", action.done(path));
                self.written.push(path.to_path_buf());
            }
            Err(e) => {
                log::warn!("{}", action.failed(path, &e));
                self.failed.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    pub(crate) fn skip(&mut self, path: &Path) {
        log::info!("Skipping {} (already exists)", path.display());
        self.skipped.push(path.to_path_buf());
    }

    /// Checks that nothing has failed.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} written, {} skipped, {} failed",
            self.written.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}
