// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::RwLockWriteGuard;
use std::time::Duration;

use anyhow::Context;

use crate::rotate::monitor::MonitorGuard;
use crate::sink::Sink;

const DEFAULT_FILENAME: &str = "longo.log";
const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// A sink that writes to `<dir>/<filename>` and rotates it into numbered
/// backups once it reaches a size limit.
///
/// Backups live at `<dir>/<filename>.<suffix>` with the suffix cycling
/// through `1..=max_backups`. Rotating into an occupied slot deletes the
/// previous occupant first, so at most `max_backups` backups exist at any
/// time and slot `k` always holds whichever rotation last wrote to it.
///
/// A sink configured with `max_backups <= 1` never rotates.
///
/// Rotation runs synchronously when a write finds the active file oversized,
/// and from a background thread that re-checks the size every second. The
/// background thread stops when the sink is dropped.
#[derive(Debug)]
pub struct RotatingFile {
    shared: Arc<Shared>,
    _monitor: MonitorGuard,
}

impl RotatingFile {
    /// Creates a new [`RotatingFileBuilder`].
    #[must_use]
    pub fn builder() -> RotatingFileBuilder {
        RotatingFileBuilder::new()
    }

    /// Whether the active file has reached the size limit and a rotation is
    /// due.
    pub fn must_rotate(&self) -> bool {
        self.shared.must_rotate()
    }

    /// Rotates the active file into the next backup slot unconditionally.
    ///
    /// Filesystem errors are reported to stderr and otherwise ignored.
    pub fn rotate(&self) {
        let mut state = self.shared.lock_write();
        self.shared.rotate(&mut state);
    }
}

impl Sink for RotatingFile {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        self.shared.write(bytes)
    }

    fn flush(&self) {
        self.shared.flush();
    }
}

/// A builder for configuring [`RotatingFile`].
#[derive(Debug)]
pub struct RotatingFileBuilder {
    filename: String,
    max_backups: usize,
    max_size: u64,
    check_interval: Duration,
}

impl Default for RotatingFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotatingFileBuilder {
    /// Creates a new [`RotatingFileBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            max_backups: 0,
            max_size: u64::MAX,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Sets the base filename of the active log file.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the maximum number of retained backup files.
    ///
    /// Values of 0 or 1 disable rotation.
    #[must_use]
    pub fn max_backups(mut self, n: usize) -> Self {
        self.max_backups = n;
        self
    }

    /// Sets the size limit of the active file in bytes.
    #[must_use]
    pub fn max_size(mut self, n: u64) -> Self {
        self.max_size = n;
        self
    }

    /// Sets the interval of the background rotation check.
    #[must_use]
    pub fn check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    /// Builds the [`RotatingFile`], opening the active file and spawning the
    /// background rotation check.
    ///
    /// Pre-existing backups are scanned so the suffix cycle continues where
    /// a previous process left off. If the active file is already oversized
    /// it is rotated before opening. Failing to open the active file is a
    /// hard error; the sink cannot function without one.
    pub fn build(self, dir: impl AsRef<Path>) -> anyhow::Result<RotatingFile> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let shared = Arc::new(Shared {
            dir,
            filename: self.filename,
            max_backups: self.max_backups,
            max_size: self.max_size,
            state: RwLock::new(FileState {
                file: None,
                suffix: 0,
            }),
        });

        {
            let mut state = shared.lock_write();
            state.suffix = shared.scan_existing_suffix();

            if shared.must_rotate() {
                shared.rotate(&mut state);
            }
            if state.file.is_none() {
                let path = shared.active_path();
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(&path)
                    .with_context(|| format!("failed to open log file {}", path.display()))?;
                state.file = Some(file);
            }
        }

        let monitor = MonitorGuard::spawn(Arc::downgrade(&shared), self.check_interval);
        Ok(RotatingFile {
            shared,
            _monitor: monitor,
        })
    }
}

#[derive(Debug)]
pub(crate) struct Shared {
    dir: PathBuf,
    filename: String,
    max_backups: usize,
    max_size: u64,
    state: RwLock<FileState>,
}

#[derive(Debug)]
struct FileState {
    file: Option<File>,
    suffix: usize,
}

impl Shared {
    fn active_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    fn backup_path(&self, suffix: usize) -> PathBuf {
        self.dir.join(format!("{}.{}", self.filename, suffix))
    }

    // Lock poisoning only means a writer panicked mid-write; the file state
    // itself stays usable, so recover the guard instead of propagating.
    fn lock_write(&self) -> RwLockWriteGuard<'_, FileState> {
        self.state.write().unwrap_or_else(|err| err.into_inner())
    }

    /// Highest contiguous pre-existing backup suffix, so restarts continue
    /// the cycle rather than resetting it.
    fn scan_existing_suffix(&self) -> usize {
        let mut suffix = 0;
        for i in 1..=self.max_backups {
            if self.backup_path(i).exists() {
                suffix = i;
            } else {
                break;
            }
        }
        suffix
    }

    pub(crate) fn must_rotate(&self) -> bool {
        self.max_backups > 1 && file_size(&self.active_path()) >= self.max_size
    }

    /// Checks the size limit and rotates if due. The limit is re-checked
    /// under the write lock: a concurrent writer may have rotated already.
    pub(crate) fn maybe_rotate(&self) {
        if !self.must_rotate() {
            return;
        }
        let mut state = self.lock_write();
        if file_size(&self.active_path()) >= self.max_size {
            self.rotate(&mut state);
        }
    }

    fn rotate(&self, state: &mut FileState) {
        if self.max_backups == 0 {
            return;
        }
        state.suffix = state.suffix % self.max_backups + 1;

        // Close the current handle before touching the file it points at.
        state.file.take();

        let backup = self.backup_path(state.suffix);
        if backup.exists() {
            if let Err(err) = fs::remove_file(&backup) {
                eprintln!("failed to remove old backup {}: {err}", backup.display());
            }
        }
        if let Err(err) = fs::rename(self.active_path(), &backup) {
            eprintln!("failed to rename active log file: {err}");
        }
        match File::create(self.active_path()) {
            Ok(file) => state.file = Some(file),
            Err(err) => eprintln!("failed to create fresh log file: {err}"),
        }
    }

    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        self.maybe_rotate();

        let state = match self.state.read() {
            Ok(state) => state,
            Err(err) => err.into_inner(),
        };
        let Some(mut file) = state.file.as_ref() else {
            anyhow::bail!("no active log file");
        };
        file.write_all(bytes).context("failed to write log file")?;
        Ok(())
    }

    fn flush(&self) {
        let state = match self.state.read() {
            Ok(state) => state,
            Err(err) => err.into_inner(),
        };
        if let Some(mut file) = state.file.as_ref() {
            let _ = file.flush();
        }
    }
}

fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}
