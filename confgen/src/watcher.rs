//! Live reloading of configuration values.
//!
//! A watch keeps a shared, typed configuration value in sync with its
//! document on disk. The parent directory is watched rather than the
//! file itself, since editors commonly replace files by renaming a
//! temporary over them, and events are filtered back down to the one
//! file of interest.
//!
//! Two entry points are exposed. [`watch_changes`] invokes a callback
//! after every settled change to the file and leaves the reaction to the
//! caller. [`watch`] builds on it to keep an `Arc<RwLock<T>>` loaded. In
//! both cases callbacks run on a single background thread, so at most
//! one is in flight at a time.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use notify::{Event, EventKind, RecursiveMode, Watcher};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::loader::load;

/// How long the watch thread sleeps between shutdown checks.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// How long a change must be quiet before the callback runs. Write
/// bursts inside this window coalesce into one invocation.
const SETTLE_WINDOW: Duration = Duration::from_millis(50);

/// Handle to an active watch.
///
/// The watch stays alive as long as the handle does; dropping it (or
/// calling [`ConfigWatcher::stop`]) shuts the background thread down and
/// joins it.
#[derive(Debug)]
pub struct ConfigWatcher {
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ConfigWatcher {
    /// Stops watching and joins the background thread.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}

/// Invokes `on_event` after every settled change to the file at `path`.
///
/// Events for other files in the same directory are ignored, as are
/// removals; an editor that removes and recreates the file produces a
/// creation event right after, which is delivered. A burst of writes is
/// reported once, after it goes quiet.
///
/// # Errors
///
/// Returns an error when the filesystem watcher cannot be set up.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let watcher = confgen::watch_changes(Path::new("config.yaml"), || {
///     println!("document changed");
/// })?;
/// # Ok::<(), confgen::Error>(())
/// ```
pub fn watch_changes<F>(path: &Path, on_event: F) -> Result<ConfigWatcher>
where
    F: Fn() + Send + 'static,
{
    let path = path.to_path_buf();

    let (event_tx, event_rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(event_tx)?;
    watcher.watch(watch_dir(&path), RecursiveMode::NonRecursive)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let thread_shutdown = Arc::clone(&shutdown);
    let thread = thread::spawn(move || {
        // Owning the watcher here ties its lifetime to the thread.
        let _watcher = watcher;
        let file_name = path
            .file_name()
            .unwrap_or_else(|| path.as_os_str())
            .to_os_string();

        while !thread_shutdown.load(Ordering::Relaxed) {
            match event_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) if is_relevant(&event, &file_name) => {
                    // Let the burst settle before reacting.
                    while event_rx.recv_timeout(SETTLE_WINDOW).is_ok() {}
                    on_event();
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => log::warn!("Watch event error: {e}"),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    });

    Ok(ConfigWatcher {
        shutdown,
        thread: Some(thread),
    })
}

/// Loads `path` into `target` and keeps it loaded as the file changes.
///
/// The document is loaded once before this function returns; a failure
/// there is a hard error, exactly as for [`load`](crate::load). After
/// that, every change to the file triggers a reload on the watch thread.
/// A successful reload swaps the value under the write lock and then
/// invokes `on_change`; a failed one logs a warning and keeps the
/// previous value. Readers therefore never observe a torn or invalid
/// configuration.
///
/// # Errors
///
/// Returns an error when the initial load fails or the filesystem
/// watcher cannot be set up.
///
/// # Examples
///
/// ```no_run
/// use serde::Deserialize;
/// use std::path::Path;
/// use std::sync::{Arc, RwLock};
///
/// #[derive(Debug, Default, Deserialize)]
/// #[serde(default)]
/// struct Config {
///     port: i64,
/// }
///
/// let config = Arc::new(RwLock::new(Config::default()));
/// let watcher = confgen::watch(Path::new("config.yaml"), Arc::clone(&config), || {
///     println!("configuration reloaded");
/// })?;
/// # Ok::<(), confgen::Error>(())
/// ```
pub fn watch<T, F>(path: &Path, target: Arc<RwLock<T>>, on_change: F) -> Result<ConfigWatcher>
where
    T: DeserializeOwned + Send + Sync + 'static,
    F: Fn() + Send + 'static,
{
    store(&target, load(path)?);

    let reload_path = path.to_path_buf();
    watch_changes(path, move || match load(&reload_path) {
        Ok(value) => {
            store(&target, value);
            log::debug!("Reloaded configuration from {}", reload_path.display());
            on_change();
        }
        Err(e) => log::warn!(
            "Reload of {} failed, keeping previous value: {e}",
            reload_path.display()
        ),
    })
}

/// The directory whose events cover the watched file.
fn watch_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Whether an event concerns the watched file and can change its
/// contents. Removals are ignored; editors that remove and recreate
/// produce a creation event right after.
fn is_relevant(event: &Event, file_name: &OsStr) -> bool {
    let touches_file = event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name) || p.as_os_str() == file_name);
    touches_file && matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
}

fn store<T>(target: &Arc<RwLock<T>>, value: T) {
    let mut guard = target.write().unwrap_or_else(PoisonError::into_inner);
    *guard = value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_watch_requires_loadable_document() {
        let dir = TempDir::new().unwrap();
        let target = Arc::new(RwLock::new(Sample::default()));

        let result = watch(&dir.path().join("absent.yaml"), target, || {});
        assert!(result.is_err());
    }

    #[test]
    fn test_watch_changes_does_not_require_the_file() {
        // Watching is on the parent directory; the file may appear later.
        let dir = TempDir::new().unwrap();
        let watcher = watch_changes(&dir.path().join("later.yaml"), || {}).unwrap();
        watcher.stop();
    }

    #[test]
    fn test_watch_performs_initial_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.yaml");
        fs::write(&path, "name: initial\n").unwrap();

        let target = Arc::new(RwLock::new(Sample::default()));
        let watcher = watch(&path, Arc::clone(&target), || {}).unwrap();

        assert_eq!(target.read().unwrap().name, "initial");
        watcher.stop();
    }

    #[test]
    fn test_watcher_stop_is_idempotent_with_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.yaml");
        fs::write(&path, "name: x\n").unwrap();

        let target = Arc::new(RwLock::new(Sample::default()));
        let watcher = watch(&path, target, || {}).unwrap();
        // stop() consumes the handle; Drop must cope with the joined thread.
        watcher.stop();
    }

    #[test]
    fn test_is_relevant_filters_by_file_and_kind() {
        let file = OsStr::new("config.yaml");

        let modify = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/config.yaml"));
        assert!(is_relevant(&modify, file));

        let create = Event::new(EventKind::Create(notify::event::CreateKind::File))
            .add_path(PathBuf::from("/tmp/config.yaml"));
        assert!(is_relevant(&create, file));

        let other_file = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/other.yaml"));
        assert!(!is_relevant(&other_file, file));

        let removal = Event::new(EventKind::Remove(notify::event::RemoveKind::File))
            .add_path(PathBuf::from("/tmp/config.yaml"));
        assert!(!is_relevant(&removal, file));
    }

    #[test]
    fn test_watch_dir_fallbacks() {
        assert_eq!(watch_dir(Path::new("/etc/app/config.yaml")), Path::new("/etc/app"));
        assert_eq!(watch_dir(Path::new("config.yaml")), Path::new("."));
    }
}
