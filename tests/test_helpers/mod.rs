//! Scoped tracker environment for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Tracker variables overridden for the lifetime of the guard.
///
/// Holding the guard serializes every test that touches the environment;
/// dropping it restores the saved values.
pub struct EnvVarGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `changes`; a `None` value unsets the variable.
    pub fn set_many(changes: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = changes
            .iter()
            .map(|&(key, value)| {
                let previous = env::var_os(key);
                write_var(key, value.map(OsString::from));
                (key, previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            write_var(key, previous);
        }
    }
}

fn write_var(key: &str, value: Option<OsString>) {
    // SAFETY: callers hold `ENV_LOCK`, so no other test reads or writes the
    // environment concurrently.
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
