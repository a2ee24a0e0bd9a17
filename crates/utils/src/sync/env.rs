use credkit_core::{Error, Result};
use once_cell::sync::Lazy;
use std::env;
use std::sync::RwLock;

/// Global RwLock for thread-safe environment variable access
/// Using RwLock since reads are much more common than writes
static ENV_LOCK: Lazy<RwLock<()>> = Lazy::new(|| RwLock::new(()));

/// Thread-safe environment variable operations
pub struct SyncEnv;

impl SyncEnv {
    /// Set an environment variable with thread safety
    pub fn set_var<K: AsRef<str>, V: AsRef<str>>(key: K, value: V) -> Result<()> {
        let _guard = ENV_LOCK.write().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment write lock: {e}"),
            )
        })?;

        env::set_var(key.as_ref(), value.as_ref());
        Ok(())
    }

    /// Get an environment variable with thread safety
    ///
    /// Unset variables are `Ok(None)`; a value that is not valid unicode is
    /// an error rather than being treated as absent.
    pub fn var<K: AsRef<str>>(key: K) -> Result<Option<String>> {
        let key = key.as_ref();
        let _guard = ENV_LOCK.read().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment read lock: {e}"),
            )
        })?;

        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e @ env::VarError::NotUnicode(_)) => Err(Error::environment(key, e.to_string())),
        }
    }

    /// Remove an environment variable with thread safety
    pub fn remove_var<K: AsRef<str>>(key: K) -> Result<()> {
        let _guard = ENV_LOCK.write().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment write lock: {e}"),
            )
        })?;

        env::remove_var(key.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::thread;

    #[test]
    #[serial]
    fn test_thread_safe_env_operations() -> Result<()> {
        let key = "CREDKIT_TEST_SYNC_ENV";

        SyncEnv::set_var(key, "value1")?;
        assert_eq!(SyncEnv::var(key)?, Some("value1".to_string()));

        let handle = thread::spawn(move || {
            SyncEnv::set_var(key, "value2").expect("Failed to set env var in thread");
        });

        handle.join().expect("Thread panicked");
        assert_eq!(SyncEnv::var(key)?, Some("value2".to_string()));

        SyncEnv::remove_var(key)?;
        assert_eq!(SyncEnv::var(key)?, None);

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_value_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "CREDKIT_TEST_NON_UNICODE";
        env::set_var(key, OsStr::from_bytes(&[0x66, 0x6f, 0x80]));

        let result = SyncEnv::var(key);
        env::remove_var(key);

        match result {
            Err(Error::Environment { variable, .. }) => assert_eq!(variable, key),
            other => panic!("expected environment error, got {other:?}"),
        }
    }
}
