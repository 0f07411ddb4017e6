
use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Every variable `Config::load` reads
const CONFIG_VARS: [&str; 16] = [
    "HOST",
    "PORT",
    "APP_ENV",
    "MONGODB_URI",
    "MONGODB_DATABASE",
    "ALLOWED_ORIGINS",
    "SMTP_HOST",
    "SMTP_USERNAME",
    "SMTP_PASSWORD",
    "MAIL_SENDER_NAME",
    "MAIL_SENDER_EMAIL",
    "MAIL_NOTIFY_EMAIL",
    "LOG_LEVEL",
    "LOG_COLORED",
    "LOG_FILE",
    "SEED_ENABLED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// A clean environment whose config file is `folio.toml` in a temp dir.
/// The file holds `contents`; hold on to the returned values for the test's duration.
pub(crate) fn setup_config_file(contents: &str) -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("folio.toml");
    std::fs::write(&path, contents).unwrap();

    let mut guards: Vec<EnvGuard> = CONFIG_VARS.iter().map(|key| EnvGuard::remove(key)).collect();
    guards.push(EnvGuard::set("FOLIO_CONFIG_FILE", path_str(&path)));
    (temp, guards)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
