//! Application configuration loaded from environment variables.

/// Web front-end configuration, wrapping the pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Site name shown in page titles and the footer.
    pub site_name: String,

    /// Pipeline configuration (provider credentials and endpoints).
    pub pipeline: mantra_pipeline::Config,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `MANTRA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `MANTRA_SITE_NAME`: Site name (default: "Mantra")
    ///
    /// Pipeline variables (`UNSPLASH_ACCESS_KEY`, `CLOUDINARY_*`, ...) are
    /// documented on [`mantra_pipeline::Config::from_env`].
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("MANTRA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let site_name = std::env::var("MANTRA_SITE_NAME").unwrap_or_else(|_| "Mantra".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            site_name = %site_name,
            "web configuration loaded"
        );

        Self {
            bind_addr,
            site_name,
            pipeline: mantra_pipeline::Config::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "MANTRA_BIND_ADDR",
        "MANTRA_SITE_NAME",
        "AFFIRMATION_API_URL",
        "UNSPLASH_ACCESS_KEY",
        "CLOUDINARY_CLOUD_NAME",
        "CLOUDINARY_API_KEY",
        "CLOUDINARY_API_SECRET",
        "CLOUDINARY_UPLOAD_PRESET",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.site_name, "Mantra");
            assert!(config.pipeline.photo_access_key.is_empty());
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("MANTRA_BIND_ADDR", "127.0.0.1:9090"),
                ("MANTRA_SITE_NAME", "Daily Boost"),
                ("UNSPLASH_ACCESS_KEY", "test-key"),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.site_name, "Daily Boost");
                assert_eq!(config.pipeline.photo_access_key, "test-key");
            },
        );
    }
}
