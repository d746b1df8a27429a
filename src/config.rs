use std::env;
use std::path::PathBuf;

const DEFAULT_REMOTE_URL: &str = "https://storage.docdrop.dev";

/// Runtime configuration, read once at startup.
pub struct Config {
    pub remote_base_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let remote_base_url =
            env::var("DOCDROP_REMOTE_URL").unwrap_or_else(|_| DEFAULT_REMOTE_URL.to_string());
        let data_dir = env::var("DOCDROP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("docdrop")
            });

        Self {
            remote_base_url,
            data_dir,
        }
    }

    /// Key-value file holding the persisted selection.
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join("ledger.json")
    }

    /// Private working directory files are copied into before transfer.
    pub fn staging_dir(&self) -> PathBuf {
        self.data_dir.join("staging")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_data_dir() {
        let config = Config {
            remote_base_url: DEFAULT_REMOTE_URL.to_string(),
            data_dir: PathBuf::from("/data/docdrop"),
        };
        assert_eq!(config.ledger_path(), PathBuf::from("/data/docdrop/ledger.json"));
        assert_eq!(config.staging_dir(), PathBuf::from("/data/docdrop/staging"));
    }
}
