use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem layout and collaborator flags for the local backend.
///
/// The defaults reproduce the process-relative layout the surrounding
/// system expects; tests inject temporary directories instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root for access-controlled objects.
    pub private_root: PathBuf,
    /// Root for openly servable objects.
    pub public_root: PathBuf,
    /// Run the vector optimizer on `.svg` sources before ingest.
    pub optimize_svg: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            private_root: PathBuf::from("./store/private"),
            public_root: PathBuf::from("./store/public"),
            optimize_svg: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roots() {
        let config = StoreConfig::default();
        assert_eq!(config.private_root, PathBuf::from("./store/private"));
        assert_eq!(config.public_root, PathBuf::from("./store/public"));
        assert!(!config.optimize_svg);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"public_root": "/srv/docs/public"}"#).unwrap();
        assert_eq!(config.public_root, PathBuf::from("/srv/docs/public"));
        assert_eq!(config.private_root, PathBuf::from("./store/private"));
    }
}
