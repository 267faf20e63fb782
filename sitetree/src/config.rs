use serde::Deserialize;

use crate::render::{DEFAULT_MAX_DEPTH, MAX_DECODABLE_DEPTH};
use crate::{Error, Result};

/// Endpoints, element ids and limits used by the viewer.
///
/// Deserializes from a JSON object in which every field is optional:
///
/// ```
/// # use sitetree::config::ViewerConfig;
/// let config = ViewerConfig::from_json(r#"{"crawl_endpoint": "/api/crawl"}"#).unwrap();
/// assert_eq!(config.crawl_endpoint, "/api/crawl");
/// assert_eq!(config.stop_endpoint, "/stop");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Form submissions are posted here.
    pub crawl_endpoint: String,
    /// The stop button posts here.
    pub stop_endpoint: String,
    pub form_id: String,
    pub stop_button_id: String,
    pub container_id: String,
    /// Deepest tree that will be rendered. At most [`MAX_DECODABLE_DEPTH`].
    pub max_depth: usize,
    /// Shown to the user once a stop request is acknowledged.
    pub stop_message: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            crawl_endpoint: "/crawl".to_string(),
            stop_endpoint: "/stop".to_string(),
            form_id: "crawl-form".to_string(),
            stop_button_id: "stop-crawl".to_string(),
            container_id: "tree-container".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            stop_message: "Crawling stopped.".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Parses a configuration, rejecting a `max_depth` deeper than a response can be decoded.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_depth > MAX_DECODABLE_DEPTH {
            return Err(Error::Config(format!(
                "max_depth {} is above {}",
                config.max_depth, MAX_DECODABLE_DEPTH
            )));
        }
        Ok(config)
    }
}
