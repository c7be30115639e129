use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A movie shown in the browse section; each entry gets a rating form and a
/// watchlist button.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieEntry {
    pub id: u32,
    pub title: String,
}

/// Site configuration loaded from YAML; everything has a default so the
/// client runs without a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub movies: Vec<MovieEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            movies: vec![
                MovieEntry {
                    id: 1,
                    title: "The Long Night".to_string(),
                },
                MovieEntry {
                    id: 2,
                    title: "Paper Cities".to_string(),
                },
                MovieEntry {
                    id: 3,
                    title: "Second Harvest".to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
        serde_yaml::from_str(&text).map_err(|err| format!("cannot parse {}: {err}", path.display()))
    }

    /// Join a form action onto the configured base URL.
    pub fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            action.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SiteConfig;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let config = SiteConfig {
            base_url: "http://localhost:8080/".to_string(),
            movies: Vec::new(),
        };
        assert_eq!(config.endpoint("/rate"), "http://localhost:8080/rate");
        assert_eq!(config.endpoint("rate"), "http://localhost:8080/rate");
    }

    #[test]
    fn yaml_with_partial_keys_falls_back_to_defaults() {
        let config: SiteConfig =
            serde_yaml::from_str("base_url: http://movies.test\n").expect("parse");
        assert_eq!(config.base_url, "http://movies.test");
        assert!(!config.movies.is_empty());
    }
}
