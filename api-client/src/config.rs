pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2302-ACC-PT-WEB-PT-A";

/// Where the players API lives.
///
/// A browser has no process environment, so overrides are baked in at build
/// time through `PUPPY_BOWL_API_ROOT` and `PUPPY_BOWL_COHORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_root: String,
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_root: String::from(DEFAULT_API_ROOT),
            cohort: String::from(DEFAULT_COHORT),
        }
    }
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_root: option_env!("PUPPY_BOWL_API_ROOT")
                .unwrap_or(DEFAULT_API_ROOT)
                .to_string(),
            cohort: option_env!("PUPPY_BOWL_COHORT")
                .unwrap_or(DEFAULT_COHORT)
                .to_string(),
        }
    }

    /// `{api_root}/{cohort}` without doubled or trailing slashes.
    pub fn base_url(&self) -> String {
        let root = self.api_root.trim_end_matches('/');
        let cohort = self.cohort.trim_matches('/');

        if cohort.is_empty() {
            root.to_string()
        } else {
            format!("{root}/{cohort}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        assert_eq!(
            ApiConfig::default().base_url(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2302-ACC-PT-WEB-PT-A"
        );
    }

    #[test]
    fn slashes_are_normalized() {
        let config = ApiConfig {
            api_root: String::from("http://localhost:3001/api/"),
            cohort: String::from("/demo/"),
        };
        assert_eq!(config.base_url(), "http://localhost:3001/api/demo");

        let config = ApiConfig {
            api_root: String::from("http://localhost:3001"),
            cohort: String::new(),
        };
        assert_eq!(config.base_url(), "http://localhost:3001");
    }
}
