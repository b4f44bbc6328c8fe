use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the market API deployments the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public market data API.
    #[default]
    Production,
    /// A custom API base URL, e.g. a local stub for development.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the market API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => "https://api.coingecko.com/api/v3".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Resolves the environment from the `TOKENDASH_API_URL` variable, if
    /// set. The value goes through the same parsing as any environment
    /// string, so anything but an http(s) URL falls back to production.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var("TOKENDASH_API_URL").ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "production" => Ok(Environment::Production),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!("".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_parse_custom_url() {
        let env = "http://localhost:9000/api".parse::<Environment>().unwrap();
        assert_eq!(env.api_url(), "http://localhost:9000/api");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-url".parse::<Environment>().is_err());
    }

    #[test]
    // The environment variable gets the same validation as any other
    // environment string: malformed values fall back to production.
    fn test_env_value_is_validated() {
        assert_eq!(
            Environment::from_env_value(Some("not-a-url")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_env_value(Some("  ")),
            Environment::Production
        );
        assert_eq!(Environment::from_env_value(None), Environment::Production);
        assert_eq!(
            Environment::from_env_value(Some("http://localhost:9000")),
            Environment::Custom {
                api_url: "http://localhost:9000".to_string()
            }
        );
    }
}
