use thiserror::Error;

/// Errors that can occur while fetching or decoding meals
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport failure: unreachable host, connection reset, timeout
    #[error("Failed to fetch URL: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    /// The response body was not valid JSON or did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl RecipeError {
    /// True for transport-level failures (including non-2xx responses)
    pub fn is_network(&self) -> bool {
        matches!(self, RecipeError::Network(_) | RecipeError::HttpStatus { .. })
    }

    /// True for malformed documents, including missing required fields
    pub fn is_decode(&self) -> bool {
        matches!(self, RecipeError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let status = RecipeError::HttpStatus {
            status: 503,
            url: "http://localhost/filter.php".to_string(),
        };
        assert!(status.is_network());
        assert!(!status.is_decode());

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode = RecipeError::from(json);
        assert!(decode.is_decode());
        assert!(!decode.is_network());

        assert!(!RecipeError::Builder("x".to_string()).is_network());
    }

    #[test]
    fn test_display() {
        let err = RecipeError::HttpStatus {
            status: 404,
            url: "http://localhost/lookup.php".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost/lookup.php failed with status 404"
        );
    }
}
