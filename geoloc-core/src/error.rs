use thiserror::Error;

/// Known, user-facing reasons a single location could not be resolved.
///
/// The `Display` output of each variant is the exact message reported for
/// that entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(
        "Please pass an input. Invalid input format. Provide a valid city, state (e.g., \"Madison, WI\") or a valid zip code (e.g., \"12345\")."
    )]
    NoInput,

    #[error(
        "{input}: Invalid input format. Please provide a valid city, state (e.g., \"Madison, WI\") or a valid zip code (e.g., \"12345\")."
    )]
    InvalidFormat { input: String },

    #[error("{input}: {country} is different country than US. Please use a place within in US")]
    CountryMismatch { input: String, country: String },

    #[error("Error: {status} - {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("API Error: {code}: {message}")]
    Api { code: String, message: String },
}

/// Failure of a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-200 response without a structured provider error body.
    #[error("provider responded with {status} {reason}")]
    Status { status: u16, reason: String },

    /// Structured `{ "cod": ..., "message": ... }` error body.
    #[error("provider error {code}: {message}")]
    Api { code: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_message_lists_both_formats() {
        let msg = ResolveError::NoInput.to_string();
        assert!(msg.starts_with("Please pass an input."));
        assert!(msg.contains("\"Madison, WI\""));
        assert!(msg.contains("\"12345\""));
    }

    #[test]
    fn invalid_format_is_prefixed_with_input() {
        let err = ResolveError::InvalidFormat {
            input: "5656575478493".into(),
        };
        assert_eq!(
            err.to_string(),
            "5656575478493: Invalid input format. Please provide a valid city, state (e.g., \"Madison, WI\") or a valid zip code (e.g., \"12345\")."
        );
    }

    #[test]
    fn country_mismatch_names_country() {
        let err = ResolveError::CountryMismatch {
            input: "Ispir, Turkey".into(),
            country: "TR".into(),
        };
        assert_eq!(
            err.to_string(),
            "Ispir, Turkey: TR is different country than US. Please use a place within in US"
        );
    }

    #[test]
    fn http_and_api_messages() {
        let status = ResolveError::HttpStatus {
            status: 502,
            reason: "Bad Gateway".into(),
        };
        assert_eq!(status.to_string(), "Error: 502 - Bad Gateway");

        let api = ResolveError::Api {
            code: "404".into(),
            message: "city not found".into(),
        };
        assert_eq!(api.to_string(), "API Error: 404: city not found");
    }
}
