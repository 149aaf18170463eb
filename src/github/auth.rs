//! GitHub App authentication
//!
//! Authentication happens in two steps: a short-lived RS256 JWT signed
//! with the app's private key, exchanged for a 1-hour installation
//! access token that all subsequent API calls use.
//!
//! Credentials are read from the environment exactly once and carried
//! as an explicit value, not as module-level globals.

use crate::error::{ConfigError, GithubError};
use crate::github::client::HttpClient;
use crate::github::GITHUB_API_URL;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Seconds subtracted from `iat` to absorb clock drift
const IAT_DRIFT_SECS: i64 = 60;

/// App JWT lifetime in seconds (GitHub allows at most 10 minutes)
const JWT_TTL_SECS: i64 = 9 * 60;

/// GitHub App credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    /// GitHub App ID (the `iss` claim of the app JWT)
    pub app_id: String,
    /// Installation ID the token is minted for
    pub installation_id: String,
    /// PEM-encoded RSA private key
    private_key: String,
}

/// Claims of the GitHub App JWT
#[derive(Debug, Serialize)]
struct Claims {
    iat: i64,
    exp: i64,
    iss: String,
}

/// Response body of the installation access token endpoint
#[derive(Debug, Deserialize)]
struct InstallationTokenResponse {
    token: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(
        app_id: impl Into<String>,
        installation_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            installation_id: installation_id.into(),
            private_key: private_key.into(),
        }
    }

    /// Read credentials from the environment
    ///
    /// Requires `GITHUB_APP_ID` and `GITHUB_INSTALLATION_ID`. The private
    /// key comes from `GITHUB_PRIVATE_KEY_B64` (base64-encoded, for
    /// environments that cannot hold multi-line values) or, failing
    /// that, `GITHUB_PRIVATE_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_id = require_env("GITHUB_APP_ID")?;
        let installation_id = require_env("GITHUB_INSTALLATION_ID")?;

        let private_key = if let Ok(encoded) = std::env::var("GITHUB_PRIVATE_KEY_B64") {
            let decoded = STANDARD.decode(encoded.trim()).map_err(|e| {
                ConfigError::invalid_private_key(format!("base64 decode failed: {}", e))
            })?;
            String::from_utf8(decoded).map_err(|e| {
                ConfigError::invalid_private_key(format!("decoded key is not UTF-8: {}", e))
            })?
        } else {
            std::env::var("GITHUB_PRIVATE_KEY")
                .map_err(|_| ConfigError::missing_credentials("GITHUB_PRIVATE_KEY"))?
        };

        Ok(Self::new(app_id, installation_id, private_key))
    }

    /// Create the signed app JWT for the given unix timestamp
    fn create_app_jwt(&self, now: i64) -> Result<String, GithubError> {
        let claims = Claims {
            iat: now - IAT_DRIFT_SECS,
            exp: now + JWT_TTL_SECS,
            iss: self.app_id.clone(),
        };

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| GithubError::authentication_failed(format!("invalid RSA key: {}", e)))?;

        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| GithubError::authentication_failed(format!("JWT signing failed: {}", e)))
    }

    /// Exchange the app JWT for a 1-hour installation access token
    pub async fn fetch_installation_token(&self) -> Result<String, GithubError> {
        let jwt = self.create_app_jwt(Utc::now().timestamp())?;
        let http = HttpClient::new()?
            .with_token(jwt)
            .with_accept("application/vnd.github.v3+json");

        let url = format!(
            "{}/app/installations/{}/access_tokens",
            GITHUB_API_URL, self.installation_id
        );

        let response: InstallationTokenResponse = http
            .post_json(&url, &serde_json::json!({}), "installation token")
            .await?;

        Ok(response.token)
    }
}

fn require_env(variable: &'static str) -> Result<String, ConfigError> {
    match std::env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::missing_credentials(variable)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_layout() {
        let credentials = Credentials::new("12345", "678", "key");
        let now = 1_700_000_000;
        let claims = Claims {
            iat: now - IAT_DRIFT_SECS,
            exp: now + JWT_TTL_SECS,
            iss: credentials.app_id.clone(),
        };
        assert_eq!(claims.iat, now - 60);
        assert_eq!(claims.exp, now + 540);
        assert_eq!(claims.iss, "12345");
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims {
            iat: 100,
            exp: 640,
            iss: "42".to_string(),
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"iat\":100"));
        assert!(json.contains("\"exp\":640"));
        assert!(json.contains("\"iss\":\"42\""));
    }

    #[test]
    fn test_create_app_jwt_rejects_invalid_key() {
        let credentials = Credentials::new("12345", "678", "not a pem key");
        let result = credentials.create_app_jwt(1_700_000_000);
        assert!(matches!(
            result,
            Err(GithubError::AuthenticationFailed { .. })
        ));
    }
}
