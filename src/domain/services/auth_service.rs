use crate::domain::models::{auth::Claims, participant::Participant};
use crate::error::AppError;
use crate::config::Config;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};

pub const TOKEN_AUDIENCE: &str = "attendance-frontend";
pub const ACCESS_TOKEN_HOURS: i64 = 12;

pub struct AuthService {
    config: Config,
    encoding_key: EncodingKey,
}

impl AuthService {
    pub fn new(config: Config) -> Self {
        let encoding_key = EncodingKey::from_ed_pem(config.jwt_secret_key.as_bytes())
            .expect("Invalid JWT Private Key PEM");

        Self { config, encoding_key }
    }

    /// Issues an access token covering a whole event day plus a CSRF token
    /// the client must echo on mutating requests.
    pub fn issue_access_token(&self, participant: &Participant) -> Result<(String, String), AppError> {
        let csrf_token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect();
        let now = Utc::now();

        let claims = Claims {
            iss: self.config.auth_issuer.clone(),
            sub: participant.id.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            exp: (now + Duration::hours(ACCESS_TOKEN_HOURS)).timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            role: participant.role.clone(),
            csrf_token: csrf_token.clone(),
        };

        let access_token = encode(&Header::new(Algorithm::EdDSA), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("JWT encoding failed: {}", e);
                AppError::Internal
            })?;

        Ok((access_token, csrf_token))
    }
}
