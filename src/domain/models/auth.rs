use serde::{Deserialize, Serialize};

use crate::domain::models::qr::QrPayload;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
    pub role: String,
    pub csrf_token: String,
}

/// The authenticated caller, decoded from the access-token cookie and
/// threaded explicitly into each handler.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub csrf_token: String,
    pub qr_data: Option<QrPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: UserProfile,
}
