use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Role, Session};

#[derive(Debug, Clone)]
pub struct JwtManager {
    secret: String,
    #[cfg_attr(not(test), allow(dead_code))]
    expiry_hours: i64,
}

/// Session claims carried by the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    /// Set when an admin or reseller switched into this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_from: Option<String>,
    pub exp: i64,
    pub iat: i64,
    #[serde(rename = "type")]
    pub token_type: String, // "access"
}

impl Claims {
    pub fn session(&self) -> AppResult<Session> {
        let user_id = Uuid::parse_str(&self.sub).map_err(|_| AppError::InvalidToken)?;
        Ok(Session {
            user_id,
            username: self.username.clone(),
            role: self.role,
            created_by: self.created_by,
            logged_from: self.logged_from.clone(),
        })
    }
}

impl JwtManager {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            secret: secret.to_string(),
            expiry_hours,
        }
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<Claims> {
        verify_token(token, &self.secret)
    }
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    if token_data.claims.token_type != "access" {
        return Err(AppError::InvalidToken);
    }
    Ok(token_data.claims)
}

#[cfg(test)]
impl JwtManager {
    pub fn generate_access_token(
        &self,
        account: &crate::models::Account,
        logged_from: Option<&str>,
    ) -> AppResult<String> {
        use chrono::{Duration, Utc};
        use jsonwebtoken::{encode, EncodingKey, Header};

        let now = Utc::now();
        let exp = now + Duration::hours(self.expiry_hours);

        let claims = Claims {
            sub: account.id.to_string(),
            username: account.username.clone(),
            role: account.role,
            created_by: account.created_by,
            logged_from: logged_from.map(str::to_string),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: "access".to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to generate token: {}", e)))
    }
}
