//! Account registration, login, and bearer-token issuance.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use matchday_core::league::{Admin, Error, User};
use matchday_core::storage::{AdminRepository, UserRepository};

use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, RegisterAdmin, RegisterUser};

/// What a token authorizes: regular reads, or administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenScope {
    User,
    Admin,
}

/// Bearer-token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub scope: TokenScope,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Registration and login for users and admins.
///
/// Passwords are stored as salted SHA-256 digests; tokens are HS256
/// JWTs carrying the account id and scope.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    admins: Arc<dyn AdminRepository>,
    secret: String,
    issuer: String,
    expiry: Duration,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        admins: Arc<dyn AdminRepository>,
        secret: impl Into<String>,
        issuer: impl Into<String>,
        expiry: Duration,
    ) -> Self {
        Self {
            users,
            admins,
            secret: secret.into(),
            issuer: issuer.into(),
            expiry,
        }
    }

    /// Registers a user and returns it with a fresh token.
    pub async fn register_user(&self, payload: RegisterUser) -> ApiResult<(User, String)> {
        payload.validate()?;

        let email = payload.email.to_lowercase();
        if self
            .users
            .get_user_by_email(&email)
            .await
            .map_err(Error::from)?
            .is_some()
        {
            return Err(Error::Conflict("User already exists".to_string()).into());
        }

        let user = User::new(payload.name, email, hash_password(&payload.password));
        self.users.create_user(&user).await.map_err(Error::from)?;

        tracing::debug!(user_id = %user.id, "User registered");
        let token = self.issue(user.id, TokenScope::User)?;
        Ok((user, token))
    }

    /// Logs a user in, returning the account and a fresh token.
    pub async fn login_user(&self, payload: Credentials) -> ApiResult<(User, String)> {
        payload.validate()?;

        let email = payload.email.to_lowercase();
        let user = self
            .users
            .get_user_by_email(&email)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::NotFound("Invalid login credentials".to_string()))?;

        if !verify_password(&payload.password, &user.password_hash) {
            return Err(ApiError::unauthorized("Invalid login credentials"));
        }

        let token = self.issue(user.id, TokenScope::User)?;
        Ok((user, token))
    }

    /// Registers an admin and returns it with a fresh token.
    pub async fn register_admin(&self, payload: RegisterAdmin) -> ApiResult<(Admin, String)> {
        let role = payload.validate()?;

        let email = payload.email.to_lowercase();
        if self
            .admins
            .get_admin_by_email(&email)
            .await
            .map_err(Error::from)?
            .is_some()
        {
            return Err(Error::Conflict("Email already exists".to_string()).into());
        }

        let admin = Admin::new(payload.name, email, role, hash_password(&payload.password));
        self.admins.create_admin(&admin).await.map_err(Error::from)?;

        tracing::debug!(admin_id = %admin.id, role = ?admin.role, "Admin registered");
        let token = self.issue(admin.id, TokenScope::Admin)?;
        Ok((admin, token))
    }

    /// Logs an admin in, returning the account and a fresh token.
    pub async fn login_admin(&self, payload: Credentials) -> ApiResult<(Admin, String)> {
        payload.validate()?;

        let email = payload.email.to_lowercase();
        let admin = self
            .admins
            .get_admin_by_email(&email)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::NotFound("Invalid login credentials".to_string()))?;

        if !verify_password(&payload.password, &admin.password_hash) {
            return Err(ApiError::unauthorized("Invalid login credentials"));
        }

        let token = self.issue(admin.id, TokenScope::Admin)?;
        Ok((admin, token))
    }

    /// Signs a token for the given account and scope.
    pub fn issue(&self, sub: Uuid, scope: TokenScope) -> ApiResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub,
            scope,
            iss: self.issuer.clone(),
            iat,
            exp: iat + self.expiry.as_secs() as i64,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| Error::Dependency(format!("token signing failed: {err}")).into())
    }

    /// Verifies a token against the required scope.
    ///
    /// Admin tokens satisfy the user scope; the reverse does not hold.
    pub fn verify(&self, token: &str, required: TokenScope) -> ApiResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| ApiError::unauthorized("invalid token"))?;

        if required == TokenScope::Admin && data.claims.scope != TokenScope::Admin {
            return Err(ApiError::unauthorized("admin access required"));
        }

        Ok(data.claims)
    }
}

/// Hashes a password with a random 16-byte salt.
///
/// Stored form: `<salt-hex>$<sha256(salt || password)-hex>`.
fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let digest = Sha256::new()
        .chain_update(salt)
        .chain_update(password.as_bytes())
        .finalize();
    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Checks a password against its stored salted digest.
fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let digest = Sha256::new()
        .chain_update(&salt)
        .chain_update(password.as_bytes())
        .finalize();
    hex::encode(digest) == digest_hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    fn service() -> AuthService {
        let repo = Arc::new(InMemoryRepository::new());
        AuthService::new(
            repo.clone(),
            repo,
            "test-secret",
            "matchday",
            Duration::from_secs(3_600),
        )
    }

    fn register_payload(email: &str) -> RegisterUser {
        RegisterUser {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let stored = hash_password("secret1");
        assert!(verify_password("secret1", &stored));
        assert!(!verify_password("secret2", &stored));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        assert_ne!(hash_password("secret1"), hash_password("secret1"));
    }

    #[test]
    fn test_verify_rejects_malformed_stored_value() {
        assert!(!verify_password("secret1", "no-separator"));
        assert!(!verify_password("secret1", "zzzz$deadbeef"));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        let (user, _) = service
            .register_user(register_payload("Ada@Example.com"))
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");

        let (logged_in, token) = service
            .login_user(Credentials {
                email: "ADA@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);

        let claims = service.verify(&token, TokenScope::User).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.scope, TokenScope::User);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let service = service();
        service
            .register_user(register_payload("ada@example.com"))
            .await
            .unwrap();

        let result = service
            .register_user(register_payload("ada@example.com"))
            .await;
        assert!(matches!(
            result,
            Err(ApiError::League(Error::Conflict(_)))
        ));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let service = service();
        service
            .register_user(register_payload("ada@example.com"))
            .await
            .unwrap();

        let result = service
            .login_user(Credentials {
                email: "ada@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_user_token_cannot_claim_admin_scope() {
        let service = service();
        let (_user, token) = service
            .register_user(register_payload("ada@example.com"))
            .await
            .unwrap();

        assert!(service.verify(&token, TokenScope::User).is_ok());
        assert!(matches!(
            service.verify(&token, TokenScope::Admin),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_admin_token_satisfies_user_scope() {
        let service = service();
        let (_, token) = service
            .register_admin(RegisterAdmin {
                name: "Root".to_string(),
                email: "root@example.com".to_string(),
                password: "secret1".to_string(),
                role: "root".to_string(),
            })
            .await
            .unwrap();

        assert!(service.verify(&token, TokenScope::Admin).is_ok());
        assert!(service.verify(&token, TokenScope::User).is_ok());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let token = service.issue(Uuid::new_v4(), TokenScope::Admin).unwrap();
        let tampered = format!("{}x", token);

        assert!(matches!(
            service.verify(&tampered, TokenScope::Admin),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
