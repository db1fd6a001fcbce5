use serde::Deserialize;

use matchday_core::league::{AdminRole, Error};

const MIN_PASSWORD_LEN: usize = 6;

fn validate_email(email: &str) -> Result<(), Error> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(Error::Validation("a valid email is required".to_string()));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), Error> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Request payload for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Request payload for admin registration.
#[derive(Debug, Deserialize)]
pub struct RegisterAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterAdmin {
    pub fn validate(&self) -> Result<AdminRole, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        self.role.parse::<AdminRole>().map_err(Error::Validation)
    }
}

/// Request payload for user and admin login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), Error> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_user_requires_valid_email() {
        let payload = RegisterUser {
            name: "ada".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(matches!(payload.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_register_user_requires_password_length() {
        let payload = RegisterUser {
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(matches!(payload.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_register_admin_parses_role() {
        let payload = RegisterAdmin {
            name: "root".to_string(),
            email: "root@example.com".to_string(),
            password: "secret1".to_string(),
            role: "Super".to_string(),
        };
        assert_eq!(payload.validate().unwrap(), AdminRole::Super);
    }

    #[test]
    fn test_register_admin_rejects_unknown_role() {
        let payload = RegisterAdmin {
            name: "root".to_string(),
            email: "root@example.com".to_string(),
            password: "secret1".to_string(),
            role: "god".to_string(),
        };
        assert!(matches!(payload.validate(), Err(Error::Validation(_))));
    }
}
