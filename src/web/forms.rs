use serde::Deserialize;

use playvault::common::{validate_email, validate_password, validate_username};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Per-field signup errors; empty means the form may be submitted.
#[derive(Debug, Default, Clone)]
pub struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupErrors> {
        let errors = SignupErrors {
            username: validate_username(&self.username).err(),
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub created: Option<String>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchPageQuery {
    pub query: Option<String>,
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct LiveSearchQuery {
    pub q: Option<String>,
}
