use super::password::{hash_password, verify_password, MAX_PASSWORD_BYTES};
use super::Role;

/// The two shared passwords guarding the service
///
/// Only bcrypt hashes are kept in memory; the plaintext secrets come from
/// configuration and are dropped after startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    user_hash: String,
    admin_hash: String,
}

impl Credentials {
    /// Hashes the configured user and admin passwords
    ///
    /// # Example
    /// ```
    /// use roster_api::auth::{Credentials, Role};
    ///
    /// let credentials = Credentials::from_plaintext("user-pw", "admin-pw", 4).unwrap();
    /// assert_eq!(credentials.authenticate("admin-pw"), Some(Role::Admin));
    /// assert_eq!(credentials.authenticate("nope"), None);
    /// ```
    pub fn from_plaintext(user_password: &str, admin_password: &str, cost: u32) -> Result<Self, String> {
        if user_password.is_empty() || admin_password.is_empty() {
            return Err("Passwords cannot be empty".to_string());
        }
        if user_password.len() > MAX_PASSWORD_BYTES || admin_password.len() > MAX_PASSWORD_BYTES {
            return Err(format!(
                "Passwords cannot be longer than {} bytes",
                MAX_PASSWORD_BYTES
            ));
        }
        if user_password == admin_password {
            return Err("User and admin passwords must differ".to_string());
        }

        Ok(Self {
            user_hash: hash_password(user_password, cost)?,
            admin_hash: hash_password(admin_password, cost)?,
        })
    }

    /// Resolves a submitted password to the role it grants
    ///
    /// The admin password is checked first.
    pub fn authenticate(&self, password: &str) -> Option<Role> {
        if self.is_admin_password(password) {
            Some(Role::Admin)
        } else if matches(password, &self.user_hash) {
            Some(Role::User)
        } else {
            None
        }
    }

    pub fn is_admin_password(&self, password: &str) -> bool {
        matches(password, &self.admin_hash)
    }
}

fn matches(password: &str, hash: &str) -> bool {
    if password.len() > MAX_PASSWORD_BYTES {
        return false;
    }
    verify_password(password, hash).unwrap_or_else(|e| {
        tracing::error!("Password verification failed: {}", e);
        false
    })
}
