// Authentication: configured credentials, password hashing and tokens

pub mod credentials;
pub mod jwt;
pub mod password;

use serde::{Deserialize, Serialize};

pub use credentials::Credentials;

/// Privilege level of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}
