//! User account models

use serde::{Deserialize, Serialize};

/// Account as returned by registration and `/user/get-user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID
    pub user_id: String,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
