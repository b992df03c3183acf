use serde::{Deserialize, Serialize};

use crate::UserId;

/// Profile of the signed-in account, as returned by `/api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
}
