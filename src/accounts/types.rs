use dashmap::DashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub mobile_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub mobile_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub mobile_number: Option<String>,
}

/// In-memory user records, keyed by email.
pub struct UserDirectory {
    users: DashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.users.get(email).map(|u| u.value().clone())
    }

    pub fn upsert(&self, user: User) {
        self.users.insert(user.email.clone(), user);
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
