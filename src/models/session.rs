use serde::{Deserialize, Serialize};

/// Role string as the backend issues it. Everything except `ADMIN`
/// behaves like a regular user.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn from_wire(s: &str) -> Role {
        if s == "ADMIN" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

/// Viewer session, decoded from the auth cookies. Only the signin
/// response ever produces one; nothing in it is computed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
    pub user_id: String,
    pub purchased: Vec<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_purchased(&self, id: &str) -> bool {
        self.purchased.iter().any(|g| g == id)
    }
}

/// `POST /api/user/signin` response.
#[derive(Debug, Deserialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: SigninUser,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninUser {
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub purchased_games: Vec<String>,
}

impl From<SigninResponse> for Session {
    fn from(resp: SigninResponse) -> Self {
        Session {
            token: resp.token,
            username: resp.user.username,
            role: Role::from_wire(&resp.user.role),
            user_id: resp.user.user_id,
            purchased: resp.user.purchased_games,
        }
    }
}
