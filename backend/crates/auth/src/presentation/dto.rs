//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

use crate::application::LoginInput;

/// Login request
///
/// Both fields are optional at the wire level so a missing field produces the
/// same negative reply as a malformed one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        LoginInput {
            email: req.email,
            password: req.password,
        }
    }
}
