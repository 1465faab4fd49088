use crate::types::LoginResponse;
use crate::Error;

use super::common::{ParamList, Params, Request, Resource};

/// Credential exchange for a session cookie. The only request that responds
/// in XML, carries no `TYPE` tag, and is never sent with a cookie.
#[derive(Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Request for LoginRequest {
    type Response = LoginResponse;
    const RESOURCE: Resource = Resource::Login;

    fn params(&self) -> Result<Params, Error> {
        let mut params = ParamList::bare();
        params.push_required("USERNAME", "username", &self.username)?;
        params.push_required("PASSWORD", "password", &self.password)?;
        params.push("XML", "1");
        Ok(params.into_params())
    }
}
