//! Basic-auth credentials for the CUBE API.
//!
//! CUBE authenticates every request with HTTP basic auth; there is no session
//! or token exchange. The password is held in a [`SecretString`] and exposed
//! only at the request call site.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username/password pair applied to every CUBE request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Attach basic auth to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak_password() {
        let credentials =
            Credentials::new("chris", SecretString::new("chris1234".to_string().into()));
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("chris"));
        assert!(!debug.contains("chris1234"));
    }
}
