use std::ops::Deref;

use folio_utils::folio_version;

/// The `User-Agent` sent with every request, e.g. `folio/0.1.0`.
pub fn user_agent() -> String {
    format!("folio/{}", folio_version())
}

/// The shared HTTP client of the contact and smoke services.
///
/// Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new() -> reqwest::Result<Self> {
        reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
            .map(Self)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to build http client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_version() {
        let agent = user_agent();
        let version = agent.strip_prefix("folio/").unwrap();
        assert!(!version.is_empty());
    }

    #[test]
    fn new() {
        HttpClient::new().unwrap();
    }
}
