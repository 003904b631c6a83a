use scio::api::{ApiClient, ApiError, HttpApiClient};
use scio::data::{BlacklistResponse, BlacklistsResponse};

/// The main API client for the Scio application, providing methods to
/// interact with the backend API.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    /// Fetches the exclusion list for one event.
    pub async fn fetch_blacklist(&self, event: &str) -> Result<BlacklistResponse, ApiError> {
        self.client
            .get(&format!("/report/blacklist?event={event}"))
            .await
    }

    /// Fetches every stored exclusion list, keyed by event name.
    pub async fn fetch_blacklists(&self) -> Result<BlacklistsResponse, ApiError> {
        self.client.get("/report/blacklist").await
    }
}

/// Create a new instance of the API client with the default base URL.
pub fn create() -> Api {
    Api::new("http://localhost:3030/api")
}
