pub mod mock;

use anyhow::Context;
use api::{Config, telemetry};
use payloads::{Item, requests};
use reqwest::Url;

pub struct TestApp {
    pub port: u16,
    /// e.g. `http://127.0.0.1:41234`
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for a path on the app, e.g. `/api/items`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    /// The app's address, for resolving relative request URLs.
    pub fn base_url(&self) -> Url {
        Url::parse(&self.address).expect("app address is a valid URL")
    }

    /// Create an item directly through the api.
    pub async fn create_item(&self, name: &str) -> anyhow::Result<Item> {
        let details = requests::CreateItem { name: name.into() };
        let response = self
            .client
            .post(self.url("/api/items"))
            .json(&details)
            .send()
            .await?
            .error_for_status()
            .context("Failed to create item")?;
        Ok(response.json().await?)
    }

    pub async fn list_items(&self) -> anyhow::Result<Vec<Item>> {
        let response = self
            .client
            .get(self.url("/api/items"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    // Only the first app in a test binary installs it
    let _ = telemetry::init_subscriber(telemetry::get_test_subscriber("error"));

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = api::build(&mut config).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        address: format!("http://127.0.0.1:{}", config.port),
        client: reqwest::Client::new(),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// An address nothing is listening on.
pub fn unreachable_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
