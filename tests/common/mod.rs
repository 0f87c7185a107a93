//! Common test utilities.

#![allow(dead_code)]

use std::sync::Arc;
use tokio::net::TcpListener;

use mushaf_rs::{AyahPageMap, Config, MushafServerBuilder, SurahTable};

/// Direct page data covering Al-Fatihah and the edges of Al-Baqarah.
pub const PAGE_MAP_JSON: &str = r#"[
    {"surah": 1, "ayah": 1, "page": 1},
    {"surah": 1, "ayah": 7, "page": 1},
    {"surah": 2, "ayah": 1, "page": 2},
    {"surah": 2, "ayah": 5, "page": 2},
    {"surah": 2, "ayah": 6, "page": 3},
    {"surah": 2, "ayah": 286, "page": 49}
]"#;

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Creates and starts a lenient test server on a random port.
    pub async fn start() -> Self {
        Self::start_with(false, false).await
    }

    /// Creates and starts a test server with the given options.
    pub async fn start_with(strict: bool, with_page_map: bool) -> Self {
        // Find an available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            strict,
            ..Config::default()
        };

        let mut builder = MushafServerBuilder::new().config(config);
        if with_page_map {
            let map = AyahPageMap::from_json_str(PAGE_MAP_JSON, SurahTable::standard()).unwrap();
            builder = builder.page_lookup(Arc::new(map));
        }
        let server = builder.build();
        let base_url = server.base_url();

        // Start server in background
        tokio::spawn(async move {
            server.run().await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a GET request and returns the status and JSON body.
    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    /// Posts a JSON body and returns the status and JSON body.
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> (u16, serde_json::Value) {
        let response = self.client.post(self.url(path)).json(body).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}
