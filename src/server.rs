//! HTTP server for the mapping service.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::MushafResult;
use crate::pages::{AyahPageMap, PageCalculator, PageLookup};
use crate::router::{create_router, AppState};
use crate::table::SurahTable;

/// Mapping service server.
pub struct MushafServer {
    config: Arc<Config>,
    calculator: Arc<PageCalculator>,
}

impl MushafServer {
    /// Creates a server that estimates pages from the reference table only.
    pub fn new(config: Config) -> Self {
        Self::with_calculator(config, PageCalculator::standard())
    }

    /// Creates a server with a custom calculator.
    pub fn with_calculator(config: Config, calculator: PageCalculator) -> Self {
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Creates a server, loading the page map named in the configuration.
    pub fn from_config(config: Config) -> MushafResult<Self> {
        let table = SurahTable::standard();
        let mut calculator = PageCalculator::new(table);
        if let Some(path) = &config.page_map {
            let map = AyahPageMap::load(path, table)?;
            calculator = calculator.with_page_lookup(Arc::new(map));
        }
        Ok(Self::with_calculator(config, calculator))
    }

    /// Returns the router with middleware applied.
    pub fn router(&self) -> Router {
        let state = AppState {
            config: self.config.clone(),
            calculator: self.calculator.clone(),
        };

        create_router(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;

        self.calculator.table().validate()?;
        let app = self.router();

        info!("Mushaf mapping service is starting at http://{}", addr);
        info!(
            "Reference table: {} surahs, direct page data: {}, strict: {}",
            self.calculator.table().len(),
            if self.calculator.has_page_lookup() { "yes" } else { "no" },
            self.config.strict
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL for the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

/// Builder for creating a mapping server.
pub struct MushafServerBuilder {
    config: Config,
    page_lookup: Option<Arc<dyn PageLookup>>,
}

impl MushafServerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            page_lookup: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the service port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enables strict range validation.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Sets the direct ayah-to-page source.
    pub fn page_lookup(mut self, lookup: Arc<dyn PageLookup>) -> Self {
        self.page_lookup = Some(lookup);
        self
    }

    /// Builds the server.
    pub fn build(self) -> MushafServer {
        let mut calculator = PageCalculator::standard();
        if let Some(lookup) = self.page_lookup {
            calculator = calculator.with_page_lookup(lookup);
        }
        MushafServer::with_calculator(self.config, calculator)
    }
}

impl Default for MushafServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
