//! Stubbed backend client
//!
//! There is no real backend: requests run on background threads against the
//! built-in demo catalog with a simulated latency, and report back through
//! an mpsc channel drained by the main event loop. The channel protocol is
//! the only part a real implementation would keep.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config_file::ClientConfig;
use crate::types::{OrderId, Product};

/// Messages sent from request threads to the main UI thread
#[derive(Debug)]
pub enum ApiMessage {
    /// Product listing finished loading
    Products(Vec<Product>),
    /// The backend accepted a submitted order
    OrderAccepted(OrderId),
    /// A request failed
    Error(String),
}

/// Handle for issuing stubbed backend requests
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    latency: Duration,
}

impl ApiClient {
    /// Simulated round-trip latency for stubbed requests
    const STUB_LATENCY: Duration = Duration::from_millis(350);

    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            latency: Self::STUB_LATENCY,
        }
    }

    /// Zero-latency client for tests
    #[allow(dead_code)] // API: used by integration tests
    pub fn immediate(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            latency: Duration::ZERO,
        }
    }

    /// Fetch the product listing in the background
    pub fn fetch_products(&self, tx: Sender<ApiMessage>) {
        let base_url = self.base_url.clone();
        let latency = self.latency;
        thread::spawn(move || {
            debug!(%base_url, "fetching product listing (stub)");
            thread::sleep(latency);

            let catalog = Catalog::demo();
            match catalog.validate() {
                Ok(()) => {
                    info!(count = catalog.products.len(), "product listing loaded");
                    // A closed receiver means the app is shutting down
                    let _ = tx.send(ApiMessage::Products(catalog.products));
                }
                Err(e) => {
                    warn!(error = %e, "product listing rejected");
                    let _ = tx.send(ApiMessage::Error(format!("Catalog rejected: {e}")));
                }
            }
        });
    }

    /// Submit a placed order in the background
    pub fn submit_order(&self, order_id: OrderId, tx: Sender<ApiMessage>) {
        let base_url = self.base_url.clone();
        let latency = self.latency;
        thread::spawn(move || {
            debug!(%base_url, %order_id, "submitting order (stub)");
            thread::sleep(latency);

            info!(%order_id, "order accepted");
            let _ = tx.send(ApiMessage::OrderAccepted(order_id));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_fetch_products_reports_catalog() {
        let config = ClientConfig::default();
        let client = ApiClient::immediate(&config);
        let (tx, rx) = mpsc::channel();

        client.fetch_products(tx);
        match rx.recv_timeout(Duration::from_secs(2)).expect("message") {
            ApiMessage::Products(products) => assert!(!products.is_empty()),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_submit_order_echoes_id() {
        let config = ClientConfig::default();
        let client = ApiClient::immediate(&config);
        let (tx, rx) = mpsc::channel();

        let id = OrderId::new();
        client.submit_order(id, tx);
        match rx.recv_timeout(Duration::from_secs(2)).expect("message") {
            ApiMessage::OrderAccepted(accepted) => assert_eq!(accepted, id),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
