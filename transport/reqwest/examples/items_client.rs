//! A typed endpoint facade composed over the core client.
//!
//! Instead of subclassing, endpoint helpers are plain methods on a thin
//! wrapper that injects the shared `Client`.

use std::time::Duration;

use http::Method;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client as ReqwestClient;
use serde_json::{json, Value};
use simple_hmac_auth::{Client, Config, Credential, Error, Result};
use simple_hmac_auth_reqwest::ReqwestHttpSend;

/// Helpers for an `/items/` collection.
struct ItemsClient {
    client: Client,
}

impl ItemsClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    async fn create(&self, input: &Value) -> Result<Value> {
        self.client
            .call(Method::POST, "/items/", None, Some(input))
            .await
    }

    async fn query(&self, parameters: &[(&str, Value)]) -> Result<Value> {
        self.client
            .call(Method::GET, "/items/", Some(parameters), None)
            .await
    }

    async fn detail(&self, id: &str) -> Result<Value> {
        self.client
            .call(Method::GET, &self.item_path(id)?, None, None)
            .await
    }

    async fn update(&self, id: &str, input: &Value) -> Result<Value> {
        self.client
            .call(Method::POST, &self.item_path(id)?, None, Some(input))
            .await
    }

    async fn delete(&self, id: &str) -> Result<Value> {
        self.client
            .call(Method::DELETE, &self.item_path(id)?, None, None)
            .await
    }

    fn item_path(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(Error::request_invalid("missing 'id' parameter"));
        }

        Ok(format!(
            "/items/{}",
            utf8_percent_encode(id, NON_ALPHANUMERIC)
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // The connection timeout lives on the transport, not in the core.
    let http = ReqwestClient::builder()
        .connect_timeout(Duration::from_secs_f32(7.5))
        .build()
        .map_err(|e| Error::transport_failed(e.to_string()))?;

    let config = Config::new()
        .with_host("localhost")
        .with_port(8000)
        .with_tls(false);
    let credential = Credential::new("API_KEY").with_secret("SECRET");
    let client = Client::new(config, credential, ReqwestHttpSend::new(http))?;

    let items = ItemsClient::new(client);

    let created = items
        .create(&json!({"test": true, "created": unix_timestamp()}))
        .await?;
    println!("created: {created}");

    let listed = items.query(&[("debug", json!(true))]).await?;
    println!("items: {listed}");

    if let Some(id) = created.get("id").and_then(Value::as_str) {
        let detail = items.detail(id).await?;
        println!("detail: {detail}");

        items.update(id, &json!({"test": false})).await?;
        items.delete(id).await?;
    }

    Ok(())
}

fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs()
}
