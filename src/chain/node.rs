//! HTTP client for the FLON node API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{ json, Value };
use std::time::Duration;

use super::{ Authorization, ChainClient };
use crate::constants::NODE_HTTP_TIMEOUT_SECS;
use crate::error::{ BotError, BotResult };
use crate::logger::{ self, LogTag };

pub struct FlonNode {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl FlonNode {
    /// Build a client for the first configured endpoint.
    pub fn new(node_urls: &[String]) -> BotResult<Self> {
        let base_url = node_urls
            .first()
            .ok_or_else(|| BotError::Config("no node URL configured".to_string()))?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::new(),
            base_url,
            timeout: Duration::from_secs(NODE_HTTP_TIMEOUT_SECS),
        })
    }

    async fn post(&self, path: &str, body: Value) -> BotResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        logger::debug(LogTag::Chain, &format!("POST {}", url));

        let response = self.client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Http(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BotError::Rpc(format!("node error {} on {}: {}", status, path, error_text)));
        }

        response
            .json::<Value>().await
            .map_err(|e| BotError::Http(format!("failed to decode {} response: {}", path, e)))
    }
}

#[async_trait]
impl ChainClient for FlonNode {
    async fn submit_action(
        &self,
        contract: &str,
        action: &str,
        args: Value,
        authorizations: &[Authorization],
    ) -> BotResult<Value> {
        let body = json!({
            "account": contract,
            "name": action,
            "args": args,
            "authorizations": authorizations,
        });
        self.post("/v1/chain/push_action", body).await
    }

    async fn get_table_rows(
        &self,
        code: &str,
        scope: &str,
        table: &str,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> BotResult<Vec<Value>> {
        let body = json!({
            "json": true,
            "code": code,
            "scope": scope,
            "table": table,
            "lower_bound": lower,
            "upper_bound": upper,
            "limit": limit,
        });
        let result = self.post("/v1/chain/get_table_rows", body).await?;
        let rows = result
            .get("rows")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(rows)
    }

    async fn import_key(&self, wallet: &str, privkey: &str) -> BotResult<()> {
        self.post("/v1/wallet/import_key", json!([wallet, privkey])).await?;
        Ok(())
    }
}
