//! Chain boundary.
//!
//! The node is consumed as an opaque RPC surface: submit a signed action,
//! read table rows, import a signing key. Signing and strategy live on the
//! node and on-chain; nothing here inspects transaction internals beyond
//! passing the receipt back to the caller.

mod node;

pub use node::FlonNode;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::BotResult;

/// One entry of an action's authorization list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorization {
    pub actor: String,
    pub permission: String,
}

impl Authorization {
    pub fn new(actor: &str, permission: &str) -> Self {
        Self {
            actor: actor.to_string(),
            permission: permission.to_string(),
        }
    }
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Submit an action and return the transaction receipt. Fails on
    /// network errors, chain rejections, and signature failures.
    async fn submit_action(
        &self,
        contract: &str,
        action: &str,
        args: Value,
        authorizations: &[Authorization],
    ) -> BotResult<Value>;

    /// Read rows from a contract table. Equal `lower`/`upper` bounds with
    /// `limit` 1 give an exact-match primary-key lookup. Read-only; may
    /// return zero rows.
    async fn get_table_rows(
        &self,
        code: &str,
        scope: &str,
        table: &str,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> BotResult<Vec<Value>>;

    /// Import a signing key into the node wallet. Called once at startup;
    /// failure propagates as a startup error.
    async fn import_key(&self, wallet: &str, privkey: &str) -> BotResult<()>;
}
