//! Market gating and bot-group lookups.
//!
//! Both are exact-match single-row reads keyed by the pair identifier and
//! re-fetched on every iteration; nothing here is cached.

use serde::Deserialize;

use crate::chain::ChainClient;
use crate::config::Config;
use crate::constants::{ BOT_GROUPS_TABLE, MARKETS_TABLE };
use crate::error::BotResult;

/// Pause gate row from the MM contract. Extra contract fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketState {
    #[serde(default)]
    pub paused: u64,
}

impl MarketState {
    pub fn is_paused(&self) -> bool {
        self.paused != 0
    }
}

#[derive(Debug, Clone, Deserialize)]
struct BotGroupRow {
    #[serde(default)]
    bots: Vec<String>,
}

/// Advisory pause state for a pair. `None` means no gating row exists and
/// the trade may proceed.
pub async fn get_market_state(
    client: &dyn ChainClient,
    config: &Config,
    pair: &str
) -> BotResult<Option<MarketState>> {
    let rows = client.get_table_rows(
        &config.mm_contract,
        &config.mm_contract,
        MARKETS_TABLE,
        pair,
        pair,
        1
    ).await?;

    match rows.into_iter().next() {
        Some(row) => Ok(Some(serde_json::from_value(row)?)),
        None => Ok(None),
    }
}

/// Authorized bot identities for a pair. An empty group skips the iteration
/// at the call site; it is not an error here.
pub async fn get_group_bots(
    client: &dyn ChainClient,
    config: &Config,
    pair: &str
) -> BotResult<Vec<String>> {
    let rows = client.get_table_rows(
        &config.bot_group_contract,
        &config.bot_group_contract,
        BOT_GROUPS_TABLE,
        pair,
        pair,
        1
    ).await?;

    match rows.into_iter().next() {
        Some(row) => {
            let group: BotGroupRow = serde_json::from_value(row)?;
            Ok(group.bots)
        }
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Authorization;
    use async_trait::async_trait;
    use serde_json::{ json, Value };

    /// Scripted node: serves one fixed row set per table.
    struct FixtureChain {
        market_rows: Vec<Value>,
        bot_rows: Vec<Value>,
    }

    #[async_trait]
    impl ChainClient for FixtureChain {
        async fn submit_action(
            &self,
            _contract: &str,
            _action: &str,
            _args: Value,
            _authorizations: &[Authorization]
        ) -> BotResult<Value> {
            Ok(json!({}))
        }

        async fn get_table_rows(
            &self,
            _code: &str,
            _scope: &str,
            table: &str,
            _lower: &str,
            _upper: &str,
            _limit: u32
        ) -> BotResult<Vec<Value>> {
            match table {
                MARKETS_TABLE => Ok(self.market_rows.clone()),
                BOT_GROUPS_TABLE => Ok(self.bot_rows.clone()),
                _ => Ok(vec![]),
            }
        }

        async fn import_key(&self, _wallet: &str, _privkey: &str) -> BotResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn absent_market_row_fails_open() {
        let chain = FixtureChain { market_rows: vec![], bot_rows: vec![] };
        let config = Config::default();
        let state = get_market_state(&chain, &config, "flon.usdt").await.unwrap();
        assert!(state.is_none());
    }

    #[tokio::test]
    async fn paused_flag_is_non_zero() {
        let chain = FixtureChain {
            market_rows: vec![json!({ "pair": "flon.usdt", "paused": 1, "fee_bps": 30 })],
            bot_rows: vec![],
        };
        let config = Config::default();
        let state = get_market_state(&chain, &config, "flon.usdt").await.unwrap().unwrap();
        assert!(state.is_paused());

        let chain = FixtureChain {
            market_rows: vec![json!({ "pair": "flon.usdt", "paused": 0 })],
            bot_rows: vec![],
        };
        let state = get_market_state(&chain, &config, "flon.usdt").await.unwrap().unwrap();
        assert!(!state.is_paused());
    }

    #[tokio::test]
    async fn bot_group_decodes_members() {
        let chain = FixtureChain {
            market_rows: vec![],
            bot_rows: vec![json!({ "pair": "flon.usdt", "bots": ["bot1.mm", "bot2.mm"] })],
        };
        let config = Config::default();
        let bots = get_group_bots(&chain, &config, "flon.usdt").await.unwrap();
        assert_eq!(bots, vec!["bot1.mm".to_string(), "bot2.mm".to_string()]);
    }

    #[tokio::test]
    async fn missing_bot_group_is_empty() {
        let chain = FixtureChain { market_rows: vec![], bot_rows: vec![] };
        let config = Config::default();
        let bots = get_group_bots(&chain, &config, "flon.usdt").await.unwrap();
        assert!(bots.is_empty());
    }
}
