//! Per-pair trading worker.
//!
//! Each configured pair runs this loop in its own task until the shared
//! shutdown flag flips. Iterations are strictly sequential within a pair
//! and no failure escapes the loop; the only exit is the flag.

use std::sync::Arc;

use chrono::Local;
use rand::Rng;
use serde_json::json;
use tokio::time::{ sleep, Duration };

use crate::chain::{ Authorization, ChainClient };
use crate::config::Config;
use crate::constants::FAST_RETRY_SECS;
use crate::error::BotResult;
use crate::logger::{ self, LogTag, PairLog };
use crate::market::{ get_group_bots, get_market_state };
use crate::shutdown::ShutdownFlag;
use crate::trace::parse_trade_outcome;
use crate::types::{ TradeOutcome, TradeParse };

/// What a single iteration did; the loop matches on this to pick the next
/// sleep.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationOutcome {
    Traded(TradeOutcome),
    NoTrade,
    EmptyBotGroup,
    MarketPaused,
}

/// Worker loop for one pair. Trade and no-trade iterations sleep the
/// randomized interval; gating skips and failures take the fast-retry
/// path. There is no retry limit.
pub async fn run_pair_worker(
    config: Arc<Config>,
    client: Arc<dyn ChainClient>,
    pair: String,
    shutdown: ShutdownFlag
) {
    let mut log = PairLog::new(&config.log_dir, &pair);
    log.info(&format!("{} worker started for {}", config.trade_action, pair));

    while !shutdown.is_requested() {
        match run_iteration(config.as_ref(), client.as_ref(), &pair, &mut log).await {
            Ok(IterationOutcome::Traded(_)) | Ok(IterationOutcome::NoTrade) => {
                let wait = pick_sleep_secs(
                    config.min_interval_seconds,
                    config.max_interval_seconds
                );
                log.info(&format!("wait for: {}s", wait));
                sleep_with_cancel(wait, &shutdown).await;
            }
            Ok(IterationOutcome::EmptyBotGroup) | Ok(IterationOutcome::MarketPaused) => {
                sleep_with_cancel(FAST_RETRY_SECS, &shutdown).await;
            }
            Err(e) => {
                log.error(&format!("{} failed for {}: {}", config.trade_action, pair, e));
                sleep_with_cancel(FAST_RETRY_SECS, &shutdown).await;
            }
        }
    }

    log.info(&format!("{} worker stopped for {}", config.trade_action, pair));
}

/// One trade attempt: resolve bots, check the gate, submit, parse, report.
pub async fn run_iteration(
    config: &Config,
    client: &dyn ChainClient,
    pair: &str,
    log: &mut PairLog
) -> BotResult<IterationOutcome> {
    // Correlation token: logged and embedded in the action args so repeated
    // submissions stay distinguishable on-chain.
    let memo = rand::thread_rng().gen::<u32>().to_string();

    let bots = get_group_bots(client, config, pair).await?;
    if bots.is_empty() {
        log.error(&format!("no bots configured for {}", pair));
        return Ok(IterationOutcome::EmptyBotGroup);
    }

    if let Some(state) = get_market_state(client, config, pair).await? {
        if state.is_paused() {
            log.info(&format!("market {} is paused", pair));
            return Ok(IterationOutcome::MarketPaused);
        }
    }

    let bot = bots[rand::thread_rng().gen_range(0..bots.len())].clone();

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    log.info(
        &format!("[{}] {}: pair={} bot={} memo={}", timestamp, config.trade_action, pair, bot, memo)
    );

    let authorizations = vec![
        Authorization::new(&config.fee_payer, &config.trade_permission),
        Authorization::new(&bot, &config.trade_permission)
    ];
    let receipt = client.submit_action(
        &config.mm_contract,
        &config.trade_action,
        json!({ "pair": pair, "memo": memo }),
        &authorizations
    ).await?;
    logger::debug(LogTag::Chain, &format!("{} receipt: {}", config.trade_action, receipt));

    match parse_trade_outcome(&receipt, &config.trade_action)? {
        TradeParse::Trade(outcome) => {
            log.info("========== Trade Result ==========");
            for line in outcome.report_lines() {
                log.info(&line);
            }
            log.info("========== End Trade ==========");
            Ok(IterationOutcome::Traded(outcome))
        }
        TradeParse::NoTrade => {
            log.info("no trade info found");
            Ok(IterationOutcome::NoTrade)
        }
    }
}

/// Uniform random integer in `[min, max]` inclusive. Swapped bounds are
/// tolerated rather than panicking the worker.
pub fn pick_sleep_secs(min: u64, max: u64) -> u64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(lo..=hi)
}

/// Sleep in one-second ticks so a shutdown request is observed within about
/// a second instead of the full interval.
pub async fn sleep_with_cancel(secs: u64, shutdown: &ShutdownFlag) {
    for _ in 0..secs {
        if shutdown.is_requested() {
            return;
        }
        sleep(Duration::from_secs(1)).await;
    }
}
