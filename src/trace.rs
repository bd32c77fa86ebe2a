//! Transaction-trace parsing.
//!
//! A trade receipt carries a fixed two-slot inline contract under the trade
//! action: slot 0 is the swap trace whose own inlines hold the router
//! transfer, slot 1 is the bot/side report. Only those two slots are ever
//! inspected; this is not a generic tree walk.

use serde_json::Value;

use crate::constants::{ SWAP_MEMO_PREFIX, SWAP_ROUTER_ACCOUNT };
use crate::error::{ BotError, BotResult };
use crate::types::{ format_price, Quantity, Side, TradeOutcome, TradeParse };

/// Scan a submission receipt for the executed trade. Shape mismatches give
/// `NoTrade`; a matching transfer whose amounts fail to parse is an error.
pub fn parse_trade_outcome(receipt: &Value, trade_action: &str) -> BotResult<TradeParse> {
    let traces = match
        receipt
            .get("processed")
            .and_then(|p| p.get("action_traces"))
            .and_then(Value::as_array)
    {
        Some(traces) => traces,
        None => {
            return Ok(TradeParse::NoTrade);
        }
    };

    // First matching top-level trade action wins; at most one outcome per
    // receipt.
    let trade = traces
        .iter()
        .find(|trace| action_name(trace) == Some(trade_action));
    let trade = match trade {
        Some(trade) => trade,
        None => {
            return Ok(TradeParse::NoTrade);
        }
    };

    let inlines = match trade.get("inline_traces").and_then(Value::as_array) {
        Some(inlines) if inlines.len() >= 2 => inlines,
        _ => {
            return Ok(TradeParse::NoTrade);
        }
    };

    // Slot 1: bot/side report. Missing fields degrade to empty strings.
    let report = act_data(&inlines[1]);
    let bot = field_str(report, "bot");
    let side = Side::from_report(&field_str(report, "side"));

    // Slot 0: the swap. Its inlines carry the router transfer naming both
    // legs of the executed swap.
    let transfer = inlines[0]
        .get("inline_traces")
        .and_then(Value::as_array)
        .and_then(|swap_inlines| swap_inlines.iter().find(|inline| is_router_transfer(inline)));
    let transfer = match transfer {
        Some(transfer) => transfer,
        None => {
            return Ok(TradeParse::NoTrade);
        }
    };

    let data = act_data(transfer);
    let input: Quantity = field_str(data, "quantity").parse()?;
    let output = parse_memo_output(&field_str(data, "memo"))?;

    let out_per_in = if input.amount > 0.0 { output.amount / input.amount } else { 0.0 };
    let in_per_out = if output.amount > 0.0 { input.amount / output.amount } else { 0.0 };

    // "price" is normalized to quote-per-base as encoded by the side flag,
    // so the left side reports the input/output ratio.
    let (price, price_reverted) = match side {
        Side::Left =>
            (
                format_price(in_per_out, &input.symbol, &output.symbol),
                format_price(out_per_in, &output.symbol, &input.symbol),
            ),
        Side::Right =>
            (
                format_price(out_per_in, &output.symbol, &input.symbol),
                format_price(in_per_out, &input.symbol, &output.symbol),
            ),
    };

    Ok(
        TradeParse::Trade(TradeOutcome {
            bot,
            side,
            input,
            output,
            price,
            price_reverted,
        })
    )
}

fn action_name(trace: &Value) -> Option<&str> {
    trace
        .get("act")
        .and_then(|a| a.get("name"))
        .and_then(Value::as_str)
}

fn act_data(trace: &Value) -> Option<&Value> {
    trace.get("act").and_then(|a| a.get("data"))
}

fn field_str(data: Option<&Value>, key: &str) -> String {
    data.and_then(|d| d.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn is_router_transfer(inline: &Value) -> bool {
    if action_name(inline) != Some("transfer") {
        return false;
    }
    let data = act_data(inline);
    let from = data.and_then(|d| d.get("from")).and_then(Value::as_str);
    let memo = data
        .and_then(|d| d.get("memo"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    from == Some(SWAP_ROUTER_ACCOUNT) && memo.starts_with(SWAP_MEMO_PREFIX)
}

/// Memo shape: `flon swap by <amount> <symbol>:<trailing>`. The segment
/// after "by" and before the first ":" is the output quantity.
fn parse_memo_output(memo: &str) -> BotResult<Quantity> {
    let suffix = memo
        .split_once("by")
        .map(|(_, rest)| rest)
        .ok_or_else(|| BotError::Parse(format!("memo missing 'by' delimiter: {:?}", memo)))?;
    let quantity = suffix.split(':').next().unwrap_or(suffix).trim();
    quantity.parse()
}
