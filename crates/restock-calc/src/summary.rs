//! 彙總統計計算

use restock_core::{DashboardSummary, ReorderStatus};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 緊急庫存門檻（缺貨時限不足 7 天視為緊急）
pub const CRITICAL_STOCKOUT_DAYS: u64 = 7;

/// 彙總統計計算器
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 計算整批補貨狀態的彙總統計
    ///
    /// 空清單回傳全零彙總（明確分支，不走零除法路徑）。
    pub fn summarize(statuses: &[ReorderStatus]) -> DashboardSummary {
        let total_products = statuses.len();
        if total_products == 0 {
            return DashboardSummary::empty();
        }

        let products_needing_reorder =
            statuses.iter().filter(|s| s.needs_reorder).count();

        let lead_time_total: u64 = statuses
            .iter()
            .map(|s| u64::from(s.product.replenish_lead_time_days))
            .sum();
        let average_lead_time = (Decimal::from(lead_time_total)
            / Decimal::from(total_products as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX);

        // Never（零速率）不列入緊急庫存
        let critical_stock_count = statuses
            .iter()
            .filter(|s| s.days_until_stockout.is_within(CRITICAL_STOCKOUT_DAYS))
            .count();

        DashboardSummary {
            total_products,
            products_needing_reorder,
            average_lead_time,
            critical_stock_count,
        }
    }
}
