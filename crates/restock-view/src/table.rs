//! 文字表格與彙總卡片輸出

use std::fmt::Write;

use restock_core::{DashboardSummary, ReorderStatus, StockoutHorizon};

/// 庫存偏低的提示門檻（天）
const LOW_STOCK_DAYS: u64 = 14;

/// 緊急庫存門檻（天）
const CRITICAL_STOCK_DAYS: u64 = 7;

/// 庫存健康等級（對應儀表板的顏色標示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// 不足 7 天，緊急
    Critical,
    /// 不足 14 天，偏低
    Low,
    /// 14 天以上
    Healthy,
    /// 零銷售速率，永不缺貨
    NoRisk,
}

impl StockLevel {
    /// 依缺貨時限分級
    pub fn from_horizon(horizon: StockoutHorizon) -> Self {
        match horizon {
            StockoutHorizon::Never => StockLevel::NoRisk,
            StockoutHorizon::Finite(days) if days < CRITICAL_STOCK_DAYS => StockLevel::Critical,
            StockoutHorizon::Finite(days) if days < LOW_STOCK_DAYS => StockLevel::Low,
            StockoutHorizon::Finite(_) => StockLevel::Healthy,
        }
    }
}

/// 狀態徽章文字
pub fn status_badge(status: &ReorderStatus) -> &'static str {
    if status.needs_reorder {
        "Reorder Now"
    } else {
        "In Stock"
    }
}

/// 渲染產品表格
///
/// 欄位與儀表板表頭一致；缺貨天數以 `∞` 表示永不缺貨。
pub fn render_table(statuses: &[ReorderStatus]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<36} {:>13} {:>14} {:>16} {:>19}  {:<11}",
        "Product Name",
        "Current Stock",
        "Avg Sales/Week",
        "Lead Time (Days)",
        "Days Until Stockout",
        "Status",
    );

    for status in statuses {
        let _ = writeln!(
            out,
            "{:<36} {:>13} {:>14} {:>16} {:>19}  {:<11}",
            status.product.product_name,
            status.product.current_inventory.to_string(),
            status.product.average_sales_per_week.to_string(),
            status.product.replenish_lead_time_days,
            status.days_until_stockout.to_string(),
            status_badge(status),
        );
    }

    out
}

/// 渲染彙總卡片
pub fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Total Products: {} (items in inventory)",
        summary.total_products
    );
    let _ = writeln!(
        out,
        "Needs Reorder:  {} ({}% of inventory)",
        summary.products_needing_reorder,
        summary.reorder_ratio_percent()
    );
    let _ = writeln!(
        out,
        "Critical Stock: {} (< {} days until stockout)",
        summary.critical_stock_count, CRITICAL_STOCK_DAYS
    );
    let _ = writeln!(
        out,
        "Avg Lead Time:  {} days (average replenishment time)",
        summary.average_lead_time
    );

    out
}
