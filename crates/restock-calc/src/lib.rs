//! # Restock Calculation Engine
//!
//! 核心補貨計算引擎

pub mod reorder;
pub mod summary;

// Re-export 主要類型
pub use reorder::ReorderCalculator;
pub use summary::{SummaryCalculator, CRITICAL_STOCKOUT_DAYS};

/// 儀表板計算結果（單一擷取週期的完整快照）
///
/// 每個擷取週期重新計算，不做增量更新、不跨週期快取。
#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardSnapshot {
    /// 逐產品補貨狀態（保持輸入順序）
    pub statuses: Vec<restock_core::ReorderStatus>,

    /// 彙總統計
    pub summary: restock_core::DashboardSummary,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl DashboardSnapshot {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            statuses: Vec::new(),
            summary: restock_core::DashboardSummary::empty(),
            calculation_time_ms: None,
        }
    }
}
