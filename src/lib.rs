//! # Restock
//!
//! 庫存補貨儀表板引擎
//!
//! 資料來源供應產品清單，計算引擎推導補貨狀態與彙總統計，
//! 呈現層負責排序與輸出，不重算任何補貨邏輯。

// Re-export 主要類型
pub use restock_calc::{
    DashboardSnapshot, ReorderCalculator, SummaryCalculator, CRITICAL_STOCKOUT_DAYS,
};
pub use restock_core::{
    DashboardSummary, Product, ReorderStatus, RestockError, StockoutHorizon,
};
pub use restock_data::{
    MockProductGenerator, MockProductSource, ProductBatch, ProductSource, DEFAULT_BATCH_SIZE,
};
pub use restock_view::{
    render_summary, render_table, sort_statuses, status_badge, SortDirection, SortField,
    SortState, StockLevel,
};
