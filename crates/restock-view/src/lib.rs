//! # Restock View
//!
//! 呈現層：排序與文字表格輸出
//!
//! 只重排與渲染引擎算好的補貨狀態，不重算任何補貨邏輯。

pub mod sort;
pub mod table;

// Re-export 主要類型
pub use sort::{sort_statuses, SortDirection, SortField, SortState};
pub use table::{render_summary, render_table, status_badge, StockLevel};
