//! # Restock Core
//!
//! 核心資料模型與類型定義

pub mod horizon;
pub mod product;
pub mod status;
pub mod summary;

// Re-export 主要類型
pub use horizon::StockoutHorizon;
pub use product::Product;
pub use status::ReorderStatus;
pub use summary::DashboardSummary;

/// Restock 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RestockError {
    #[error("未知的排序欄位: {0}")]
    UnknownSortField(String),

    #[error("資料來源錯誤: {0}")]
    DataSource(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RestockError>;
