//! # Restock Data
//!
//! 模擬產品資料來源（資料擷取邊界）

pub mod generator;
pub mod source;

// Re-export 主要類型
pub use generator::MockProductGenerator;
pub use source::{MockProductSource, ProductBatch, ProductSource, DEFAULT_BATCH_SIZE};
