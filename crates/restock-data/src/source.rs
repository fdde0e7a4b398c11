//! 產品資料來源介面

use chrono::{DateTime, Utc};
use restock_core::Product;
use serde::{Deserialize, Serialize};

use crate::generator::MockProductGenerator;

/// 預設單次擷取的產品數量
pub const DEFAULT_BATCH_SIZE: usize = 120;

/// 單次擷取的產品批次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBatch {
    /// 擷取時間
    pub fetched_at: DateTime<Utc>,

    /// 產品清單
    pub products: Vec<Product>,
}

/// 產品資料來源
///
/// 計算引擎只要求「已實體化的產品清單」；
/// 真實資料來源（API、資料庫）與模擬來源都經由此介面供應。
pub trait ProductSource {
    /// 擷取一批產品資料
    fn fetch(&mut self) -> restock_core::Result<ProductBatch>;
}

/// 模擬產品資料來源
pub struct MockProductSource {
    generator: MockProductGenerator,
    batch_size: usize,
}

impl MockProductSource {
    /// 創建新的模擬來源（隨機種子、預設批次大小）
    pub fn new() -> Self {
        Self {
            generator: MockProductGenerator::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// 創建固定種子的模擬來源（可重現）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: MockProductGenerator::with_seed(seed),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// 建構器模式：設置批次大小
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Default for MockProductSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for MockProductSource {
    fn fetch(&mut self) -> restock_core::Result<ProductBatch> {
        tracing::info!("擷取模擬產品資料：{} 筆", self.batch_size);

        Ok(ProductBatch {
            fetched_at: Utc::now(),
            products: self.generator.generate(self.batch_size),
        })
    }
}
