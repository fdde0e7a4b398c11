//! 補貨狀態模型

use serde::{Deserialize, Serialize};

use crate::horizon::StockoutHorizon;
use crate::product::Product;

/// 補貨狀態（引擎計算結果，產品加上衍生欄位）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderStatus {
    /// 原始產品記錄
    pub product: Product,

    /// 是否需要補貨
    ///
    /// 以「未四捨五入」的門檻比較：
    /// current_inventory < daily_sales_rate × replenish_lead_time_days。
    /// 顯示用的 `reorder_threshold` 是四捨五入後的值，
    /// 在 .5 邊界附近兩者可能相差一件（沿用原始產品行為）。
    pub needs_reorder: bool,

    /// 距離缺貨的天數
    pub days_until_stockout: StockoutHorizon,

    /// 補貨門檻（顯示值，四捨五入到整數件）
    pub reorder_threshold: u32,
}

impl ReorderStatus {
    /// 產品ID（下游以此為列鍵）
    pub fn id(&self) -> &str {
        &self.product.id
    }
}
