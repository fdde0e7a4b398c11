//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 每週天數（週銷量換算日銷量）
pub const DAYS_PER_WEEK: u32 = 7;

/// 產品（原始輸入資料，由外部資料來源提供）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID（如 PROD-0001）
    pub id: String,

    /// 產品名稱
    pub product_name: String,

    /// 現有庫存（件）
    pub current_inventory: Decimal,

    /// 平均週銷量（件/週）
    pub average_sales_per_week: Decimal,

    /// 補貨提前期（天）
    pub replenish_lead_time_days: u32,
}

impl Product {
    /// 創建新的產品記錄
    pub fn new(
        id: String,
        product_name: String,
        current_inventory: Decimal,
        average_sales_per_week: Decimal,
        replenish_lead_time_days: u32,
    ) -> Self {
        Self {
            id,
            product_name,
            current_inventory,
            average_sales_per_week,
            replenish_lead_time_days,
        }
    }

    /// 日銷售速率（週銷量 / 7）
    pub fn daily_sales_rate(&self) -> Decimal {
        self.average_sales_per_week / Decimal::from(DAYS_PER_WEEK)
    }

    /// 檢查銷售速率是否為零（零速率的產品永遠不會缺貨）
    pub fn has_zero_velocity(&self) -> bool {
        self.daily_sales_rate() <= Decimal::ZERO
    }
}
