//! 儀表板彙總模型

use serde::{Deserialize, Serialize};

/// 儀表板彙總統計（引擎對整批補貨狀態的聚合結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// 產品總數
    pub total_products: usize,

    /// 需要補貨的產品數
    pub products_needing_reorder: usize,

    /// 平均補貨提前期（天，四捨五入到整數）
    pub average_lead_time: u32,

    /// 緊急庫存數（有限缺貨時限且不足 7 天）
    pub critical_stock_count: usize,
}

impl DashboardSummary {
    /// 創建空的彙總（空產品清單的約定結果，全部歸零）
    pub fn empty() -> Self {
        Self {
            total_products: 0,
            products_needing_reorder: 0,
            average_lead_time: 0,
            critical_stock_count: 0,
        }
    }

    /// 需要補貨的產品佔比（百分比，四捨五入；空彙總為 0）
    pub fn reorder_ratio_percent(&self) -> u32 {
        if self.total_products == 0 {
            return 0;
        }
        let ratio = self.products_needing_reorder as f64 / self.total_products as f64;
        (ratio * 100.0).round() as u32
    }
}
