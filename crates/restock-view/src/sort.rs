//! 排序欄位與比較邏輯

use std::cmp::Ordering;
use std::str::FromStr;

use restock_core::{ReorderStatus, RestockError};
use serde::{Deserialize, Serialize};

/// 可排序欄位（封閉集合，無效的排序鍵在編譯期就不存在）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// 產品名稱
    ProductName,
    /// 現有庫存
    CurrentInventory,
    /// 平均週銷量
    AverageSalesPerWeek,
    /// 補貨提前期
    ReplenishLeadTimeDays,
    /// 距離缺貨天數
    DaysUntilStockout,
    /// 是否需要補貨
    NeedsReorder,
}

impl SortField {
    /// 欄位識別字（API 參數與表頭鍵）
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::ProductName => "product_name",
            SortField::CurrentInventory => "current_inventory",
            SortField::AverageSalesPerWeek => "average_sales_per_week",
            SortField::ReplenishLeadTimeDays => "replenish_lead_time_days",
            SortField::DaysUntilStockout => "days_until_stockout",
            SortField::NeedsReorder => "needs_reorder",
        }
    }

    /// 升冪比較
    fn compare(&self, a: &ReorderStatus, b: &ReorderStatus) -> Ordering {
        match self {
            SortField::ProductName => {
                caseless_cmp(&a.product.product_name, &b.product.product_name)
            }
            SortField::CurrentInventory => {
                a.product.current_inventory.cmp(&b.product.current_inventory)
            }
            SortField::AverageSalesPerWeek => a
                .product
                .average_sales_per_week
                .cmp(&b.product.average_sales_per_week),
            SortField::ReplenishLeadTimeDays => a
                .product
                .replenish_lead_time_days
                .cmp(&b.product.replenish_lead_time_days),
            // Never 排在所有有限天數之後（StockoutHorizon 的 Ord）
            SortField::DaysUntilStockout => a.days_until_stockout.cmp(&b.days_until_stockout),
            // 升冪時需要補貨的排在前面
            SortField::NeedsReorder => b.needs_reorder.cmp(&a.needs_reorder),
        }
    }
}

impl FromStr for SortField {
    type Err = RestockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product_name" => Ok(SortField::ProductName),
            "current_inventory" => Ok(SortField::CurrentInventory),
            "average_sales_per_week" => Ok(SortField::AverageSalesPerWeek),
            "replenish_lead_time_days" => Ok(SortField::ReplenishLeadTimeDays),
            "days_until_stockout" => Ok(SortField::DaysUntilStockout),
            "needs_reorder" => Ok(SortField::NeedsReorder),
            other => Err(RestockError::UnknownSortField(other.to_string())),
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// 升冪
    Ascending,
    /// 降冪
    Descending,
}

impl SortDirection {
    /// 反轉方向
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// 表頭點擊的排序狀態
///
/// 點擊同一欄位反轉方向，點擊新欄位則改為該欄位升冪。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// 目前排序欄位
    pub field: SortField,
    /// 目前排序方向
    pub direction: SortDirection,
}

impl SortState {
    /// 預設狀態：產品名稱升冪
    pub fn new() -> Self {
        Self {
            field: SortField::ProductName,
            direction: SortDirection::Ascending,
        }
    }

    /// 處理表頭點擊
    pub fn apply(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggle();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

/// 依欄位與方向排序補貨狀態
///
/// 穩定排序；降冪反轉比較子，相等元素維持輸入順序。
pub fn sort_statuses(
    statuses: &mut [ReorderStatus],
    field: SortField,
    direction: SortDirection,
) {
    statuses.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// 不分大小寫的 Unicode 字串比較，原字串作為決勝鍵
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
