//! 缺貨時限模型

use std::fmt;

use serde::{Deserialize, Serialize};

/// 缺貨時限（距離庫存歸零的天數）
///
/// 零銷售速率的產品以 `Never` 表示永遠不會缺貨。
/// 變體順序保證任何有限天數都排在 `Never` 之前，
/// 排序與統計邏輯直接依賴此 `Ord` 實現。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StockoutHorizon {
    /// 有限天數
    Finite(u64),
    /// 永不缺貨（零銷售速率）
    Never,
}

impl StockoutHorizon {
    /// 檢查是否為有限時限
    pub fn is_finite(&self) -> bool {
        matches!(self, StockoutHorizon::Finite(_))
    }

    /// 檢查是否永不缺貨
    pub fn is_never(&self) -> bool {
        matches!(self, StockoutHorizon::Never)
    }

    /// 取得有限天數（`Never` 回傳 `None`）
    pub fn finite_days(&self) -> Option<u64> {
        match self {
            StockoutHorizon::Finite(days) => Some(*days),
            StockoutHorizon::Never => None,
        }
    }

    /// 檢查時限是否有限且短於指定天數
    pub fn is_within(&self, days: u64) -> bool {
        matches!(self, StockoutHorizon::Finite(d) if *d < days)
    }
}

impl fmt::Display for StockoutHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockoutHorizon::Finite(days) => write!(f, "{}", days),
            StockoutHorizon::Never => write!(f, "∞"),
        }
    }
}
