//! 補貨狀態計算

use restock_core::{Product, ReorderStatus, StockoutHorizon};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::summary::SummaryCalculator;
use crate::DashboardSnapshot;

/// 補貨狀態計算器
pub struct ReorderCalculator;

impl ReorderCalculator {
    /// 計算單一產品的補貨狀態
    ///
    /// 純函數：不修改輸入、無跨產品狀態，相同輸入必得相同輸出。
    /// 零銷售速率是一等分支（時限為 `Never`），不是錯誤。
    pub fn evaluate(product: &Product) -> ReorderStatus {
        let daily_sales_rate = product.daily_sales_rate();
        let raw_threshold =
            daily_sales_rate * Decimal::from(product.replenish_lead_time_days);

        // 補貨判斷用未四捨五入的門檻（見 ReorderStatus::needs_reorder）
        let needs_reorder = product.current_inventory < raw_threshold;

        let days_until_stockout = if daily_sales_rate > Decimal::ZERO {
            let days = (product.current_inventory / daily_sales_rate).floor();
            // 輸入不做驗證；超出範圍的轉換取邊界值而非 panic
            StockoutHorizon::Finite(days.to_u64().unwrap_or_default())
        } else {
            StockoutHorizon::Never
        };

        // 顯示門檻四捨五入到整數件（.5 進位）
        let reorder_threshold = raw_threshold
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(u32::MAX);

        ReorderStatus {
            product: product.clone(),
            needs_reorder,
            days_until_stockout,
            reorder_threshold,
        }
    }

    /// 逐筆計算整批產品的補貨狀態（保持輸入順序）
    pub fn evaluate_all(products: &[Product]) -> Vec<ReorderStatus> {
        products.iter().map(Self::evaluate).collect()
    }

    /// 主計算入口：補貨狀態 + 彙總統計
    pub fn run(products: &[Product]) -> DashboardSnapshot {
        tracing::info!("開始補貨計算：產品 {} 筆", products.len());

        let start_time = std::time::Instant::now();

        tracing::debug!("Step 1: 逐筆計算補貨狀態");
        let statuses = Self::evaluate_all(products);

        tracing::debug!("Step 2: 彙總統計");
        let summary = SummaryCalculator::summarize(&statuses);

        tracing::info!(
            "補貨計算完成：需補貨 {} 筆，緊急 {} 筆",
            summary.products_needing_reorder,
            summary.critical_stock_count
        );

        DashboardSnapshot {
            statuses,
            summary,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn product(inventory: i64, weekly_sales: Decimal, lead_days: u32) -> Product {
        Product::new(
            "PROD-0001".to_string(),
            "Premium Electronics Widget".to_string(),
            Decimal::from(inventory),
            weekly_sales,
            lead_days,
        )
    }

    // 場景表：庫存 / 週銷量 / 提前期 → 是否補貨、缺貨天數、顯示門檻
    #[rstest]
    // 剛好等於門檻不觸發補貨（100 < 100 為假）
    #[case(100, Decimal::from(70), 10, false, StockoutHorizon::Finite(10), 100)]
    #[case(50, Decimal::from(70), 10, true, StockoutHorizon::Finite(5), 100)]
    #[case(300, Decimal::ZERO, 5, false, StockoutHorizon::Never, 0)]
    fn test_evaluate_scenarios(
        #[case] inventory: i64,
        #[case] weekly_sales: Decimal,
        #[case] lead_days: u32,
        #[case] expected_reorder: bool,
        #[case] expected_horizon: StockoutHorizon,
        #[case] expected_threshold: u32,
    ) {
        let status = ReorderCalculator::evaluate(&product(inventory, weekly_sales, lead_days));

        assert_eq!(status.needs_reorder, expected_reorder);
        assert_eq!(status.days_until_stockout, expected_horizon);
        assert_eq!(status.reorder_threshold, expected_threshold);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let p = product(73, Decimal::from(31), 17);

        let first = ReorderCalculator::evaluate(&p);
        let second = ReorderCalculator::evaluate(&p);

        assert_eq!(first.needs_reorder, second.needs_reorder);
        assert_eq!(first.days_until_stockout, second.days_until_stockout);
        assert_eq!(first.reorder_threshold, second.reorder_threshold);
        // 輸入不被修改
        assert_eq!(p.current_inventory, Decimal::from(73));
    }

    #[test]
    fn test_rounding_boundary_display_vs_trigger() {
        // 週銷量 69.65 → 日銷率 9.95，原始門檻 99.5：
        // 顯示門檻進位為 100，但觸發判斷仍用 99.5，
        // 庫存 100 時兩者相差一件（沿用原始行為，不「修正」）
        let p = product(100, Decimal::new(6965, 2), 10);
        let status = ReorderCalculator::evaluate(&p);

        assert_eq!(status.reorder_threshold, 100);
        assert!(!status.needs_reorder);
        assert_eq!(status.days_until_stockout, StockoutHorizon::Finite(10));
    }

    #[test]
    fn test_zero_inventory_with_velocity() {
        let status = ReorderCalculator::evaluate(&product(0, Decimal::from(7), 3));

        assert!(status.needs_reorder);
        assert_eq!(status.days_until_stockout, StockoutHorizon::Finite(0));
    }

    #[test]
    fn test_zero_velocity_zero_lead_time() {
        // 0 < 0 為假：零速率產品即使庫存為零也不需補貨
        let status = ReorderCalculator::evaluate(&product(0, Decimal::ZERO, 0));

        assert!(!status.needs_reorder);
        assert_eq!(status.days_until_stockout, StockoutHorizon::Never);
        assert_eq!(status.reorder_threshold, 0);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let products = vec![
            product(10, Decimal::from(70), 5),
            product(500, Decimal::from(7), 5),
            product(0, Decimal::ZERO, 5),
        ];

        let statuses = ReorderCalculator::evaluate_all(&products);

        assert_eq!(statuses.len(), 3);
        assert!(statuses[0].needs_reorder);
        assert!(!statuses[1].needs_reorder);
        assert_eq!(statuses[2].days_until_stockout, StockoutHorizon::Never);
    }

    #[test]
    fn test_evaluate_all_empty() {
        let statuses = ReorderCalculator::evaluate_all(&[]);
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_run_builds_snapshot() {
        let products = vec![
            product(50, Decimal::from(70), 10),
            product(300, Decimal::ZERO, 5),
        ];

        let snapshot = ReorderCalculator::run(&products);

        assert_eq!(snapshot.statuses.len(), 2);
        assert_eq!(snapshot.summary.total_products, 2);
        assert_eq!(snapshot.summary.products_needing_reorder, 1);
        assert!(snapshot.calculation_time_ms.is_some());
    }
}
