//! 簡單補貨計算示例

use restock::{Product, ReorderCalculator, SummaryCalculator};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單補貨計算示例 ===\n");

    // 手動建立幾筆產品資料
    let products = vec![
        Product::new(
            "PROD-0001".to_string(),
            "Premium Electronics Widget".to_string(),
            Decimal::from(100),
            Decimal::from(70),
            10,
        ),
        Product::new(
            "PROD-0002".to_string(),
            "Deluxe Sports Bundle".to_string(),
            Decimal::from(50),
            Decimal::from(70),
            10,
        ),
        Product::new(
            "PROD-0003".to_string(),
            "Classic Books Collection".to_string(),
            Decimal::from(300),
            Decimal::ZERO,
            5,
        ),
    ];

    println!("產品清單:");
    for product in &products {
        println!(
            "  - {}: 庫存 {}, 週銷量 {}, 提前期 {} 天",
            product.id,
            product.current_inventory,
            product.average_sales_per_week,
            product.replenish_lead_time_days
        );
    }

    // 逐筆計算補貨狀態
    let statuses = ReorderCalculator::evaluate_all(&products);

    println!("\n補貨狀態:");
    for status in &statuses {
        println!(
            "  - {}: 需補貨 {}, 缺貨天數 {}, 門檻 {}",
            status.id(),
            if status.needs_reorder { "是" } else { "否" },
            status.days_until_stockout,
            status.reorder_threshold
        );
    }

    // 彙總統計
    let summary = SummaryCalculator::summarize(&statuses);
    println!(
        "\n彙總: 共 {} 筆，需補貨 {} 筆，緊急 {} 筆，平均提前期 {} 天",
        summary.total_products,
        summary.products_needing_reorder,
        summary.critical_stock_count,
        summary.average_lead_time
    );

    Ok(())
}
