//! 庫存補貨儀表板示例
//!
//! 模擬資料來源 → 補貨計算 → 排序與文字輸出的完整流程

use restock::{
    render_summary, render_table, sort_statuses, MockProductSource, ProductSource,
    ReorderCalculator, SortDirection, SortField,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== 庫存補貨儀表板示例 ===\n");

    // 擷取一批模擬產品（固定種子，輸出可重現）
    let mut source = MockProductSource::with_seed(42).with_batch_size(15);
    let batch = source.fetch()?;
    println!(
        "擷取時間: {}，產品 {} 筆\n",
        batch.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
        batch.products.len()
    );

    // 整批計算補貨狀態與彙總
    let mut snapshot = ReorderCalculator::run(&batch.products);

    println!("{}", render_summary(&snapshot.summary));

    // 依缺貨天數升冪（最緊急的排在最前）
    sort_statuses(
        &mut snapshot.statuses,
        SortField::DaysUntilStockout,
        SortDirection::Ascending,
    );

    println!("{}", render_table(&snapshot.statuses));

    if let Some(elapsed) = snapshot.calculation_time_ms {
        println!("計算耗時: {} ms", elapsed);
    }

    Ok(())
}
