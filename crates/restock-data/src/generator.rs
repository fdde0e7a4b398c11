//! 模擬產品資料產生器

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use restock_core::Product;
use rust_decimal::Decimal;

/// 產品類別詞庫
const PRODUCT_CATEGORIES: [&str; 10] = [
    "Electronics",
    "Clothing",
    "Food & Beverage",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
    "Beauty",
    "Automotive",
    "Office Supplies",
];

/// 產品形容詞詞庫
const PRODUCT_ADJECTIVES: [&str; 12] = [
    "Premium",
    "Deluxe",
    "Essential",
    "Professional",
    "Ultra",
    "Classic",
    "Modern",
    "Eco-Friendly",
    "Smart",
    "Wireless",
    "Digital",
    "Organic",
];

/// 產品型態詞庫
const PRODUCT_TYPES: [&str; 12] = [
    "Widget",
    "Gadget",
    "Tool",
    "Kit",
    "Set",
    "Pack",
    "Bundle",
    "Collection",
    "Series",
    "System",
    "Device",
    "Accessory",
];

/// 模擬產品資料產生器
///
/// 測試時以固定種子建立，保證可重現的資料批次。
pub struct MockProductGenerator {
    rng: StdRng,
}

impl MockProductGenerator {
    /// 創建新的產生器（隨機種子）
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 創建固定種子的產生器（可重現）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 產生指定數量的產品記錄
    ///
    /// ID 依序編號（PROD-0001 起），庫存 0..=500、
    /// 週銷量 10..=200、提前期 3..=30 天。
    pub fn generate(&mut self, count: usize) -> Vec<Product> {
        (1..=count)
            .map(|sequence| {
                let current_inventory: u32 = self.rng.gen_range(0..=500);
                let average_sales_per_week: u32 = self.rng.gen_range(10..=200);
                let replenish_lead_time_days: u32 = self.rng.gen_range(3..=30);

                Product::new(
                    format!("PROD-{:04}", sequence),
                    self.generate_product_name(),
                    Decimal::from(current_inventory),
                    Decimal::from(average_sales_per_week),
                    replenish_lead_time_days,
                )
            })
            .collect()
    }

    /// 組合「形容詞 + 類別 + 型態」的產品名稱
    fn generate_product_name(&mut self) -> String {
        let adjective = PRODUCT_ADJECTIVES[self.rng.gen_range(0..PRODUCT_ADJECTIVES.len())];
        let category = PRODUCT_CATEGORIES[self.rng.gen_range(0..PRODUCT_CATEGORIES.len())];
        let product_type = PRODUCT_TYPES[self.rng.gen_range(0..PRODUCT_TYPES.len())];
        format!("{} {} {}", adjective, category, product_type)
    }
}

impl Default for MockProductGenerator {
    fn default() -> Self {
        Self::new()
    }
}
