// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试数据构建器与临时快照文件
// ==========================================
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use reliable_inventory::domain::{Category, InventoryRecord, Product, Warehouse};
use reliable_inventory::repository::InventorySnapshot;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 固定参考日期
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()
}

/// 相对参考日期偏移的 ISO 日期串
pub fn iso_offset(days: i64) -> String {
    (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

// ==========================================
// Product 构建器
// ==========================================

pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(public_id: &str) -> Self {
        Self {
            product: Product {
                public_id: public_id.to_string(),
                name: public_id.to_string(),
                sku: public_id.to_uppercase(),
                description: None,
                category_id: None,
                unit: Some("pcs".to_string()),
                price: 1.0,
                is_hazardous: false,
                expiration_required: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.product.name = name.to_string();
        self
    }

    pub fn sku(mut self, sku: &str) -> Self {
        self.product.sku = sku.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.product.price = price;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.product.category_id = Some(category_id);
        self
    }

    pub fn perishable(mut self) -> Self {
        self.product.expiration_required = true;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

// ==========================================
// InventoryRecord 构建器
// ==========================================

pub struct RecordBuilder {
    record: InventoryRecord,
}

impl RecordBuilder {
    pub fn new(product: Product) -> Self {
        Self {
            record: InventoryRecord {
                product_public_id: product.public_id.clone(),
                product,
                quantity: 1,
                storage_location: None,
                expiration_date: None,
            },
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.record.quantity = quantity;
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.record.storage_location = Some(location.to_string());
        self
    }

    /// 过期日期 = 参考日期 + days
    pub fn expires_in(mut self, days: i64) -> Self {
        self.record.expiration_date = Some(iso_offset(days));
        self
    }

    pub fn raw_expiration(mut self, raw: &str) -> Self {
        self.record.expiration_date = Some(raw.to_string());
        self
    }

    pub fn build(self) -> InventoryRecord {
        self.record
    }
}

/// 构建仓库（current_capacity 取库存数量之和）
pub fn warehouse(id: i64, name: &str, max: u32, inventory: Vec<InventoryRecord>) -> Warehouse {
    let current: u32 = inventory.iter().map(|r| r.quantity).sum();
    Warehouse {
        warehouse_id: id,
        name: name.to_string(),
        location: format!("{} Yard", name),
        max_capacity: max,
        current_capacity: current,
        inventory,
    }
}

/// 标准测试快照: 两个仓库 + 三个分类
///
/// - WH 1 "North": milk(-2天), yogurt(5天), bolts(无过期)
/// - WH 2 "South": cheese(30天), rice(31天), juice(0天)
pub fn sample_snapshot() -> InventorySnapshot {
    let milk = ProductBuilder::new("milk").name("Milk").sku("MLK-1").price(2.5).category(1).perishable().build();
    let yogurt = ProductBuilder::new("yogurt").name("Yogurt").sku("YGT-1").price(1.2).category(1).perishable().build();
    let bolts = ProductBuilder::new("bolts").name("Bolts").sku("BLT-9").price(0.1).category(3).build();
    let cheese = ProductBuilder::new("cheese").name("Cheese").sku("CHS-2").price(7.0).category(1).perishable().build();
    let rice = ProductBuilder::new("rice").name("Rice").sku("RCE-5").price(3.3).category(2).perishable().build();
    let juice = ProductBuilder::new("juice").name("Apple juice").sku("JCE-1").price(1.9).category(2).perishable().build();

    let north = warehouse(
        1,
        "North",
        500,
        vec![
            RecordBuilder::new(milk.clone()).quantity(10).location("A-1").expires_in(-2).build(),
            RecordBuilder::new(yogurt.clone()).quantity(20).expires_in(5).build(),
            RecordBuilder::new(bolts.clone()).quantity(300).location("C-9").build(),
        ],
    );
    let south = warehouse(
        2,
        "South",
        100,
        vec![
            RecordBuilder::new(cheese.clone()).quantity(4).expires_in(30).build(),
            RecordBuilder::new(rice.clone()).quantity(40).expires_in(31).build(),
            RecordBuilder::new(juice.clone()).quantity(6).location("B-2").expires_in(0).build(),
        ],
    );

    InventorySnapshot {
        warehouses: vec![north, south],
        products: vec![milk, yogurt, bolts, cheese, rice, juice],
        categories: vec![
            Category { id: 1, name: "Dairy".to_string(), description: None },
            Category { id: 2, name: "Pantry".to_string(), description: None },
            Category { id: 3, name: "Hardware".to_string(), description: None },
        ],
    }
}

/// 将快照写入临时 JSON 文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_snapshot_file(snapshot: &InventorySnapshot) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(serde_json::to_string(snapshot)?.as_bytes())?;
    file.flush()?;
    Ok(file)
}
