// ==========================================
// 仓储库存管理系统 - 库存记录领域模型
// ==========================================
// 对齐: 后端 WarehouseInventoryDTO
// 红线: 记录为只读快照,仅在一次计算周期内有效,本层不回写
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

// ==========================================
// InventoryRecord - 单个仓库中单个商品的库存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub product_public_id: String, // 关联 Product
    pub product: Product,          // 商品快照（冗余,用于展示）
    pub quantity: u32,             // 非负
    #[serde(default)]
    pub storage_location: Option<String>, // 库内位置（自由文本）
    // 原始 ISO 日期串（YYYY-MM-DD）,由过期引擎解析;非法值需上抛 InvalidDate
    #[serde(default)]
    pub expiration_date: Option<String>,
}

impl InventoryRecord {
    /// 库位展示文本（缺失为 "N/A"）
    pub fn location_label(&self) -> &str {
        match self.storage_location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => loc,
            _ => "N/A",
        }
    }
}

// ==========================================
// LocatedRecord - 带所属仓库信息的库存记录
// ==========================================
// 用途: 跨仓库汇总（预警、全量库存视图）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedRecord {
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub record: InventoryRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record_without_expiration() {
        let raw = r#"{
            "productPublicId": "p-9",
            "product": {"publicId": "p-9", "name": "Rope", "sku": "R-9", "price": 4.0},
            "quantity": 12,
            "storageLocation": null,
            "expirationDate": null
        }"#;
        let record: InventoryRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.quantity, 12);
        assert!(record.expiration_date.is_none());
        assert_eq!(record.location_label(), "N/A");
    }
}
