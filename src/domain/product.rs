// ==========================================
// 仓储库存管理系统 - 商品领域模型
// ==========================================
// 对齐: 后端 ProductDTO / CategoryDTO (camelCase JSON)
// 红线: sku 唯一性由后端保证,本层不校验
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - 商品目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // ===== 标识 =====
    #[serde(default)]
    pub public_id: String, // 对外公开ID（不透明字符串）

    // ===== 基础信息 =====
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>, // 分类引用（可缺失或为 0）
    #[serde(default)]
    pub unit: Option<String>, // 计量单位

    // ===== 价格 =====
    #[serde(default)]
    pub price: f64, // 非负

    // ===== 标志位 =====
    #[serde(default)]
    pub is_hazardous: bool,
    #[serde(default)]
    pub expiration_required: bool, // true 时库存记录应带过期日期（本层不强制）
}

impl Product {
    /// 有效分类引用（0 视为缺失）
    pub fn category_ref(&self) -> Option<i64> {
        self.category_id.filter(|id| *id != 0)
    }
}

// ==========================================
// Category - 商品分类（扁平,无层级）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
