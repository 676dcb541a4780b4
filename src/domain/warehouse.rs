// ==========================================
// 仓储库存管理系统 - 仓库领域模型
// ==========================================
// 对齐: 后端 WarehouseDTO
// 红线: current_capacity 由后端维护（库存数量之和）,本层只读
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::inventory::InventoryRecord;

// ==========================================
// Warehouse - 仓库
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub warehouse_id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub max_capacity: u32,
    #[serde(default)]
    pub current_capacity: u32,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
}

// ==========================================
// CapacityUsage - 仓库容量占用
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityUsage {
    pub current: u32,
    pub max: u32,
    pub available: u32,      // max - current（超容时为 0）
    pub utilization_pct: f64, // 0.0 ~ 100.0+（max=0 时为 0）
}

// ==========================================
// WarehouseSummary - 仓库概览（列表卡片）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseSummary {
    pub warehouse_id: i64,
    pub name: String,
    pub location: String,
    pub usage: CapacityUsage,
    pub record_count: usize,
}
