// ==========================================
// 仓储库存管理系统 - 仓库容量与汇总引擎
// ==========================================
// 职责: 容量占用计算、跨仓库库存展开、调拨目标仓筛选
// 红线: current_capacity 以后端为准,本地求和仅用于一致性提示
// ==========================================

use tracing::{instrument, warn};

use crate::domain::inventory::LocatedRecord;
use crate::domain::warehouse::{CapacityUsage, Warehouse, WarehouseSummary};

// ==========================================
// CapacityCalculator - 容量计算引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CapacityCalculator;

impl CapacityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 容量占用（使用后端上报的 current_capacity）
    pub fn usage(&self, warehouse: &Warehouse) -> CapacityUsage {
        let current = warehouse.current_capacity;
        let max = warehouse.max_capacity;
        let utilization_pct = if max == 0 {
            0.0
        } else {
            f64::from(current) / f64::from(max) * 100.0
        };

        CapacityUsage {
            current,
            max,
            available: max.saturating_sub(current),
            utilization_pct,
        }
    }

    /// 按库存数量求和得到的占用量
    pub fn derived_current_capacity(&self, warehouse: &Warehouse) -> u64 {
        warehouse.inventory.iter().map(|r| u64::from(r.quantity)).sum()
    }

    /// 一致性检查: 上报值与本地求和是否一致（不一致时记录警告）
    pub fn is_consistent(&self, warehouse: &Warehouse) -> bool {
        let derived = self.derived_current_capacity(warehouse);
        let reported = u64::from(warehouse.current_capacity);
        if derived != reported {
            warn!(
                warehouse_id = warehouse.warehouse_id,
                reported,
                derived,
                "仓库占用量与库存数量之和不一致"
            );
            return false;
        }
        true
    }

    /// 仓库概览
    pub fn summarize(&self, warehouse: &Warehouse) -> WarehouseSummary {
        self.is_consistent(warehouse);
        WarehouseSummary {
            warehouse_id: warehouse.warehouse_id,
            name: warehouse.name.clone(),
            location: warehouse.location.clone(),
            usage: self.usage(warehouse),
            record_count: warehouse.inventory.len(),
        }
    }

    /// 调拨目标仓: 除源仓库外的全部仓库（保持输入顺序）
    pub fn transfer_destinations<'a>(
        &self,
        warehouses: &'a [Warehouse],
        source_warehouse_id: i64,
    ) -> Vec<&'a Warehouse> {
        warehouses
            .iter()
            .filter(|w| w.warehouse_id != source_warehouse_id)
            .collect()
    }

    /// 展开全部仓库的库存记录（附带所属仓库）
    #[instrument(skip(self, warehouses), fields(warehouses = warehouses.len()))]
    pub fn flatten(&self, warehouses: &[Warehouse]) -> Vec<LocatedRecord> {
        warehouses
            .iter()
            .flat_map(|w| {
                w.inventory.iter().map(move |record| LocatedRecord {
                    warehouse_id: w.warehouse_id,
                    warehouse_name: w.name.clone(),
                    record: record.clone(),
                })
            })
            .collect()
    }
}
