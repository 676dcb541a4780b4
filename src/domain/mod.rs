// ==========================================
// 仓储库存管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod error;
pub mod inventory;
pub mod product;
pub mod types;
pub mod warehouse;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use inventory::{InventoryRecord, LocatedRecord};
pub use product::{Category, Product};
pub use types::{CategoryFilter, Severity, SortDirection, SortField};
pub use warehouse::{CapacityUsage, Warehouse, WarehouseSummary};
