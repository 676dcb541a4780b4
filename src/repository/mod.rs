// ==========================================
// 仓储库存管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供后端数据读取接口,屏蔽数据来源细节
// ==========================================

pub mod error;
pub mod inventory_repo;
pub mod snapshot_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use inventory_repo::InventoryRepository;
pub use snapshot_repo::{InventorySnapshot, SnapshotRepository};
