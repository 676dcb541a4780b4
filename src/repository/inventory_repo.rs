// ==========================================
// 仓储库存管理系统 - 库存数据源 Trait
// ==========================================
// 职责: 定义后端协作方的读取契约（不包含实现）
// 红线: 只读;下单/调拨/删除等写操作由后端负责
// ==========================================

use async_trait::async_trait;

use crate::domain::inventory::InventoryRecord;
use crate::domain::product::{Category, Product};
use crate::domain::warehouse::Warehouse;
use crate::repository::error::RepositoryResult;

// ==========================================
// InventoryRepository Trait
// ==========================================
// 实现者: SnapshotRepository（JSON 快照）; HTTP 客户端可另行实现
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// 全部仓库（含内嵌库存）
    async fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>>;

    /// 单个仓库
    ///
    /// # 错误
    /// - NotFound: 仓库不存在
    async fn get_warehouse(&self, warehouse_id: i64) -> RepositoryResult<Warehouse>;

    /// 指定仓库的库存记录
    async fn list_inventory_by_warehouse(
        &self,
        warehouse_id: i64,
    ) -> RepositoryResult<Vec<InventoryRecord>>;

    /// 商品目录
    async fn list_products(&self) -> RepositoryResult<Vec<Product>>;

    /// 商品分类
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}
