// ==========================================
// 仓储库存管理系统 - JSON 快照数据源
// ==========================================
// 职责: 从后端导出的 JSON 快照读取仓库/商品/分类
// 格式: { "warehouses": [...], "products": [...], "categories": [...] }
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::domain::inventory::InventoryRecord;
use crate::domain::product::{Category, Product};
use crate::domain::warehouse::Warehouse;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::inventory_repo::InventoryRepository;

// ==========================================
// InventorySnapshot - 快照文档
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventorySnapshot {
    pub warehouses: Vec<Warehouse>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

// ==========================================
// SnapshotRepository
// ==========================================
pub struct SnapshotRepository {
    snapshot: InventorySnapshot,
}

impl SnapshotRepository {
    /// 从内存快照创建
    pub fn from_snapshot(snapshot: InventorySnapshot) -> Self {
        Self { snapshot }
    }

    /// 从 JSON 字符串创建
    pub fn from_json(raw: &str) -> RepositoryResult<Self> {
        let snapshot: InventorySnapshot = serde_json::from_str(raw)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// 从快照文件加载
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RepositoryError::SourceUnavailable {
                path: path.display().to_string(),
                source,
            })?;

        let repo = Self::from_json(&raw)?;
        info!(
            warehouses = repo.snapshot.warehouses.len(),
            products = repo.snapshot.products.len(),
            categories = repo.snapshot.categories.len(),
            "快照加载完成"
        );
        Ok(repo)
    }

    fn find_warehouse(&self, warehouse_id: i64) -> RepositoryResult<&Warehouse> {
        self.snapshot
            .warehouses
            .iter()
            .find(|w| w.warehouse_id == warehouse_id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Warehouse".to_string(),
                id: warehouse_id.to_string(),
            })
    }
}

#[async_trait]
impl InventoryRepository for SnapshotRepository {
    async fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>> {
        Ok(self.snapshot.warehouses.clone())
    }

    async fn get_warehouse(&self, warehouse_id: i64) -> RepositoryResult<Warehouse> {
        self.find_warehouse(warehouse_id).cloned()
    }

    async fn list_inventory_by_warehouse(
        &self,
        warehouse_id: i64,
    ) -> RepositoryResult<Vec<InventoryRecord>> {
        let warehouse = self.find_warehouse(warehouse_id)?;
        debug!(warehouse_id, count = warehouse.inventory.len(), "读取仓库库存");
        Ok(warehouse.inventory.clone())
    }

    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.snapshot.products.clone())
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.snapshot.categories.clone())
    }
}
