// ==========================================
// 仓储库存管理系统 - 库存检索 API
// ==========================================
// 职责: 商品检索、仓库库存检索、全量库存、仓库概览、调拨目标仓
// 架构: API 层 → Repository（数据）+ Engine（规则）
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use crate::api::error::ApiResult;
use crate::domain::inventory::{InventoryRecord, LocatedRecord};
use crate::domain::product::{Category, Product};
use crate::domain::warehouse::WarehouseSummary;
use crate::engine::{CapacityCalculator, QueryEngine, QueryOptions};
use crate::repository::InventoryRepository;

/// 商品目录视图（商品 + 分类下拉数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

// ==========================================
// InventoryApi - 库存检索 API
// ==========================================
pub struct InventoryApi {
    repo: Arc<dyn InventoryRepository>,
    query: QueryEngine,
    capacity: CapacityCalculator,
}

impl InventoryApi {
    /// 创建新的 InventoryApi 实例
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        Self {
            repo,
            query: QueryEngine::new(),
            capacity: CapacityCalculator::new(),
        }
    }

    // ==========================================
    // 商品
    // ==========================================

    /// 商品目录检索（商品与分类并发读取）
    #[instrument(skip(self))]
    pub async fn catalog(&self, opts: &QueryOptions) -> ApiResult<CatalogView> {
        let (products, categories) =
            futures::try_join!(self.repo.list_products(), self.repo.list_categories())?;

        Ok(CatalogView {
            products: self.query.filter_and_sort(&products, opts),
            categories,
        })
    }

    /// 商品检索
    pub async fn search_products(&self, opts: &QueryOptions) -> ApiResult<Vec<Product>> {
        let products = self.repo.list_products().await?;
        Ok(self.query.filter_and_sort(&products, opts))
    }

    /// 分类列表
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.repo.list_categories().await?)
    }

    // ==========================================
    // 库存
    // ==========================================

    /// 单仓库库存检索（按内嵌商品字段过滤/排序）
    #[instrument(skip(self))]
    pub async fn search_warehouse_inventory(
        &self,
        warehouse_id: i64,
        opts: &QueryOptions,
    ) -> ApiResult<Vec<InventoryRecord>> {
        let records = self.repo.list_inventory_by_warehouse(warehouse_id).await?;
        Ok(self.query.filter_and_sort(&records, opts))
    }

    /// 全量库存（由仓库列表展开,附带所属仓库）
    pub async fn all_inventory(&self, opts: &QueryOptions) -> ApiResult<Vec<LocatedRecord>> {
        let warehouses = self.repo.list_warehouses().await?;
        let records = self.capacity.flatten(&warehouses);
        Ok(self.query.filter_and_sort(&records, opts))
    }

    // ==========================================
    // 仓库
    // ==========================================

    /// 仓库概览
    pub async fn warehouse_overview(&self) -> ApiResult<Vec<WarehouseSummary>> {
        let warehouses = self.repo.list_warehouses().await?;
        Ok(warehouses
            .iter()
            .map(|w| self.capacity.summarize(w))
            .collect())
    }

    /// 调拨目标仓（除源仓库外）
    ///
    /// # 错误
    /// - Repository(NotFound): 源仓库不存在
    pub async fn transfer_destinations(
        &self,
        source_warehouse_id: i64,
    ) -> ApiResult<Vec<WarehouseSummary>> {
        // 源仓库必须存在
        self.repo.get_warehouse(source_warehouse_id).await?;

        let warehouses = self.repo.list_warehouses().await?;
        Ok(self
            .capacity
            .transfer_destinations(&warehouses, source_warehouse_id)
            .into_iter()
            .map(|w| self.capacity.summarize(w))
            .collect())
    }
}
