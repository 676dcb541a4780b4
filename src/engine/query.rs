// ==========================================
// 仓储库存管理系统 - 列表检索引擎
// ==========================================
// 职责: 文本搜索 + 分类过滤 + 字段排序
// 输入: 商品列表或库存列表（通过 Catalogued 访问器统一字段）
// 输出: 新列表（输入不被修改）
// ==========================================
// 红线: 处理顺序固定为 搜索 → 分类 → 稳定排序
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

use crate::domain::inventory::{InventoryRecord, LocatedRecord};
use crate::domain::product::Product;
use crate::domain::types::{CategoryFilter, SortDirection, SortField};

// ==========================================
// Catalogued - 检索字段访问器
// ==========================================
// 扁平商品直接提供字段; 库存记录委托给内嵌商品快照
pub trait Catalogued {
    fn name(&self) -> &str;
    fn sku(&self) -> &str;
    fn price(&self) -> f64;
    fn category_id(&self) -> Option<i64>;
}

impl Catalogued for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn sku(&self) -> &str {
        &self.sku
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn category_id(&self) -> Option<i64> {
        self.category_ref()
    }
}

impl Catalogued for InventoryRecord {
    fn name(&self) -> &str {
        self.product.name()
    }

    fn sku(&self) -> &str {
        self.product.sku()
    }

    fn price(&self) -> f64 {
        self.product.price()
    }

    fn category_id(&self) -> Option<i64> {
        self.product.category_id()
    }
}

impl Catalogued for LocatedRecord {
    fn name(&self) -> &str {
        self.record.name()
    }

    fn sku(&self) -> &str {
        self.record.sku()
    }

    fn price(&self) -> f64 {
        self.record.price()
    }

    fn category_id(&self) -> Option<i64> {
        self.record.category_id()
    }
}

// ==========================================
// QueryOptions - 检索选项
// ==========================================
// 序列化形态: { searchText, categoryId: 整数|"all", sortField, sortDirection }
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct QueryOptions {
    pub search_text: String,
    #[serde(rename = "categoryId")]
    pub category: CategoryFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl QueryOptions {
    pub fn search(mut self, text: &str) -> Self {
        self.search_text = text.to_string();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }
}

// ==========================================
// QueryEngine - 列表检索引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryEngine;

impl QueryEngine {
    /// 创建新的检索引擎
    pub fn new() -> Self {
        Self
    }

    /// 过滤并排序
    ///
    /// 步骤:
    /// 1) name 或 sku 不区分大小写包含 search_text（空串匹配全部）
    /// 2) category 精确匹配（All 跳过）
    /// 3) 按 sort_field 稳定排序; 降序反转比较器而非结果列表
    #[instrument(skip(self, records, opts), fields(input = records.len()))]
    pub fn filter_and_sort<T>(&self, records: &[T], opts: &QueryOptions) -> Vec<T>
    where
        T: Catalogued + Clone,
    {
        let term = opts.search_text.to_lowercase();

        let mut result: Vec<T> = records
            .iter()
            .filter(|r| Self::matches_search(*r, &term))
            .filter(|r| opts.category.matches(r.category_id()))
            .cloned()
            .collect();

        // slice::sort_by 为稳定排序
        result.sort_by(|a, b| {
            let ordering = Self::compare(a, b, opts.sort_field);
            match opts.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        debug!(
            output = result.len(),
            sort_field = %opts.sort_field,
            sort_direction = %opts.sort_direction,
            "列表检索完成"
        );

        result
    }

    fn matches_search<T: Catalogued>(record: &T, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        record.name().to_lowercase().contains(term) || record.sku().to_lowercase().contains(term)
    }

    /// 按字段比较（字符串不区分大小写,数值按数值）
    fn compare<T: Catalogued>(a: &T, b: &T, field: SortField) -> Ordering {
        match field {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Sku => a.sku().to_lowercase().cmp(&b.sku().to_lowercase()),
            SortField::Price => a.price().total_cmp(&b.price()),
        }
    }
}
