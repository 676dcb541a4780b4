// ==========================================
// 仓储库存管理系统 - 过期预警 API
// ==========================================
// 职责: 读取全部仓库 → 展开库存 → 分桶 → 逐条判定等级
// 架构: API 层 → Repository（数据）+ Engine（规则）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::api::error::ApiResult;
use crate::domain::inventory::{InventoryRecord, LocatedRecord};
use crate::domain::types::Severity;
use crate::engine::{AlertPartitioner, CapacityCalculator, Classified, ExpirationClassifier};
use crate::repository::InventoryRepository;

// ==========================================
// 预警条目 / 报告
// ==========================================

/// 单条预警
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEntry {
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub record: InventoryRecord,
    pub expiration_date: NaiveDate,
    pub days_remaining: i64,
    pub severity: Severity,
    pub badge_variant: String,
    pub status_text: String,
}

/// 过期预警报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationReport {
    pub today: NaiveDate,
    pub window_days: i64,
    pub expired: Vec<AlertEntry>,
    pub nearing: Vec<AlertEntry>,
    pub total_alerts: usize,
}

// ==========================================
// AlertApi - 过期预警 API
// ==========================================
pub struct AlertApi {
    repo: Arc<dyn InventoryRepository>,
    partitioner: AlertPartitioner,
    classifier: ExpirationClassifier,
    capacity: CapacityCalculator,
}

impl AlertApi {
    /// 创建新的 AlertApi 实例
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        Self {
            repo,
            partitioner: AlertPartitioner::new(),
            classifier: ExpirationClassifier::new(),
            capacity: CapacityCalculator::new(),
        }
    }

    /// 生成过期预警报告
    ///
    /// # 参数
    /// - window_days: 临期窗口（正整数）
    /// - today: 参考日期
    ///
    /// # 返回
    /// - Ok(ExpirationReport): 已过期/临期两组,组内保持仓库与库存的原始顺序
    /// - Err(ApiError::Engine): 窗口非法或日期非法
    #[instrument(skip(self))]
    pub async fn expiration_report(
        &self,
        window_days: i64,
        today: NaiveDate,
    ) -> ApiResult<ExpirationReport> {
        // 窗口非法时不读取数据
        AlertPartitioner::validate_window(window_days)?;

        let warehouses = self.repo.list_warehouses().await?;
        let records = self.capacity.flatten(&warehouses);
        let buckets = self
            .partitioner
            .partition_classified(&records, window_days, today)?;

        let expired = self.to_entries(buckets.expired);
        let nearing = self.to_entries(buckets.nearing);
        let total_alerts = expired.len() + nearing.len();

        info!(
            expired = expired.len(),
            nearing = nearing.len(),
            window_days,
            "过期预警报告生成完成"
        );

        Ok(ExpirationReport {
            today,
            window_days,
            expired,
            nearing,
            total_alerts,
        })
    }

    fn to_entries(&self, classified: Vec<Classified<LocatedRecord>>) -> Vec<AlertEntry> {
        classified
            .into_iter()
            .map(|Classified { record: located, status }| AlertEntry {
                warehouse_id: located.warehouse_id,
                warehouse_name: located.warehouse_name,
                record: located.record,
                expiration_date: status.expiration_date,
                days_remaining: status.days_remaining,
                severity: status.severity,
                badge_variant: status.severity.badge_variant().to_string(),
                status_text: self.classifier.status_text(status.days_remaining),
            })
            .collect()
    }
}
