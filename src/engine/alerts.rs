// ==========================================
// 仓储库存管理系统 - 过期预警分桶引擎
// ==========================================
// 职责: 将库存记录划分为 "已过期" 与 "窗口内临期" 两个桶
// 输入: 记录列表 + 预警窗口天数 + 参考日期
// 输出: AlertBuckets（桶内保持输入顺序）
// ==========================================
// 规则:
// - 无过期日期的记录两个桶都不进入
// - expired: days_remaining <= 0
// - nearing: 0 < days_remaining <= window_days
// - days_remaining > window_days: 不进入任何桶
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::expiration::{ExpirationClassifier, ExpirationStatus, Perishable};

/// 默认预警窗口（天）
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

// ==========================================
// AlertBuckets - 预警分桶结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertBuckets<T> {
    pub expired: Vec<T>,
    pub nearing: Vec<T>,
}

impl<T> AlertBuckets<T> {
    /// 预警总数（已过期 + 临期）
    pub fn total(&self) -> usize {
        self.expired.len() + self.nearing.len()
    }
}

/// 带判定结果的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classified<T> {
    pub record: T,
    pub status: ExpirationStatus,
}

// ==========================================
// AlertPartitioner - 过期预警分桶引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertPartitioner {
    classifier: ExpirationClassifier,
}

impl AlertPartitioner {
    /// 创建新的分桶引擎
    pub fn new() -> Self {
        Self {
            classifier: ExpirationClassifier::new(),
        }
    }

    /// 校验预警窗口
    pub fn validate_window(window_days: i64) -> EngineResult<()> {
        if window_days <= 0 {
            return Err(EngineError::InvalidArgument(format!(
                "预警窗口必须为正整数: window_days={}",
                window_days
            )));
        }
        Ok(())
    }

    /// 划分预警桶
    ///
    /// 错误:
    /// - InvalidArgument: window_days <= 0
    /// - InvalidDate: 任一记录的过期日期非法
    pub fn partition<T>(
        &self,
        records: &[T],
        window_days: i64,
        today: NaiveDate,
    ) -> EngineResult<AlertBuckets<T>>
    where
        T: Perishable + Clone,
    {
        let classified = self.partition_classified(records, window_days, today)?;
        Ok(AlertBuckets {
            expired: classified.expired.into_iter().map(|c| c.record).collect(),
            nearing: classified.nearing.into_iter().map(|c| c.record).collect(),
        })
    }

    /// 划分预警桶,并保留每条记录的判定结果（每条记录只解析一次）
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn partition_classified<T>(
        &self,
        records: &[T],
        window_days: i64,
        today: NaiveDate,
    ) -> EngineResult<AlertBuckets<Classified<T>>>
    where
        T: Perishable + Clone,
    {
        Self::validate_window(window_days)?;

        let mut buckets = AlertBuckets {
            expired: Vec::new(),
            nearing: Vec::new(),
        };

        for record in records {
            let status = match self.classifier.classify(record, today)? {
                Some(status) => status,
                None => continue,
            };

            let classified = Classified {
                record: record.clone(),
                status,
            };
            if status.days_remaining <= 0 {
                buckets.expired.push(classified);
            } else if status.days_remaining <= window_days {
                buckets.nearing.push(classified);
            }
        }

        debug!(
            expired = buckets.expired.len(),
            nearing = buckets.nearing.len(),
            window_days,
            "过期预警分桶完成"
        );

        Ok(buckets)
    }
}
