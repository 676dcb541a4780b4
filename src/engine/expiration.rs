// ==========================================
// 仓储库存管理系统 - 过期等级判定引擎
// ==========================================
// 红线: 过期等级是"等级制",由剩余天数唯一决定
// 红线: 参考日期必须显式注入,引擎内部不读取系统时间
// ==========================================
// 职责: 计算剩余天数 + 判定过期等级
// 输入: 库存记录（可选过期日期）+ 参考日期
// 输出: ExpirationStatus（无过期日期的记录不参与判定）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::inventory::{InventoryRecord, LocatedRecord};
use crate::domain::types::Severity;
use crate::engine::error::{EngineError, EngineResult};
use crate::i18n;

/// 临界等级上限（含）
pub const CRITICAL_MAX_DAYS: i64 = 7;
/// 近期等级上限（含）
pub const NEAR_TERM_MAX_DAYS: i64 = 30;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// Perishable - 可判定过期的记录
// ==========================================
pub trait Perishable {
    /// 原始过期日期串（None = 不适用）
    fn expiration_raw(&self) -> Option<&str>;
}

impl Perishable for InventoryRecord {
    fn expiration_raw(&self) -> Option<&str> {
        self.expiration_date.as_deref()
    }
}

impl Perishable for LocatedRecord {
    fn expiration_raw(&self) -> Option<&str> {
        self.record.expiration_raw()
    }
}

impl<T: Perishable + ?Sized> Perishable for &T {
    fn expiration_raw(&self) -> Option<&str> {
        (**self).expiration_raw()
    }
}

// ==========================================
// ExpirationStatus - 单条记录判定结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationStatus {
    pub expiration_date: NaiveDate,
    pub days_remaining: i64,
    pub severity: Severity,
}

// ==========================================
// ExpirationClassifier - 过期等级判定引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpirationClassifier;

impl ExpirationClassifier {
    /// 创建新的过期等级判定引擎
    pub fn new() -> Self {
        Self
    }

    /// 解析 ISO 日期（严格 YYYY-MM-DD,不做任何修正）
    ///
    /// 先校验形态: 10 字节,第 4/7 位为 '-',其余为 ASCII 数字;
    /// chrono 的 %Y-%m-%d 本身接受不补零与带符号年份
    pub fn parse_date(raw: &str) -> EngineResult<NaiveDate> {
        let invalid = || EngineError::InvalidDate {
            value: raw.to_string(),
        };

        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).map_err(|_| invalid())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 剩余整日历天数
    ///
    /// 正数=未来; 0=今天到期; 负数=已过期
    pub fn days_remaining(&self, expiration_date: NaiveDate, today: NaiveDate) -> i64 {
        (expiration_date - today).num_days()
    }

    /// 剩余天数（原始日期串版本）
    pub fn days_remaining_str(&self, raw: &str, today: NaiveDate) -> EngineResult<i64> {
        let expiration_date = Self::parse_date(raw)?;
        Ok(self.days_remaining(expiration_date, today))
    }

    /// 按剩余天数判定过期等级
    ///
    /// 规则（区间下界含）:
    /// - days <= 0      → Expired
    /// - 1 ..= 7        → Critical
    /// - 8 ..= 30       → NearTerm
    /// - > 30           → Normal
    pub fn severity_of(&self, days_remaining: i64) -> Severity {
        if days_remaining <= 0 {
            Severity::Expired
        } else if days_remaining <= CRITICAL_MAX_DAYS {
            Severity::Critical
        } else if days_remaining <= NEAR_TERM_MAX_DAYS {
            Severity::NearTerm
        } else {
            Severity::Normal
        }
    }

    /// 判定单条记录
    ///
    /// 返回:
    /// - Ok(None): 记录无过期日期,不参与判定
    /// - Ok(Some(status)): 判定结果
    /// - Err(InvalidDate): 日期串非法
    pub fn classify<R: Perishable + ?Sized>(
        &self,
        record: &R,
        today: NaiveDate,
    ) -> EngineResult<Option<ExpirationStatus>> {
        let raw = match record.expiration_raw() {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let expiration_date = Self::parse_date(raw)?;
        let days_remaining = self.days_remaining(expiration_date, today);

        Ok(Some(ExpirationStatus {
            expiration_date,
            days_remaining,
            severity: self.severity_of(days_remaining),
        }))
    }

    /// 状态文本: 已过期 / 剩余 N 天（按当前语言）
    pub fn status_text(&self, days_remaining: i64) -> String {
        if days_remaining <= 0 {
            i18n::t("alert.expired")
        } else {
            let days = days_remaining.to_string();
            i18n::t_with_args("alert.days_left", &[("days", days.as_str())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn record(expiration: Option<&str>) -> InventoryRecord {
        InventoryRecord {
            product_public_id: "p-1".to_string(),
            product: Product {
                public_id: "p-1".to_string(),
                name: "Yogurt".to_string(),
                sku: "YG-1".to_string(),
                description: None,
                category_id: Some(1),
                unit: None,
                price: 1.2,
                is_hazardous: false,
                expiration_required: true,
            },
            quantity: 5,
            storage_location: None,
            expiration_date: expiration.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_days_remaining_sign_around_reference() {
        let engine = ExpirationClassifier::new();
        assert_eq!(engine.days_remaining(today(), today()), 0);
        assert_eq!(engine.days_remaining(today() + Duration::days(1), today()), 1);
        assert_eq!(engine.days_remaining(today() - Duration::days(1), today()), -1);
    }

    #[test]
    fn test_days_remaining_across_month_and_leap_day() {
        let engine = ExpirationClassifier::new();
        let feb_27 = NaiveDate::from_ymd_opt(2028, 2, 27).unwrap();
        assert_eq!(engine.days_remaining_str("2028-03-01", feb_27).unwrap(), 3);
    }

    #[test]
    fn test_severity_boundaries() {
        let engine = ExpirationClassifier::new();
        let cases = [
            (-5, Severity::Expired),
            (0, Severity::Expired),
            (1, Severity::Critical),
            (7, Severity::Critical),
            (8, Severity::NearTerm),
            (30, Severity::NearTerm),
            (31, Severity::Normal),
            (365, Severity::Normal),
        ];
        for (days, expected) in cases {
            assert_eq!(engine.severity_of(days), expected, "days={}", days);
        }
    }

    #[test]
    fn test_classify_without_expiration_is_not_applicable() {
        let engine = ExpirationClassifier::new();
        assert_eq!(engine.classify(&record(None), today()).unwrap(), None);
    }

    #[test]
    fn test_classify_with_expiration() {
        let engine = ExpirationClassifier::new();
        let status = engine
            .classify(&record(Some("2026-03-17")), today())
            .unwrap()
            .unwrap();
        assert_eq!(status.days_remaining, 7);
        assert_eq!(status.severity, Severity::Critical);
        assert_eq!(status.expiration_date, NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
    }

    #[test]
    fn test_classify_invalid_date_is_propagated() {
        let engine = ExpirationClassifier::new();
        let err = engine
            .classify(&record(Some("2026-02-30")), today())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDate {
                value: "2026-02-30".to_string()
            }
        );
        assert!(engine.days_remaining_str("next week", today()).is_err());
    }

    #[test]
    fn test_parse_date_requires_exact_shape() {
        assert_eq!(
            ExpirationClassifier::parse_date("2026-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
        for raw in ["2026-3-5", "2026-03-5", " 2026-03-05 ", "+2026-03-05", "2026/03/05", ""] {
            assert!(ExpirationClassifier::parse_date(raw).is_err(), "raw={:?}", raw);
        }
    }
}
