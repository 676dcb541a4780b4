// ==========================================
// 仓储库存管理系统 - 领域层错误类型
// ==========================================
// 职责: 领域取值（排序字段、排序方向、分类过滤）解析失败
// ==========================================

use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("无效取值 ({field}): {value} (可选: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, value: &str, expected: &'static str) -> Self {
        DomainError::InvalidValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
