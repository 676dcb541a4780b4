// ==========================================
// 仓储库存管理系统 - API层错误类型
// ==========================================
// 职责: 汇总引擎层/仓储层错误,向调用方（展示层、CLI）上抛
// ==========================================

use thiserror::Error;

use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 规则错误
    // ==========================================
    #[error("规则计算失败: {0}")]
    Engine(#[from] EngineError),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据访问失败: {0}")]
    Repository(#[from] RepositoryError),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    Export(String),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Export(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Export(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
