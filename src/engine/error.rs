// ==========================================
// 仓储库存管理系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 引擎为纯函数,错误一律上抛,不重试、不吞掉
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 过期日期存在但不是合法日历日期
    #[error("无效日期: {value}")]
    InvalidDate { value: String },

    /// 参数非法（预警窗口 <= 0、无法识别的排序/过滤选项等）
    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
