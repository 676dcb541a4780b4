// ==========================================
// 仓储库存管理系统 - 引擎层
// ==========================================
// 职责: 纯函数规则引擎（过期判定、列表检索、预警分桶、容量汇总）
// 红线: 引擎不做 I/O,不读系统时间,不修改输入
// ==========================================

pub mod alerts;
pub mod capacity;
pub mod error;
pub mod expiration;
pub mod query;

// 重导出核心引擎
pub use alerts::{AlertBuckets, AlertPartitioner, Classified, DEFAULT_WINDOW_DAYS};
pub use capacity::CapacityCalculator;
pub use error::{EngineError, EngineResult};
pub use expiration::{ExpirationClassifier, ExpirationStatus, Perishable};
pub use query::{Catalogued, QueryEngine, QueryOptions};
