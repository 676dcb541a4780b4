// ==========================================
// 仓储库存管理系统 - API 层
// ==========================================
// 职责: 面向展示层/CLI 的业务接口
// 架构: API 层 → Repository + Engine
// ==========================================

pub mod alert_api;
pub mod error;
pub mod export;
pub mod inventory_api;

// 重导出
pub use alert_api::{AlertApi, AlertEntry, ExpirationReport};
pub use error::{ApiError, ApiResult};
pub use export::write_report_csv;
pub use inventory_api::{CatalogView, InventoryApi};
