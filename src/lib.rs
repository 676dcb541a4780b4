// ==========================================
// 仓储库存管理系统 - 核心库
// ==========================================
// 系统定位: 仓储管理后台的纯计算核心
// 范围: 过期判定、列表检索、预警分桶、容量汇总
// 数据: 全部来自后端（本库不持久化、不回写）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 纯函数规则
pub mod engine;

// 数据仓储层 - 后端数据读取契约
pub mod repository;

// API 层 - 业务接口
pub mod api;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    Category, CategoryFilter, DomainError, InventoryRecord, LocatedRecord, Product, Severity, SortDirection,
    SortField, Warehouse,
};

pub use engine::{
    AlertBuckets, AlertPartitioner, CapacityCalculator, EngineError, ExpirationClassifier,
    QueryEngine, QueryOptions,
};

pub use api::{AlertApi, ApiError, ExpirationReport, InventoryApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储库存管理系统";
