//! Booking Engine - 客房预订计费与日历引擎
//!
//! # 架构概述
//!
//! 纯函数核心，无 I/O、无共享可变状态；同样的输入永远得到同样的输出：
//!
//! - **金额** (`money`): Decimal 计算，两位小数四舍五入
//! - **计费** (`pricing`): 折扣分摊、CGST/SGST 税、发票汇总
//! - **日历** (`calendar`): 日期窗口、区间几何、房间行布局、每日占用
//! - **冲突** (`conflicts`): 半开区间重叠检测 (仅提示，不阻止)
//!
//! # 模块结构
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # 配置
//! ├── money/         # 金额工具
//! ├── pricing/       # 折扣、税、发票
//! ├── calendar/      # 日历网格
//! ├── conflicts.rs   # 冲突检测
//! ├── utils/         # 日志、时间、校验
//! └── cli.rs         # 命令行
//! ```

pub mod calendar;
pub mod cli;
pub mod conflicts;
pub mod core;
pub mod money;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use calendar::{CalendarWindow, GridSpec, build_window, position_interval};
pub use conflicts::{BlockEvaluation, evaluate_block_request, find_conflicts, overlaps};
pub use crate::core::{EngineConfig, setup_environment};
pub use pricing::{allocate_discount, compute_invoice, compute_invoice_for, reverse_tax};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger setup
pub use utils::logger::init_logger_with_file;
