//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`time`] - 日期与时区工具
//! - [`validation`] - 输入校验

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
