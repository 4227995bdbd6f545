use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::{DEFAULT_TAX_RATE_PERCENT, TaxSpec};

use crate::calendar::{CalendarWindow, GridSpec};
use crate::utils::time::parse_timezone;

/// 引擎配置 - 计费与日历的默认值
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件同样生效)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | GST_RATE_PERCENT | 5 | 默认税率 (%) |
/// | GST_ENABLED | true | 房费是否计税 |
/// | ROUND_OFF_ENABLED | true | 是否取整 |
/// | CALENDAR_DAY_COUNT | 14 | 日历窗口天数 |
/// | CALENDAR_CELL_WIDTH | 48 | 日历单元格宽度 (px) |
/// | BUSINESS_TIMEZONE | Asia/Kolkata | 业务时区 ("今天"的判定) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
///
/// # 示例
///
/// ```ignore
/// GST_RATE_PERCENT=12 CALENDAR_DAY_COUNT=30 booking-engine calendar
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// 默认税率 (CGST + SGST 合计)
    pub gst_rate_percent: f64,
    /// 房费默认计税开关
    pub gst_enabled: bool,
    pub round_off_enabled: bool,
    pub calendar_day_count: u32,
    pub calendar_cell_width: f64,
    /// IANA 时区名
    pub business_timezone: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gst_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            gst_enabled: true,
            round_off_enabled: true,
            calendar_day_count: 14,
            calendar_cell_width: 48.0,
            business_timezone: "Asia/Kolkata".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gst_rate_percent: env_parse("GST_RATE_PERCENT")
                .filter(|rate: &f64| rate.is_finite() && (0.0..=100.0).contains(rate))
                .unwrap_or(defaults.gst_rate_percent),
            gst_enabled: env_parse("GST_ENABLED").unwrap_or(defaults.gst_enabled),
            round_off_enabled: env_parse("ROUND_OFF_ENABLED").unwrap_or(defaults.round_off_enabled),
            calendar_day_count: env_parse("CALENDAR_DAY_COUNT")
                .filter(|days: &u32| *days > 0)
                .unwrap_or(defaults.calendar_day_count),
            calendar_cell_width: env_parse("CALENDAR_CELL_WIDTH")
                .filter(|w: &f64| w.is_finite() && *w > 0.0)
                .unwrap_or(defaults.calendar_cell_width),
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .unwrap_or(defaults.business_timezone),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env_parse("LOG_JSON").unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 默认税务设置
    pub fn tax_spec(&self) -> TaxSpec {
        TaxSpec::new(self.gst_enabled, self.gst_rate_percent)
    }

    /// 业务时区 (未知名称回退到 UTC)
    pub fn timezone(&self) -> Tz {
        parse_timezone(&self.business_timezone)
    }

    /// 从 `start` 开始的默认日历窗口
    pub fn window(&self, start: NaiveDate) -> CalendarWindow {
        CalendarWindow::new(start, self.calendar_day_count)
    }

    /// 从 `start` 开始的网格几何
    pub fn grid_spec(&self, start: NaiveDate) -> GridSpec {
        GridSpec {
            window_start: start,
            total_days: self.calendar_day_count,
            cell_width: self.calendar_cell_width,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// 加载 `.env` (如果存在)
pub fn setup_environment() {
    dotenvy::dotenv().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.tax_spec(), TaxSpec::default());
        assert_eq!(config.timezone(), chrono_tz::Asia::Kolkata);
        assert!(config.round_off_enabled);

        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let grid = config.grid_spec(start);
        assert_eq!(grid.total_days, 14);
        assert_eq!(grid.cell_width, 48.0);
        assert_eq!(config.window(start).end_date(), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let config = EngineConfig {
            business_timezone: "Nowhere/Special".into(),
            ..EngineConfig::default()
        };
        assert_eq!(config.timezone(), Tz::UTC);
    }
}
