use crate::error::SettleError;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub settlement: SettlementConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// 单个账户到账上限
    pub cap: BigDecimal,
    /// CSV 导出根目录
    pub export_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            settlement: SettlementConfig {
                cap: BigDecimal::from(800),
                export_dir: "./export".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 默认值 < settle.toml (可选) < 环境变量 SETTLE_*, 层级用 `__` 分隔
    pub fn load() -> Result<Self, SettleError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("settlement.cap", "800")?
            .set_default("settlement.export_dir", "./export")?
            .add_source(config::File::with_name("settle").required(false))
            .add_source(
                config::Environment::with_prefix("SETTLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let cfg: AppConfig = settings.try_deserialize()?;
        if cfg.settlement.cap <= BigDecimal::from(0) {
            return Err(SettleError::Config(format!(
                "settlement.cap must be positive, got {}",
                cfg.settlement.cap
            )));
        }
        Ok(cfg)
    }

    /// 从环境变量加载配置; 出错时记录告警并使用默认值
    pub fn from_env() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("配置加载失败, 使用默认配置: {}", e);
                Self::default()
            }
        }
    }
}
