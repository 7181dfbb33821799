use std::fmt;

/// 外部输入/输出环节的致命错误; 抽取与分配本身不会失败
#[derive(Debug)]
pub enum SettleError {
    /// 量化表中找不到 "事项名称 / 单价" 表头
    CatalogHeader,
    /// 有表头但没有任何有效事项
    EmptyCatalog,
    /// 配置加载失败
    Config(String),
    /// CSV 读写失败
    Csv(String),
    /// 文件读写失败
    Io(String),
}

impl fmt::Display for SettleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogHeader => write!(
                f,
                "未能在量化表中识别“事项名称/单价”列, 请确认模板含有“标准事项(或事项名称)”与“单价”两列"
            ),
            Self::EmptyCatalog => write!(f, "量化表中没有有效的标准事项"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for SettleError {}

impl From<std::io::Error> for SettleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for SettleError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

impl From<config::ConfigError> for SettleError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
