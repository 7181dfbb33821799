use serde::{Deserialize, Serialize};

/// 绩效表中的一行 "标签 / 内容"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// 单份绩效表输入; fields 为 None 表示上游未能从文档中解析出表格
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInput {
    pub file_name: String,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
}

impl ReportInput {
    pub fn new(file_name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            file_name: file_name.into(),
            fields: Some(fields),
        }
    }

    pub fn unparseable(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            fields: None,
        }
    }
}
