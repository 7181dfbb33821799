use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// 规范化后的姓名 (name 为空表示未解析到姓名, 由调用方记异常)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub name: String,
    pub note: Option<String>,
}

fn bracket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?)（(.*)）\s*$").expect("invalid bracket regex"))
}

fn suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(同学|同學|老师|老師|同事)\s*$").expect("invalid suffix regex"))
}

fn ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid ws regex"))
}

/// 姓名字段 → 展示用姓名 + 括注; 全角括号内容作为备注, 去掉称谓后缀与空白
pub fn normalize_name(raw: &str) -> PersonName {
    let text = raw.trim();
    if text.is_empty() {
        return PersonName::default();
    }

    let (main, note) = match bracket_re().captures(text) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()).filter(|n| !n.is_empty()),
        ),
        None => (text.to_string(), None),
    };

    let main = suffix_re().replace(&main, "");
    let main = ws_re().replace_all(main.trim(), "");

    PersonName {
        name: main.into_owned(),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_becomes_note() {
        let n = normalize_name("张三（机电组）");
        assert_eq!(n.name, "张三");
        assert_eq!(n.note.as_deref(), Some("机电组"));
    }

    #[test]
    fn honorific_suffix_is_stripped() {
        assert_eq!(
            normalize_name("李四同学"),
            PersonName { name: "李四".into(), note: None }
        );
        assert_eq!(normalize_name("王 五 老师").name, "王五");
    }

    #[test]
    fn empty_input_yields_empty_name() {
        assert_eq!(normalize_name(""), PersonName::default());
        assert_eq!(normalize_name("   ").name, "");
    }
}
