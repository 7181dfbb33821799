use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 量化表标准事项 (名称 + 单价)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardItem {
    pub name: String,
    pub price: BigDecimal,
}

impl StandardItem {
    pub fn new(name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// 量化表: 保持原表顺序 (模糊匹配同分时按此顺序取前者)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<StandardItem>,
}

impl Catalog {
    pub fn new(items: Vec<StandardItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[StandardItem] {
        &self.items
    }

    /// 按名称精确查找; 重名时后出现的条目生效
    pub fn get(&self, name: &str) -> Option<&StandardItem> {
        self.items.iter().rev().find(|it| it.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<StandardItem>> for Catalog {
    fn from(items: Vec<StandardItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_later_wins() {
        let catalog = Catalog::new(vec![
            StandardItem::new("讲解", BigDecimal::from(50)),
            StandardItem::new("杂活", BigDecimal::from(10)),
            StandardItem::new("讲解", BigDecimal::from(60)),
        ]);
        assert_eq!(catalog.get("讲解").map(|it| it.price.clone()), Some(BigDecimal::from(60)));
        assert!(catalog.contains("杂活"));
        assert!(!catalog.contains("紧急讲解"));
        assert_eq!(catalog.len(), 3);
    }
}
