use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 目录中的商品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// 可变字段，进入存储层之前已经过校验
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl ItemFields {
    pub fn new(name: &str, description: &str, price: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
        }
    }
}

impl Item {
    pub fn new(id: String, fields: ItemFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            created_at,
        }
    }

    /// 整体替换可变字段，id 与 created_at 保持不变
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
        }
    }
}
