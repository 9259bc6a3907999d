use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Mutex, MutexGuard};

use crate::domain::models::item::{Item, ItemFields};
use crate::domain::repository::ItemRepository;
use crate::error::AppError;

// (name, description, price, category, created_at 年月日)
const SAMPLE_ITEMS: [(&str, &str, f64, &str, (i32, u32, u32)); 3] = [
    ("Sample Laptop", "High-performance laptop for development", 999.99, "Electronics", (2024, 1, 15)),
    ("JavaScript Book", "Complete guide to modern JavaScript", 29.99, "Books", (2024, 1, 16)),
    ("Wireless Headphones", "Noise-cancelling wireless headphones", 199.99, "Electronics", (2024, 1, 17)),
];

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// 进程内商品存储
///
/// 集合与 id 计数器由同一把锁保护，所有操作都在一个临界区内完成。
/// id 单调递增，删除后也不会复用。
pub struct ItemStore {
    inner: Mutex<Inner>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// 预置三条示例数据，id 为 1..=3
    pub fn with_sample_items() -> Self {
        let mut inner = Inner {
            items: Vec::with_capacity(SAMPLE_ITEMS.len()),
            next_id: 1,
        };
        for (name, description, price, category, (year, month, day)) in SAMPLE_ITEMS {
            let created_at = Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .unwrap_or_default();
            Self::insert(&mut inner, ItemFields::new(name, description, price, category), created_at);
        }
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("item store lock poisoned".to_string()))
    }

    fn insert(inner: &mut Inner, fields: ItemFields, created_at: DateTime<Utc>) -> Item {
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let item = Item::new(id, fields, created_at);
        inner.items.push(item.clone());
        item
    }

    /// 按 created_at 倒序返回快照，时间相同时保持插入顺序
    pub fn list(&self) -> Result<Vec<Item>, AppError> {
        let inner = self.lock()?;
        let mut items: Vec<Item> = inner.items.iter().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    pub fn get(&self, id: &str) -> Result<Option<Item>, AppError> {
        let inner = self.lock()?;
        Ok(inner.items.iter().find(|item| item.id == id).cloned())
    }

    pub fn create(&self, fields: ItemFields) -> Result<Item, AppError> {
        self.create_at(fields, Utc::now())
    }

    /// 以指定时间创建，用于导入已有记录
    pub fn create_at(&self, fields: ItemFields, created_at: DateTime<Utc>) -> Result<Item, AppError> {
        let mut inner = self.lock()?;
        Ok(Self::insert(&mut inner, fields, created_at))
    }

    pub fn update(&self, id: &str, fields: ItemFields) -> Result<Option<Item>, AppError> {
        let mut inner = self.lock()?;
        Ok(inner.items.iter_mut().find(|item| item.id == id).map(|item| {
            item.apply(fields);
            item.clone()
        }))
    }

    pub fn delete(&self, id: &str) -> Result<Option<Item>, AppError> {
        let mut inner = self.lock()?;
        Ok(inner
            .items
            .iter()
            .position(|item| item.id == id)
            .map(|index| inner.items.remove(index)))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.items.len())
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn list(&self) -> Result<Vec<Item>, AppError> {
        ItemStore::list(self)
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, AppError> {
        ItemStore::get(self, id)
    }

    async fn create(&self, fields: ItemFields) -> Result<Item, AppError> {
        ItemStore::create(self, fields)
    }

    async fn update(&self, id: &str, fields: ItemFields) -> Result<Option<Item>, AppError> {
        ItemStore::update(self, id, fields)
    }

    async fn delete(&self, id: &str) -> Result<Option<Item>, AppError> {
        ItemStore::delete(self, id)
    }

    async fn count(&self) -> Result<usize, AppError> {
        self.len()
    }
}
