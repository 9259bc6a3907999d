use async_trait::async_trait;

use crate::domain::models::item::{Item, ItemFields};
use crate::error::AppError;

/// 商品存储接口；找不到时返回 `None`，由服务层决定如何映射
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, AppError>;
    async fn get(&self, id: &str) -> Result<Option<Item>, AppError>;
    async fn create(&self, fields: ItemFields) -> Result<Item, AppError>;
    async fn update(&self, id: &str, fields: ItemFields) -> Result<Option<Item>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<Item>, AppError>;
    async fn count(&self) -> Result<usize, AppError>;
}
