use std::sync::Arc;

use crate::domain::models::item::{Item, ItemFields};
use crate::domain::repository::ItemRepository;
use crate::error::AppError;

#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.repository.list().await
    }

    pub async fn get_item(&self, id: &str) -> Result<Item, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(AppError::item_not_found)
    }

    pub async fn create_item(&self, fields: ItemFields) -> Result<Item, AppError> {
        let item = self.repository.create(fields).await?;
        tracing::info!(item_id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    pub async fn update_item(&self, id: &str, fields: ItemFields) -> Result<Item, AppError> {
        let item = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(AppError::item_not_found)?;
        tracing::info!(item_id = %item.id, "item updated");
        Ok(item)
    }

    pub async fn delete_item(&self, id: &str) -> Result<Item, AppError> {
        let item = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(AppError::item_not_found)?;
        tracing::info!(item_id = %item.id, "item deleted");
        Ok(item)
    }

    /// 检查商品是否存在，不存在时返回 NotFound
    pub async fn ensure_exists(&self, id: &str) -> Result<(), AppError> {
        self.get_item(id).await.map(|_| ())
    }

    pub async fn count_items(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
