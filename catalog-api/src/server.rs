use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::api::{health, items};
use crate::config::{ServerConfig, StoreConfig};
use crate::domain::repository::ItemRepository;
use crate::domain::services::item_service::ItemService;
use crate::infrastructure::memory::item_store::ItemStore;
use crate::middleware::log_errors::log_errors;

#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
}

impl AppState {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            items: ItemService::new(repository),
        }
    }

    /// 按配置创建内存存储
    pub fn in_memory(store: &StoreConfig) -> Self {
        let store = if store.seed_sample_items {
            ItemStore::with_sample_items()
        } else {
            ItemStore::new()
        };
        Self::new(Arc::new(store))
    }
}

pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    let app_state = Arc::new(state);

    // 其余路径交给静态文件目录，"/" 返回 index.html
    let static_files = ServeDir::new(&server.static_dir);

    Router::new()
        .merge(items::routes())
        .merge(health::routes())
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(log_errors)),
        )
        .with_state(app_state)
}
