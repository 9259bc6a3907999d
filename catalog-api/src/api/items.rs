use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::models::item::{Item, ItemFields};
use crate::error::AppError;
use crate::server::AppState;

pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be a positive number";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// 创建/更新共用的请求体，字段均可缺省，由 `into_fields` 统一校验
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
}

/// 价格既可以是数字，也可以是数字字符串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl ItemPayload {
    pub fn into_fields(self) -> Result<ItemFields, AppError> {
        let name = required_text(self.name);
        let description = required_text(self.description);
        let category = required_text(self.category);
        let price = self.price.filter(|price| match price {
            PriceInput::Text(text) => !text.trim().is_empty(),
            PriceInput::Number(_) => true,
        });

        let (Some(name), Some(description), Some(category), Some(price)) =
            (name, description, category, price)
        else {
            return Err(AppError::Validation(FIELDS_REQUIRED.to_string()));
        };

        Ok(ItemFields {
            name,
            description,
            price: parse_price(price)?,
            category,
        })
    }
}

fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_price(price: PriceInput) -> Result<f64, AppError> {
    let value = match price {
        PriceInput::Number(value) => Some(value),
        PriceInput::Text(text) => text.trim().parse::<f64>().ok(),
    };

    value
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or_else(|| AppError::Validation(PRICE_NOT_POSITIVE.to_string()))
}

fn parse_body(payload: Result<Json<ItemPayload>, JsonRejection>) -> Result<ItemFields, AppError> {
    let Json(payload) = payload
        .map_err(|rejection| AppError::Validation(format!("Invalid request body: {}", rejection.body_text())))?;
    payload.into_fields()
}

async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.get_item(&id).await?;
    Ok(Json(item))
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let fields = parse_body(payload)?;

    let item = state.items.create_item(fields).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    // 先确认存在，再校验请求体
    state.items.ensure_exists(&id).await?;
    let fields = parse_body(payload)?;

    let item = state.items.update_item(&id, fields).await?;

    Ok(Json(item))
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.items.delete_item(&id).await?;

    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
