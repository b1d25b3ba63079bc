use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::pedidos::PedidoSummaryResponse;
use super::IncludeParams;
use crate::domain::errors::DomainError;
use crate::domain::inclusion::RELATION_PEDIDO;
use crate::domain::pedido::{ItemVenda, ItemVendaChanges, ItemVendaView, NewItemVenda};
use crate::domain::ports::PedidoRepository;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of `POST /pedidos/{id}/itens`. The parent comes from the path; a
/// `pedido_id` in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemVendaRequest {
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub preco_unitario: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemVendaRequest {
    pub num_item: Option<i32>,
    pub produto: Option<String>,
    pub quantidade: Option<i32>,
    pub preco_unitario: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemVendaResponse {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    pub preco_unitario: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when `include` asked for `pedido`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedido: Option<PedidoSummaryResponse>,
}

fn parse_preco(raw: &str) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(raw)
        .map_err(|e| DomainError::Store(format!("Invalid preco_unitario '{}': {}", raw, e)))
}

impl TryFrom<CreateItemVendaRequest> for NewItemVenda {
    type Error = DomainError;

    fn try_from(req: CreateItemVendaRequest) -> Result<Self, Self::Error> {
        Ok(NewItemVenda {
            preco_unitario: parse_preco(&req.preco_unitario)?,
            num_item: req.num_item,
            produto: req.produto,
            quantidade: req.quantidade,
        })
    }
}

impl TryFrom<UpdateItemVendaRequest> for ItemVendaChanges {
    type Error = DomainError;

    fn try_from(req: UpdateItemVendaRequest) -> Result<Self, Self::Error> {
        Ok(ItemVendaChanges {
            preco_unitario: req.preco_unitario.as_deref().map(parse_preco).transpose()?,
            num_item: req.num_item,
            produto: req.produto,
            quantidade: req.quantidade,
        })
    }
}

impl From<ItemVenda> for ItemVendaResponse {
    fn from(item: ItemVenda) -> Self {
        ItemVendaResponse {
            id: item.id,
            pedido_id: item.pedido_id,
            num_item: item.num_item,
            produto: item.produto,
            quantidade: item.quantidade,
            preco_unitario: item.preco_unitario.to_string(),
            created_at: item.created_at,
            updated_at: item.updated_at,
            pedido: None,
        }
    }
}

impl From<ItemVendaView> for ItemVendaResponse {
    fn from(view: ItemVendaView) -> Self {
        ItemVendaResponse {
            pedido: view.pedido.map(PedidoSummaryResponse::from),
            ..ItemVendaResponse::from(view.item)
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /pedidos/{id}/itens
#[utoipa::path(
    post,
    path = "/pedidos/{id}/itens",
    params(
        ("id" = Uuid, Path, description = "Parent pedido UUID"),
    ),
    request_body = CreateItemVendaRequest,
    responses(
        (status = 201, description = "Item created"),
        (status = 500, description = "Store error, including an unknown parent pedido"),
    ),
    tag = "itens"
)]
pub async fn create_item(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<Uuid>,
    body: web::Json<CreateItemVendaRequest>,
) -> Result<HttpResponse, AppError> {
    let pedido_id = path.into_inner();
    let input = NewItemVenda::try_from(body.into_inner())?;

    let id = web::block(move || repo.create_item(pedido_id, input)).await??;
    log::info!("Created item {} for pedido {}", id, pedido_id);

    Ok(HttpResponse::Created().finish())
}

/// GET /pedidos/{id}/itens
///
/// The pedido's itens sorted by `num_item`. `?include=pedido` embeds the parent.
#[utoipa::path(
    get,
    path = "/pedidos/{id}/itens",
    params(
        ("id" = Uuid, Path, description = "Parent pedido UUID"),
        IncludeParams,
    ),
    responses(
        (status = 200, description = "Itens sorted by num_item", body = [ItemVendaResponse]),
        (status = 500, description = "Store error"),
    ),
    tag = "itens"
)]
pub async fn list_itens(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<Uuid>,
    query: web::Query<IncludeParams>,
) -> Result<HttpResponse, AppError> {
    let pedido_id = path.into_inner();
    let inclusion = query.inclusion_for(RELATION_PEDIDO);

    let itens = web::block(move || repo.list_itens(pedido_id, inclusion)).await??;

    let body: Vec<ItemVendaResponse> = itens.into_iter().map(ItemVendaResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /pedidos/{id}/itens/{item_id}
///
/// The item must belong to the pedido in the path, otherwise 404.
#[utoipa::path(
    get,
    path = "/pedidos/{id}/itens/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Parent pedido UUID"),
        ("item_id" = Uuid, Path, description = "Item UUID"),
    ),
    responses(
        (status = 200, description = "Item found", body = ItemVendaResponse),
        (status = 404, description = "No such item under this pedido"),
        (status = 500, description = "Store error"),
    ),
    tag = "itens"
)]
pub async fn get_item(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (pedido_id, item_id) = path.into_inner();

    let found = web::block(move || repo.find_item(pedido_id, item_id)).await??;

    match found {
        Some(view) => Ok(HttpResponse::Ok().json(ItemVendaResponse::from(view))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// PATCH|PUT /pedidos/{id}/itens/{item_id}
#[utoipa::path(
    patch,
    path = "/pedidos/{id}/itens/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Parent pedido UUID"),
        ("item_id" = Uuid, Path, description = "Item UUID"),
    ),
    request_body = UpdateItemVendaRequest,
    responses(
        (status = 204, description = "Item updated"),
        (status = 404, description = "No such item under this pedido"),
        (status = 500, description = "Store error"),
    ),
    tag = "itens"
)]
pub async fn update_item(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateItemVendaRequest>,
) -> Result<HttpResponse, AppError> {
    let (pedido_id, item_id) = path.into_inner();
    let changes = ItemVendaChanges::try_from(body.into_inner())?;

    web::block(move || repo.update_item(pedido_id, item_id, changes)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /pedidos/{id}/itens/{item_id}
#[utoipa::path(
    delete,
    path = "/pedidos/{id}/itens/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Parent pedido UUID"),
        ("item_id" = Uuid, Path, description = "Item UUID"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No such item under this pedido"),
        (status = 500, description = "Store error"),
    ),
    tag = "itens"
)]
pub async fn delete_item(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (pedido_id, item_id) = path.into_inner();

    web::block(move || repo.delete_item(pedido_id, item_id)).await??;

    Ok(HttpResponse::NoContent().finish())
}
