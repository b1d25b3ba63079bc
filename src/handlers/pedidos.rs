use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::itens::ItemVendaResponse;
use super::IncludeParams;
use crate::domain::inclusion::RELATION_ITENS;
use crate::domain::pedido::{NewPedido, Pedido, PedidoChanges, PedidoView};
use crate::domain::ports::PedidoRepository;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePedidoRequest {
    pub nome: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePedidoRequest {
    pub nome: Option<String>,
}

/// A pedido embedded in an item response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PedidoSummaryResponse {
    pub id: Uuid,
    pub nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidoResponse {
    pub id: Uuid,
    pub nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when `include` asked for `itens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itens: Option<Vec<ItemVendaResponse>>,
}

impl From<CreatePedidoRequest> for NewPedido {
    fn from(req: CreatePedidoRequest) -> Self {
        NewPedido { nome: req.nome }
    }
}

impl From<UpdatePedidoRequest> for PedidoChanges {
    fn from(req: UpdatePedidoRequest) -> Self {
        PedidoChanges { nome: req.nome }
    }
}

impl From<Pedido> for PedidoSummaryResponse {
    fn from(p: Pedido) -> Self {
        PedidoSummaryResponse {
            id: p.id,
            nome: p.nome,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PedidoView> for PedidoResponse {
    fn from(view: PedidoView) -> Self {
        let PedidoView { pedido, itens } = view;
        PedidoResponse {
            id: pedido.id,
            nome: pedido.nome,
            created_at: pedido.created_at,
            updated_at: pedido.updated_at,
            itens: itens.map(|itens| itens.into_iter().map(ItemVendaResponse::from).collect()),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /pedidos
#[utoipa::path(
    post,
    path = "/pedidos",
    request_body = CreatePedidoRequest,
    responses(
        (status = 201, description = "Pedido created"),
        (status = 500, description = "Store error"),
    ),
    tag = "pedidos"
)]
pub async fn create_pedido(
    repo: web::Data<dyn PedidoRepository>,
    body: web::Json<CreatePedidoRequest>,
) -> Result<HttpResponse, AppError> {
    let input = NewPedido::from(body.into_inner());

    let id = web::block(move || repo.create_pedido(input)).await??;
    log::info!("Created pedido {}", id);

    Ok(HttpResponse::Created().finish())
}

/// GET /pedidos
///
/// Every pedido, sorted by `nome`. `?include=itens` adds each pedido's itens.
#[utoipa::path(
    get,
    path = "/pedidos",
    params(IncludeParams),
    responses(
        (status = 200, description = "Pedidos sorted by nome", body = [PedidoResponse]),
        (status = 500, description = "Store error"),
    ),
    tag = "pedidos"
)]
pub async fn list_pedidos(
    repo: web::Data<dyn PedidoRepository>,
    query: web::Query<IncludeParams>,
) -> Result<HttpResponse, AppError> {
    let inclusion = query.inclusion_for(RELATION_ITENS);

    let pedidos = web::block(move || repo.list_pedidos(inclusion)).await??;

    let body: Vec<PedidoResponse> = pedidos.into_iter().map(PedidoResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /pedidos/{id}
#[utoipa::path(
    get,
    path = "/pedidos/{id}",
    params(
        ("id" = Uuid, Path, description = "Pedido UUID"),
        IncludeParams,
    ),
    responses(
        (status = 200, description = "Pedido found", body = PedidoResponse),
        (status = 404, description = "Pedido not found"),
        (status = 500, description = "Store error"),
    ),
    tag = "pedidos"
)]
pub async fn get_pedido(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<Uuid>,
    query: web::Query<IncludeParams>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let inclusion = query.inclusion_for(RELATION_ITENS);

    let found = web::block(move || repo.find_pedido(id, inclusion)).await??;

    match found {
        Some(view) => Ok(HttpResponse::Ok().json(PedidoResponse::from(view))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// PATCH|PUT /pedidos/{id}
///
/// Only the fields present in the body are written.
#[utoipa::path(
    patch,
    path = "/pedidos/{id}",
    params(
        ("id" = Uuid, Path, description = "Pedido UUID"),
    ),
    request_body = UpdatePedidoRequest,
    responses(
        (status = 204, description = "Pedido updated"),
        (status = 404, description = "Pedido not found"),
        (status = 500, description = "Store error"),
    ),
    tag = "pedidos"
)]
pub async fn update_pedido(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePedidoRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = PedidoChanges::from(body.into_inner());

    web::block(move || repo.update_pedido(id, changes)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /pedidos/{id}
#[utoipa::path(
    delete,
    path = "/pedidos/{id}",
    params(
        ("id" = Uuid, Path, description = "Pedido UUID"),
    ),
    responses(
        (status = 204, description = "Pedido deleted"),
        (status = 404, description = "Pedido not found"),
        (status = 500, description = "Store error, including a pedido that still has itens"),
    ),
    tag = "pedidos"
)]
pub async fn delete_pedido(
    repo: web::Data<dyn PedidoRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || repo.delete_pedido(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido() -> Pedido {
        let now = Utc::now();
        Pedido {
            id: Uuid::new_v4(),
            nome: "Pedido A".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn response_omits_itens_when_not_requested() {
        let resp = PedidoResponse::from(PedidoView {
            pedido: pedido(),
            itens: None,
        });

        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(json["nome"], "Pedido A");
        assert!(json.get("itens").is_none());
    }

    #[test]
    fn response_keeps_empty_itens_when_requested() {
        let resp = PedidoResponse::from(PedidoView {
            pedido: pedido(),
            itens: Some(vec![]),
        });

        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(json["itens"], serde_json::json!([]));
    }

    #[test]
    fn update_request_with_unknown_fields_is_empty_change_set() {
        let req: UpdatePedidoRequest =
            serde_json::from_str(r#"{"cliente":"x"}"#).expect("unknown fields ignored");

        assert!(PedidoChanges::from(req).nome.is_none());
    }
}
