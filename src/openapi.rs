use utoipa::OpenApi;

use crate::handlers::{itens, pedidos};

#[derive(OpenApi)]
#[openapi(
    paths(
        pedidos::create_pedido,
        pedidos::list_pedidos,
        pedidos::get_pedido,
        pedidos::update_pedido,
        pedidos::delete_pedido,
        itens::create_item,
        itens::list_itens,
        itens::get_item,
        itens::update_item,
        itens::delete_item,
    ),
    components(schemas(
        pedidos::CreatePedidoRequest,
        pedidos::UpdatePedidoRequest,
        pedidos::PedidoResponse,
        pedidos::PedidoSummaryResponse,
        itens::CreateItemVendaRequest,
        itens::UpdateItemVendaRequest,
        itens::ItemVendaResponse,
    )),
    tags(
        (name = "pedidos", description = "Pedido CRUD"),
        (name = "itens", description = "Itens scoped to their parent pedido"),
    )
)]
pub struct ApiDoc;
