use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Pedido {
    pub id: Uuid,
    pub nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemVenda {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A pedido, with its itens when they were requested.
#[derive(Debug, Clone)]
pub struct PedidoView {
    pub pedido: Pedido,
    pub itens: Option<Vec<ItemVenda>>,
}

/// An item, with its parent pedido when it was requested.
#[derive(Debug, Clone)]
pub struct ItemVendaView {
    pub item: ItemVenda,
    pub pedido: Option<Pedido>,
}

#[derive(Debug, Clone)]
pub struct NewPedido {
    pub nome: String,
}

#[derive(Debug, Clone, Default)]
pub struct PedidoChanges {
    pub nome: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewItemVenda {
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
}

#[derive(Debug, Clone, Default)]
pub struct ItemVendaChanges {
    pub num_item: Option<i32>,
    pub produto: Option<String>,
    pub quantidade: Option<i32>,
    pub preco_unitario: Option<BigDecimal>,
}
