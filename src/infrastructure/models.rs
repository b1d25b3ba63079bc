use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::pedido::{ItemVenda, ItemVendaChanges, NewItemVenda, Pedido, PedidoChanges};
use crate::schema::{itens_venda, pedidos};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = pedidos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PedidoRow {
    pub id: Uuid,
    pub nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = pedidos)]
pub struct NewPedidoRow {
    pub id: Uuid,
    pub nome: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = pedidos)]
pub struct PedidoChangesRow {
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = itens_venda)]
#[diesel(belongs_to(PedidoRow, foreign_key = pedido_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemVendaRow {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = itens_venda)]
pub struct NewItemVendaRow {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub num_item: i32,
    pub produto: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = itens_venda)]
pub struct ItemVendaChangesRow {
    pub num_item: Option<i32>,
    pub produto: Option<String>,
    pub quantidade: Option<i32>,
    pub preco_unitario: Option<BigDecimal>,
}

impl From<PedidoRow> for Pedido {
    fn from(row: PedidoRow) -> Self {
        Pedido {
            id: row.id,
            nome: row.nome,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<ItemVendaRow> for ItemVenda {
    fn from(row: ItemVendaRow) -> Self {
        ItemVenda {
            id: row.id,
            pedido_id: row.pedido_id,
            num_item: row.num_item,
            produto: row.produto,
            quantidade: row.quantidade,
            preco_unitario: row.preco_unitario,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<PedidoChanges> for PedidoChangesRow {
    fn from(changes: PedidoChanges) -> Self {
        PedidoChangesRow { nome: changes.nome }
    }
}

impl From<ItemVendaChanges> for ItemVendaChangesRow {
    fn from(changes: ItemVendaChanges) -> Self {
        ItemVendaChangesRow {
            num_item: changes.num_item,
            produto: changes.produto,
            quantidade: changes.quantidade,
            preco_unitario: changes.preco_unitario,
        }
    }
}

impl NewItemVendaRow {
    pub fn new(pedido_id: Uuid, input: NewItemVenda) -> Self {
        NewItemVendaRow {
            id: Uuid::new_v4(),
            pedido_id,
            num_item: input.num_item,
            produto: input.produto,
            quantidade: input.quantidade,
            preco_unitario: input.preco_unitario,
        }
    }
}
