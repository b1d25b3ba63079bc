use uuid::Uuid;

use super::errors::DomainError;
use super::inclusion::Inclusion;
use super::pedido::{
    ItemVendaChanges, ItemVendaView, NewItemVenda, NewPedido, PedidoChanges, PedidoView,
};

/// Store client for pedidos and their itens.
///
/// Reads that match nothing return `Ok(None)`. Updates and deletes that match
/// nothing return `DomainError::NotFound`. Every item operation scoped by
/// `pedido_id` must match both the item id and the parent id.
pub trait PedidoRepository: Send + Sync + 'static {
    fn create_pedido(&self, input: NewPedido) -> Result<Uuid, DomainError>;
    fn list_pedidos(&self, inclusion: Inclusion) -> Result<Vec<PedidoView>, DomainError>;
    fn find_pedido(&self, id: Uuid, inclusion: Inclusion)
        -> Result<Option<PedidoView>, DomainError>;
    fn update_pedido(&self, id: Uuid, changes: PedidoChanges) -> Result<(), DomainError>;
    fn delete_pedido(&self, id: Uuid) -> Result<(), DomainError>;

    fn create_item(&self, pedido_id: Uuid, input: NewItemVenda) -> Result<Uuid, DomainError>;
    fn list_itens(
        &self,
        pedido_id: Uuid,
        inclusion: Inclusion,
    ) -> Result<Vec<ItemVendaView>, DomainError>;
    fn find_item(&self, pedido_id: Uuid, item_id: Uuid)
        -> Result<Option<ItemVendaView>, DomainError>;
    fn update_item(
        &self,
        pedido_id: Uuid,
        item_id: Uuid,
        changes: ItemVendaChanges,
    ) -> Result<(), DomainError>;
    fn delete_item(&self, pedido_id: Uuid, item_id: Uuid) -> Result<(), DomainError>;
}
