use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::inclusion::Inclusion;
use crate::domain::pedido::{
    ItemVenda, ItemVendaChanges, ItemVendaView, NewItemVenda, NewPedido, Pedido, PedidoChanges,
    PedidoView,
};
use crate::domain::ports::PedidoRepository;

#[derive(Default)]
struct Tables {
    pedidos: HashMap<Uuid, Pedido>,
    itens: HashMap<Uuid, ItemVenda>,
}

impl Tables {
    fn itens_of(&self, pedido_id: Uuid) -> Vec<ItemVenda> {
        let mut itens: Vec<ItemVenda> = self
            .itens
            .values()
            .filter(|i| i.pedido_id == pedido_id)
            .cloned()
            .collect();
        itens.sort_by_key(|i| i.num_item);
        itens
    }

    fn item_mut(&mut self, pedido_id: Uuid, item_id: Uuid) -> Option<&mut ItemVenda> {
        self.itens
            .get_mut(&item_id)
            .filter(|i| i.pedido_id == pedido_id)
    }
}

/// Process-local store with the same ordering, foreign-key and composite-key
/// rules as the Postgres schema. State is lost on restart.
#[derive(Default)]
pub struct InMemoryPedidoRepository {
    tables: Mutex<Tables>,
}

impl InMemoryPedidoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, DomainError> {
        self.tables
            .lock()
            .map_err(|e| DomainError::Store(format!("store lock poisoned: {e}")))
    }
}

impl PedidoRepository for InMemoryPedidoRepository {
    fn create_pedido(&self, input: NewPedido) -> Result<Uuid, DomainError> {
        let mut tables = self.lock()?;

        let now = Utc::now();
        let pedido = Pedido {
            id: Uuid::new_v4(),
            nome: input.nome,
            created_at: now,
            updated_at: now,
        };
        let id = pedido.id;
        tables.pedidos.insert(id, pedido);

        Ok(id)
    }

    fn list_pedidos(&self, inclusion: Inclusion) -> Result<Vec<PedidoView>, DomainError> {
        let tables = self.lock()?;

        let mut pedidos: Vec<Pedido> = tables.pedidos.values().cloned().collect();
        pedidos.sort_by(|a, b| a.nome.cmp(&b.nome));

        Ok(pedidos
            .into_iter()
            .map(|pedido| PedidoView {
                itens: inclusion
                    .includes_relations()
                    .then(|| tables.itens_of(pedido.id)),
                pedido,
            })
            .collect())
    }

    fn find_pedido(
        &self,
        id: Uuid,
        inclusion: Inclusion,
    ) -> Result<Option<PedidoView>, DomainError> {
        let tables = self.lock()?;

        Ok(tables.pedidos.get(&id).cloned().map(|pedido| PedidoView {
            itens: inclusion.includes_relations().then(|| tables.itens_of(id)),
            pedido,
        }))
    }

    fn update_pedido(&self, id: Uuid, changes: PedidoChanges) -> Result<(), DomainError> {
        let mut tables = self.lock()?;

        let pedido = tables.pedidos.get_mut(&id).ok_or(DomainError::NotFound)?;
        if let Some(nome) = changes.nome {
            pedido.nome = nome;
        }
        pedido.updated_at = Utc::now();

        Ok(())
    }

    fn delete_pedido(&self, id: Uuid) -> Result<(), DomainError> {
        let mut tables = self.lock()?;

        if !tables.pedidos.contains_key(&id) {
            return Err(DomainError::NotFound);
        }
        if tables.itens.values().any(|i| i.pedido_id == id) {
            return Err(DomainError::Store(format!(
                "pedido {id} is still referenced by itens_venda"
            )));
        }
        tables.pedidos.remove(&id);

        Ok(())
    }

    fn create_item(&self, pedido_id: Uuid, input: NewItemVenda) -> Result<Uuid, DomainError> {
        let mut tables = self.lock()?;

        if !tables.pedidos.contains_key(&pedido_id) {
            return Err(DomainError::Store(format!(
                "pedido_id {pedido_id} is not present in pedidos"
            )));
        }

        let now = Utc::now();
        let item = ItemVenda {
            id: Uuid::new_v4(),
            pedido_id,
            num_item: input.num_item,
            produto: input.produto,
            quantidade: input.quantidade,
            preco_unitario: input.preco_unitario,
            created_at: now,
            updated_at: now,
        };
        let id = item.id;
        tables.itens.insert(id, item);

        Ok(id)
    }

    fn list_itens(
        &self,
        pedido_id: Uuid,
        inclusion: Inclusion,
    ) -> Result<Vec<ItemVendaView>, DomainError> {
        let tables = self.lock()?;

        let pedido = if inclusion.includes_relations() {
            tables.pedidos.get(&pedido_id).cloned()
        } else {
            None
        };

        Ok(tables
            .itens_of(pedido_id)
            .into_iter()
            .map(|item| ItemVendaView {
                item,
                pedido: pedido.clone(),
            })
            .collect())
    }

    fn find_item(
        &self,
        pedido_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<ItemVendaView>, DomainError> {
        let tables = self.lock()?;

        Ok(tables
            .itens
            .get(&item_id)
            .filter(|i| i.pedido_id == pedido_id)
            .cloned()
            .map(|item| ItemVendaView { item, pedido: None }))
    }

    fn update_item(
        &self,
        pedido_id: Uuid,
        item_id: Uuid,
        changes: ItemVendaChanges,
    ) -> Result<(), DomainError> {
        let mut tables = self.lock()?;

        let item = tables
            .item_mut(pedido_id, item_id)
            .ok_or(DomainError::NotFound)?;
        if let Some(num_item) = changes.num_item {
            item.num_item = num_item;
        }
        if let Some(produto) = changes.produto {
            item.produto = produto;
        }
        if let Some(quantidade) = changes.quantidade {
            item.quantidade = quantidade;
        }
        if let Some(preco_unitario) = changes.preco_unitario {
            item.preco_unitario = preco_unitario;
        }
        item.updated_at = Utc::now();

        Ok(())
    }

    fn delete_item(&self, pedido_id: Uuid, item_id: Uuid) -> Result<(), DomainError> {
        let mut tables = self.lock()?;

        tables
            .item_mut(pedido_id, item_id)
            .ok_or(DomainError::NotFound)?;
        tables.itens.remove(&item_id);

        Ok(())
    }
}
