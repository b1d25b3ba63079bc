pub mod memory_repo;
pub mod models;
pub mod pedido_repo;

pub use memory_repo::InMemoryPedidoRepository;
pub use pedido_repo::DieselPedidoRepository;
