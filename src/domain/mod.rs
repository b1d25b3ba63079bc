pub mod errors;
pub mod inclusion;
pub mod pedido;
pub mod ports;
