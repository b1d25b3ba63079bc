pub mod itens;
pub mod pedidos;

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::domain::inclusion::Inclusion;

/// Query string accepted by the list/get endpoints.
///
/// `include` may be repeated; `?include=itens&include=pedido` reads the same
/// as `?include=itens,pedido`. Other keys are ignored.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeParams {
    /// Comma-separated relations to load eagerly (`itens`, `pedido` or `all`).
    pub include: Option<String>,
}

impl From<Vec<(String, String)>> for IncludeParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, value)| key == "include" && !value.is_empty())
            .map(|(_, value)| value)
            .collect();

        IncludeParams {
            include: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

impl<'de> Deserialize<'de> for IncludeParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(String, String)>::deserialize(deserializer).map(IncludeParams::from)
    }
}

impl IncludeParams {
    pub fn inclusion_for(&self, relation: &str) -> Inclusion {
        let inclusion = Inclusion::from_query(self.include.as_deref(), relation);
        log::debug!("include={:?} -> {:?}", self.include, inclusion);
        inclusion
    }
}
