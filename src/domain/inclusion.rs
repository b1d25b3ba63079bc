/// Relation name that pulls a pedido's itens.
pub const RELATION_ITENS: &str = "itens";
/// Relation name that pulls an item's parent pedido.
pub const RELATION_PEDIDO: &str = "pedido";

const RELATION_ALL: &str = "all";

/// Whether related entities are fetched alongside the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusion {
    #[default]
    NoRelations,
    WithRelations,
}

impl Inclusion {
    /// Builds the directive from the raw `include` query value, a
    /// comma-separated list of relation names. `relation` is the one relation
    /// the calling endpoint knows how to load; `all` matches any endpoint.
    pub fn from_query(include: Option<&str>, relation: &str) -> Self {
        let requested = include
            .into_iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .any(|name| name == relation || name == RELATION_ALL);

        if requested {
            Inclusion::WithRelations
        } else {
            Inclusion::NoRelations
        }
    }

    pub fn includes_relations(self) -> bool {
        matches!(self, Inclusion::WithRelations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parameter_means_no_relations() {
        assert_eq!(
            Inclusion::from_query(None, RELATION_ITENS),
            Inclusion::NoRelations
        );
    }

    #[test]
    fn empty_parameter_means_no_relations() {
        assert_eq!(
            Inclusion::from_query(Some(""), RELATION_ITENS),
            Inclusion::NoRelations
        );
    }

    #[test]
    fn matching_relation_is_included() {
        assert_eq!(
            Inclusion::from_query(Some("itens"), RELATION_ITENS),
            Inclusion::WithRelations
        );
    }

    #[test]
    fn relation_in_list_with_spaces_is_included() {
        assert_eq!(
            Inclusion::from_query(Some("cliente, pedido"), RELATION_PEDIDO),
            Inclusion::WithRelations
        );
    }

    #[test]
    fn all_matches_every_relation() {
        assert!(Inclusion::from_query(Some("all"), RELATION_ITENS).includes_relations());
        assert!(Inclusion::from_query(Some("all"), RELATION_PEDIDO).includes_relations());
    }

    #[test]
    fn other_endpoint_relation_is_ignored() {
        assert_eq!(
            Inclusion::from_query(Some("pedido"), RELATION_ITENS),
            Inclusion::NoRelations
        );
    }

    #[test]
    fn relation_names_are_case_sensitive() {
        assert_eq!(
            Inclusion::from_query(Some("ITENS"), RELATION_ITENS),
            Inclusion::NoRelations
        );
    }
}
