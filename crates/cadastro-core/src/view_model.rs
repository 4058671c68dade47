// ── Table row view models ──
//
// Pure projections from records to display strings, so rendering can be
// tested without any front end attached.

use serde::Serialize;

use cadastro_api::Endereco;

use crate::entity::Entity;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub cells: Vec<String>,
    /// Identifier to act on when the row is activated (Pessoa rows open
    /// the address overlay).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
}

impl RowViewModel {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Option<i64>) -> Self {
        self.target = target;
        self
    }
}

/// Project records into rows, preserving order.
pub fn rows<E: Entity>(records: &[E]) -> Vec<RowViewModel> {
    records.iter().map(Entity::row).collect()
}

/// Read-only description of a stored address, as shown in the overlay.
pub fn address_line(endereco: &Endereco) -> String {
    format!(
        "Rua: {}, Número: {}, Complemento: {}, CEP: {}",
        text(endereco.nome_rua.as_ref()),
        text(endereco.numero.as_ref()),
        text(endereco.complemento.as_ref()),
        text(endereco.cep.as_ref()),
    )
}

pub(crate) fn text(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

pub(crate) fn number<N: ToString>(value: Option<N>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
