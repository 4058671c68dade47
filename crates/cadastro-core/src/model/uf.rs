// ── UF (federative unit) ──

use cadastro_api::{Uf, UfPayload, WireNumber};

use super::status::Status;
use crate::entity::{Entity, FormModel};
use crate::intent::Intent;
use crate::view_model::{RowViewModel, number, text};

/// Inputs of the UF form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UfForm {
    pub codigo_uf: String,
    pub sigla: String,
    pub nome: String,
    pub status: String,
}

impl FormModel for UfForm {}

impl Entity for Uf {
    type Form = UfForm;

    const HEADERS: &'static [&'static str] = &["Código", "Sigla", "Nome", "Status"];
    const SAVED_MESSAGE: &'static str = "UF salva com sucesso!";

    fn intent(form: &UfForm) -> Intent<UfPayload> {
        Intent::decide(&form.codigo_uf, |codigo_uf| UfPayload {
            codigo_uf,
            sigla: form.sigla.trim().to_owned(),
            nome: form.nome.trim().to_owned(),
            status: WireNumber::parse(&form.status),
        })
    }

    fn row(&self) -> RowViewModel {
        RowViewModel::new(vec![
            number(self.codigo_uf),
            text(self.sigla.as_ref()).to_owned(),
            text(self.nome.as_ref()).to_owned(),
            Status::from_code(self.status).to_string(),
        ])
    }
}
