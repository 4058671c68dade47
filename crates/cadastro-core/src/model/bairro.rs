// ── Bairro ──

use cadastro_api::{Bairro, BairroPayload, WireNumber};

use super::status::Status;
use crate::entity::{Entity, FormModel};
use crate::intent::Intent;
use crate::view_model::{RowViewModel, number, text};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BairroForm {
    pub codigo_bairro: String,
    pub codigo_municipio: String,
    pub nome: String,
    pub status: String,
}

impl FormModel for BairroForm {}

impl Entity for Bairro {
    type Form = BairroForm;

    const HEADERS: &'static [&'static str] = &["Código", "Município", "Nome", "Status"];
    const SAVED_MESSAGE: &'static str = "Bairro salvo com sucesso!";

    fn intent(form: &BairroForm) -> Intent<BairroPayload> {
        Intent::decide(&form.codigo_bairro, |codigo_bairro| BairroPayload {
            codigo_bairro,
            codigo_municipio: WireNumber::parse(&form.codigo_municipio),
            nome: form.nome.trim().to_owned(),
            status: WireNumber::parse(&form.status),
        })
    }

    fn row(&self) -> RowViewModel {
        RowViewModel::new(vec![
            number(self.codigo_bairro),
            number(self.codigo_municipio),
            text(self.nome.as_ref()).to_owned(),
            Status::from_code(self.status).to_string(),
        ])
    }
}
