// ── Município ──

use cadastro_api::{Municipio, MunicipioPayload, WireNumber};

use super::status::Status;
use crate::entity::{Entity, FormModel};
use crate::intent::Intent;
use crate::view_model::{RowViewModel, number, text};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MunicipioForm {
    pub codigo_municipio: String,
    pub codigo_uf: String,
    pub nome: String,
    pub status: String,
}

impl FormModel for MunicipioForm {}

impl Entity for Municipio {
    type Form = MunicipioForm;

    const HEADERS: &'static [&'static str] = &["Código", "UF", "Nome", "Status"];
    const SAVED_MESSAGE: &'static str = "Município salvo com sucesso!";

    fn intent(form: &MunicipioForm) -> Intent<MunicipioPayload> {
        Intent::decide(&form.codigo_municipio, |codigo_municipio| MunicipioPayload {
            codigo_municipio,
            codigo_uf: WireNumber::parse(&form.codigo_uf),
            nome: form.nome.trim().to_owned(),
            status: WireNumber::parse(&form.status),
        })
    }

    fn row(&self) -> RowViewModel {
        RowViewModel::new(vec![
            number(self.codigo_municipio),
            number(self.codigo_uf),
            text(self.nome.as_ref()).to_owned(),
            Status::from_code(self.status).to_string(),
        ])
    }
}
