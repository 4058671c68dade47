// ── Pessoa and its nested addresses ──

use cadastro_api::{EnderecoPayload, Pessoa, PessoaPayload, WireNumber};

use super::status::Status;
use crate::entity::{Entity, FormModel};
use crate::intent::Intent;
use crate::view_model::{RowViewModel, number, text};

/// One address block appended to the person form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnderecoForm {
    pub codigo_bairro: String,
    pub nome_rua: String,
    pub numero: String,
    pub complemento: String,
    pub cep: String,
}

impl EnderecoForm {
    fn payload(&self) -> EnderecoPayload {
        EnderecoPayload {
            codigo_bairro: WireNumber::parse(&self.codigo_bairro),
            nome_rua: self.nome_rua.trim().to_owned(),
            numero: self.numero.trim().to_owned(),
            complemento: self.complemento.trim().to_owned(),
            cep: self.cep.trim().to_owned(),
        }
    }
}

/// Inputs of the person form, including every appended address block in
/// the order it was added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PessoaForm {
    pub codigo_pessoa: String,
    pub nome: String,
    pub sobrenome: String,
    pub idade: String,
    pub login: String,
    pub senha: String,
    pub status: String,
    pub enderecos: Vec<EnderecoForm>,
}

impl FormModel for PessoaForm {
    /// Blanks every input, address blocks included. The blocks themselves
    /// stay: there is no way to remove one once added.
    fn reset(&mut self) {
        let slots = self.enderecos.len();
        *self = Self {
            enderecos: vec![EnderecoForm::default(); slots],
            ..Self::default()
        };
    }
}

impl Entity for Pessoa {
    type Form = PessoaForm;

    const HEADERS: &'static [&'static str] = &["Código", "Nome", "Sobrenome", "Idade", "Status"];
    const SAVED_MESSAGE: &'static str = "Pessoa salva com sucesso!";

    fn intent(form: &PessoaForm) -> Intent<PessoaPayload> {
        Intent::decide(&form.codigo_pessoa, |codigo_pessoa| PessoaPayload {
            codigo_pessoa,
            nome: form.nome.trim().to_owned(),
            sobrenome: form.sobrenome.trim().to_owned(),
            idade: WireNumber::parse(&form.idade),
            login: form.login.trim().to_owned(),
            // Passwords go out exactly as typed.
            senha: form.senha.clone(),
            status: WireNumber::parse(&form.status),
            enderecos: form.enderecos.iter().map(EnderecoForm::payload).collect(),
        })
    }

    fn row(&self) -> RowViewModel {
        RowViewModel::new(vec![
            number(self.codigo_pessoa),
            text(self.nome.as_ref()).to_owned(),
            text(self.sobrenome.as_ref()).to_owned(),
            number(self.idade),
            Status::from_code(self.status).to_string(),
        ])
        .with_target(self.codigo_pessoa)
    }
}
