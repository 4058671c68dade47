// ── Domain model ──
//
// Raw form types for the four entities, plus the `Entity` impls that bind
// each API record to its form and its table row.

pub mod bairro;
pub mod municipio;
pub mod pessoa;
pub mod status;
pub mod uf;

pub use bairro::BairroForm;
pub use municipio::MunicipioForm;
pub use pessoa::{EnderecoForm, PessoaForm};
pub use status::Status;
pub use uf::UfForm;
