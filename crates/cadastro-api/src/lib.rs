// cadastro-api: Async Rust client for the registry API (UF, Município, Bairro, Pessoa)

pub mod client;
pub mod error;
pub mod filters;
pub mod models;
pub mod resource;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use filters::{BairroFilter, MunicipioFilter, PessoaFilter, UfFilter};
pub use models::{
    Bairro, BairroPayload, Endereco, EnderecoPayload, Municipio, MunicipioPayload, Pessoa,
    PessoaPayload, Uf, UfPayload, WireNumber,
};
pub use resource::{Resource, ResourceKind};
pub use transport::{TlsMode, TransportConfig};
