// ── Resource descriptors ──
//
// Every entity lives under one collection endpoint. Reads, creates and
// updates all hit the same path; only the HTTP method and the presence of
// the identifier in the body tell them apart.

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::filters::{BairroFilter, MunicipioFilter, PessoaFilter, UfFilter};
use crate::models::{
    Bairro, BairroPayload, Municipio, MunicipioPayload, Pessoa, PessoaPayload, Uf, UfPayload,
};

/// The four resource collections exposed by the registry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Uf,
    Municipio,
    Bairro,
    Pessoa,
}

impl ResourceKind {
    /// Path segment of the collection endpoint (no leading slash).
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Query parameter that selects a single record by identifier.
    pub fn id_param(self) -> &'static str {
        match self {
            Self::Uf => "codigoUF",
            Self::Municipio => "codigoMunicipio",
            Self::Bairro => "codigoBairro",
            Self::Pessoa => "codigoPessoa",
        }
    }
}

/// A record type served by one collection endpoint.
///
/// `Filter` is the query-string shape accepted by GET; `Payload` is the
/// body accepted by POST and PUT.
pub trait Resource: DeserializeOwned + Send + 'static {
    const KIND: ResourceKind;

    type Filter: Serialize + Default + Send + Sync;
    type Payload: Serialize + Send + Sync;
}

impl Resource for Uf {
    const KIND: ResourceKind = ResourceKind::Uf;
    type Filter = UfFilter;
    type Payload = UfPayload;
}

impl Resource for Municipio {
    const KIND: ResourceKind = ResourceKind::Municipio;
    type Filter = MunicipioFilter;
    type Payload = MunicipioPayload;
}

impl Resource for Bairro {
    const KIND: ResourceKind = ResourceKind::Bairro;
    type Filter = BairroFilter;
    type Payload = BairroPayload;
}

impl Resource for Pessoa {
    const KIND: ResourceKind = ResourceKind::Pessoa;
    type Filter = PessoaFilter;
    type Payload = PessoaPayload;
}
