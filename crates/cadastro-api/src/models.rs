// ── Wire models ──
//
// Response records are deliberately lenient: every field is optional and
// the nested `uf` / `municipio` / `bairro` objects the backend embeds are
// ignored. Request payloads mirror what an HTML form would post: text
// trimmed by the caller, numeric inputs passed through `WireNumber`.

use serde::{Deserialize, Serialize};

// ── Numeric form input ──────────────────────────────────────────────

/// A numeric form input as it travels on the wire.
///
/// Inputs that parse as integers are sent as JSON numbers; anything else is
/// forwarded verbatim so the server can reject it with its own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Int(i64),
    Raw(String),
}

impl WireNumber {
    /// Interpret a raw form input. Blank input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            trimmed
                .parse::<i64>()
                .map_or_else(|_| Self::Raw(trimmed.to_owned()), Self::Int),
        )
    }
}

impl From<i64> for WireNumber {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

// ── Response records ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uf {
    #[serde(rename = "codigoUF", default)]
    pub codigo_uf: Option<i64>,
    #[serde(default)]
    pub sigla: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Municipio {
    #[serde(default)]
    pub codigo_municipio: Option<i64>,
    #[serde(rename = "codigoUF", default)]
    pub codigo_uf: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bairro {
    #[serde(default)]
    pub codigo_bairro: Option<i64>,
    #[serde(default)]
    pub codigo_municipio: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endereco {
    #[serde(default)]
    pub codigo_endereco: Option<i64>,
    #[serde(default)]
    pub codigo_pessoa: Option<i64>,
    #[serde(default)]
    pub codigo_bairro: Option<i64>,
    #[serde(default)]
    pub nome_rua: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
}

/// A person record. The list endpoint and the single lookup share this
/// shape; only the single lookup is guaranteed to carry `enderecos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pessoa {
    #[serde(default)]
    pub codigo_pessoa: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub sobrenome: Option<String>,
    #[serde(default)]
    pub idade: Option<i32>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default, skip_serializing)]
    pub senha: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enderecos: Vec<Endereco>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Request payloads ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UfPayload {
    #[serde(rename = "codigoUF", skip_serializing_if = "Option::is_none")]
    pub codigo_uf: Option<WireNumber>,
    pub sigla: String,
    pub nome: String,
    pub status: Option<WireNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipioPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_municipio: Option<WireNumber>,
    #[serde(rename = "codigoUF")]
    pub codigo_uf: Option<WireNumber>,
    pub nome: String,
    pub status: Option<WireNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BairroPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_bairro: Option<WireNumber>,
    pub codigo_municipio: Option<WireNumber>,
    pub nome: String,
    pub status: Option<WireNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoPayload {
    pub codigo_bairro: Option<WireNumber>,
    pub nome_rua: String,
    pub numero: String,
    pub complemento: String,
    pub cep: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_pessoa: Option<WireNumber>,
    pub nome: String,
    pub sobrenome: String,
    pub idade: Option<WireNumber>,
    pub login: String,
    pub senha: String,
    pub status: Option<WireNumber>,
    pub enderecos: Vec<EnderecoPayload>,
}
