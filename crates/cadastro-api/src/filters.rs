// ── GET query filters ──
//
// All filters are optional. The backend switches between returning a single
// object and an array depending on which combination is present, so callers
// go through `ApiClient::search`, which normalizes both shapes.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UfFilter {
    #[serde(rename = "codigoUF", skip_serializing_if = "Option::is_none")]
    pub codigo_uf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipioFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_municipio: Option<i64>,
    #[serde(rename = "codigoUF", skip_serializing_if = "Option::is_none")]
    pub codigo_uf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BairroFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_bairro: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_municipio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_pessoa: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}
