// Registry API HTTP client
//
// Wraps `reqwest::Client` with collection URL construction, one-or-many
// response normalization, and the 404-with-message rejection convention.
// Endpoint-specific typing lives in `Resource` impls; this module only
// deals with transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::resource::{Resource, ResourceKind};
use crate::transport::TransportConfig;

/// Rejection body: `{"mensagem": "...", "status": 404}`.
#[derive(serde::Deserialize)]
struct RejectionBody {
    #[serde(alias = "message")]
    mensagem: Option<String>,
}

/// GET answers with a bare object for single-record lookups and an array
/// for everything else (including "nothing matched", which is `[]`).
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// HTTP client for the registry API.
///
/// Cheap to clone (the inner `reqwest::Client` is reference counted).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root, e.g. `http://localhost:8080`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the collection URL for a resource: `{base}/{path}`.
    pub fn collection_url(&self, kind: ResourceKind) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{}", kind.path()))?)
    }

    // ── Typed operations ─────────────────────────────────────────────

    /// Fetch the whole collection, in server order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, Error> {
        let url = self.collection_url(R::KIND)?;
        let no_query: [(&str, &str); 0] = [];
        self.get_many(url, &no_query).await
    }

    /// Fetch the records matching `filter`, whatever shape the server uses.
    pub async fn search<R: Resource>(&self, filter: &R::Filter) -> Result<Vec<R>, Error> {
        let url = self.collection_url(R::KIND)?;
        self.get_many(url, filter).await
    }

    /// Fetch a single record by identifier. `[]` from the server means `None`.
    pub async fn find<R: Resource>(&self, id: i64) -> Result<Option<R>, Error> {
        let url = self.collection_url(R::KIND)?;
        let query = [(R::KIND.id_param(), id)];
        let records: Vec<R> = self.get_many(url, &query).await?;
        Ok(records.into_iter().next())
    }

    /// POST a new record. The response body (the refreshed list) is discarded.
    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<(), Error> {
        let url = self.collection_url(R::KIND)?;
        debug!("POST {}", url);
        trace!(body = ?serde_json::to_string(payload).ok(), "request body");
        let resp = self.http.post(url).json(payload).send().await?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// PUT an existing record, identified by the id inside `payload`.
    pub async fn update<R: Resource>(&self, payload: &R::Payload) -> Result<(), Error> {
        let url = self.collection_url(R::KIND)?;
        debug!("PUT {}", url);
        trace!(body = ?serde_json::to_string(payload).ok(), "request body");
        let resp = self.http.put(url).json(payload).send().await?;
        Self::check_status(resp).await.map(|_| ())
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get_many<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &(impl Serialize + ?Sized),
    ) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).query(query).send().await?;
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await?;
        trace!(len = body.len(), "response body received");

        serde_json::from_str::<OneOrMany<T>>(&body)
            .map(OneOrMany::into_vec)
            .map_err(|e| {
                let preview = &body[..floor_char_boundary(&body, 200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body: body.clone(),
                }
            })
    }

    /// Pass successful responses through; turn everything else into an error.
    ///
    /// A 404 carrying a message is a domain rejection. Any other failure,
    /// including a 404 without a readable message, is opaque.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Ok(RejectionBody {
                mensagem: Some(message),
            }) = serde_json::from_str::<RejectionBody>(&body)
            {
                return Err(Error::Rejected {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        let preview = &body[..floor_char_boundary(&body, 200)];
        Err(Error::Http {
            status: status.as_u16(),
            body: preview.to_owned(),
        })
    }
}

/// Largest char boundary not beyond `max` (bodies are UTF-8 Portuguese text).
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_handles_trailing_slash() {
        let client = ApiClient::with_client(
            reqwest::Client::new(),
            Url::parse("http://localhost:8080/").unwrap(),
        );
        assert_eq!(
            client.collection_url(ResourceKind::Municipio).unwrap().as_str(),
            "http://localhost:8080/municipio"
        );
    }

    #[test]
    fn collection_url_keeps_base_path() {
        let client = ApiClient::with_client(
            reqwest::Client::new(),
            Url::parse("http://api.local/cadastro").unwrap(),
        );
        assert_eq!(
            client.collection_url(ResourceKind::Uf).unwrap().as_str(),
            "http://api.local/cadastro/uf"
        );
    }

    #[test]
    fn preview_never_splits_a_character() {
        let s = "ãããã";
        assert_eq!(floor_char_boundary(s, 3), 2);
        assert_eq!(floor_char_boundary(s, 100), s.len());
    }

    #[test]
    fn one_or_many_accepts_both_shapes() {
        let one: OneOrMany<i32> = serde_json::from_str("7").unwrap();
        let many: OneOrMany<i32> = serde_json::from_str("[1, 2]").unwrap();
        let none: OneOrMany<i32> = serde_json::from_str("[]").unwrap();
        assert_eq!(one.into_vec(), vec![7]);
        assert_eq!(many.into_vec(), vec![1, 2]);
        assert!(none.into_vec().is_empty());
    }
}
