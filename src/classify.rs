//! Client for the classification API: one multipart POST plus a health probe.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Resposta vazia da API.")]
    EmptyBody,

    #[error("Resposta não é JSON válido.")]
    InvalidJson(#[source] serde_json::Error),
}

/// What gets submitted: exactly one of a local file or pasted text.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

/// Result of one classification. Every field is independently optional: the
/// API is consumed defensively, so a missing or wrongly-typed field renders
/// as a placeholder instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub categoria: Option<String>,
    pub confianca: Option<f64>,
    pub resposta_sugerida: Option<String>,
    pub origem: Option<String>,
}

impl Classification {
    fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };
        Self {
            categoria: field("categoria"),
            confianca: value.get("confianca").and_then(|v| v.as_f64()),
            resposta_sugerida: field("resposta_sugerida"),
            origem: field("origem"),
        }
    }
}

/// An empty 2xx body and a malformed one are distinct failures, so the body
/// is read as text first and only then parsed.
pub fn decode_body(body: &str) -> Result<Classification, Error> {
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(Error::InvalidJson)?;
    Ok(Classification::from_value(&value))
}

#[async_trait::async_trait]
pub trait Classifier {
    async fn classify(&self, input: &Input) -> Result<Classification, Error>;
}

pub struct Client {
    client: reqwest::Client,
    api_base: String,
}

#[derive(serde::Deserialize)]
struct HealthResponse {
    status: String,
}

impl Client {
    pub fn new(api_base: impl AsRef<str>) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse().unwrap());
        Self {
            client: reqwest::ClientBuilder::new().default_headers(headers).build().unwrap(),
            api_base: api_base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    fn form_for(input: &Input) -> Result<reqwest::multipart::Form, Error> {
        Ok(match input {
            Input::Text(text) => reqwest::multipart::Form::new().text("texto", text.clone()),
            Input::File { name, bytes } => {
                let mime = mime_guess::from_path(name).first_or_octet_stream();
                reqwest::multipart::Form::new().part(
                    "arquivo",
                    reqwest::multipart::Part::bytes(bytes.clone())
                        .file_name(name.clone())
                        .mime_str(mime.as_ref())?,
                )
            }
        })
    }

    /// Probe `GET /health`, returning the reported status string.
    pub async fn health(&self) -> Result<String, Error> {
        let resp = self
            .client
            .get(format!("{}/health", self.api_base))
            .send()
            .await
            .map_err(|e| e.without_url())?;

        if resp.error_for_status_ref().is_err() {
            return Err(status_error(resp).await);
        }

        Ok(resp.json::<HealthResponse>().await.map_err(|e| e.without_url())?.status)
    }
}

#[async_trait::async_trait]
impl Classifier for Client {
    async fn classify(&self, input: &Input) -> Result<Classification, Error> {
        let resp = self
            .client
            .post(format!("{}/classify", self.api_base))
            .multipart(Self::form_for(input)?)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        if resp.error_for_status_ref().is_err() {
            return Err(status_error(resp).await);
        }

        let body = resp.text().await.map_err(|e| e.without_url())?;
        decode_body(&body)
    }
}

async fn status_error(resp: reqwest::Response) -> Error {
    let status = resp.status().as_u16();
    // Best effort: the backend puts a human-readable message in the body.
    let message = match resp.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => format!("HTTP {}", status),
    };
    Error::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let parsed = decode_body(
            r#"{"categoria":"Produtivo","confianca":0.91,"resposta_sugerida":"Ok.","origem":"modelo"}"#,
        )
        .unwrap();
        assert_eq!(parsed.categoria.as_deref(), Some("Produtivo"));
        assert_eq!(parsed.confianca, Some(0.91));
        assert_eq!(parsed.resposta_sugerida.as_deref(), Some("Ok."));
        assert_eq!(parsed.origem.as_deref(), Some("modelo"));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(matches!(decode_body(""), Err(Error::EmptyBody)));
    }

    #[test]
    fn test_decode_malformed_body() {
        assert!(matches!(decode_body("<html>oops</html>"), Err(Error::InvalidJson(_))));
    }

    #[test]
    fn test_decode_missing_fields() {
        let parsed = decode_body(r#"{"categoria":"Suporte"}"#).unwrap();
        assert_eq!(parsed.categoria.as_deref(), Some("Suporte"));
        assert_eq!(parsed.confianca, None);
        assert_eq!(parsed.resposta_sugerida, None);
        assert_eq!(parsed.origem, None);
    }

    #[test]
    fn test_decode_fields_are_independent() {
        // A wrongly-typed confidence must not take the other fields down.
        let parsed = decode_body(r#"{"categoria":"Suporte","confianca":"alta"}"#).unwrap();
        assert_eq!(parsed.categoria.as_deref(), Some("Suporte"));
        assert_eq!(parsed.confianca, None);
    }
}
