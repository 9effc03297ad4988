//! HTTP front-end
//!
//! One conversion endpoint over multipart form data, mirroring the CLI:
//! the request supplies either an uploaded file or an inline `text` field
//! plus the source/destination formats. Every request is independent; the
//! engine is constructed per call and holds no shared state.

use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::conversion::{ConversionConfig, ConversionEngine};
use crate::formats::Format;

/// Build the service router
pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/convert", post(convert_handler))
}

/// Bind and serve until the process is stopped
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = router();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("listening on http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler() -> &'static str {
    "CSV <-> JSON <-> YAML converter. Use POST /convert"
}

async fn convert_handler(multipart: Multipart) -> Response {
    let form = match ConvertForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(message) => return bad_request(message),
    };

    match form.convert() {
        Ok(converted) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            converted,
        )
            .into_response(),
        Err(message) => bad_request(message),
    }
}

fn bad_request(message: String) -> Response {
    log::warn!("conversion request rejected: {message}");
    (StatusCode::BAD_REQUEST, message).into_response()
}

/// Fields of a conversion request
#[derive(Debug, Default)]
pub struct ConvertForm {
    pub src_format: Option<String>,
    pub dst_format: Option<String>,
    pub delimiter: Option<String>,
    pub pretty: Option<String>,
    pub file: Option<Vec<u8>>,
    pub text: Option<String>,
}

impl ConvertForm {
    /// Collect the known multipart fields; unknown fields are ignored
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, String> {
        let mut form = Self::default();
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => return Err(format!("malformed multipart request: {err}")),
            };

            let name = field.name().map(ToString::to_string);
            match name.as_deref() {
                Some("src_format") => form.src_format = Some(read_text(field).await?),
                Some("dst_format") => form.dst_format = Some(read_text(field).await?),
                Some("delimiter") => form.delimiter = Some(read_text(field).await?),
                Some("pretty") => form.pretty = Some(read_text(field).await?),
                Some("text") => form.text = Some(read_text(field).await?),
                Some("file") => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|err| format!("failed to read file upload: {err}"))?;
                    form.file = Some(bytes.to_vec());
                }
                _ => {}
            }
        }
        Ok(form)
    }

    /// Run the conversion the form describes
    pub fn convert(self) -> Result<String, String> {
        let src = self
            .src_format
            .as_deref()
            .ok_or_else(|| "src_format form field is required.".to_string())?;
        let dst = self
            .dst_format
            .as_deref()
            .ok_or_else(|| "dst_format form field is required.".to_string())?;

        let from = Format::from_name(src).map_err(|e| e.user_message())?;
        let to = Format::from_name(dst).map_err(|e| e.user_message())?;

        let delimiter = match self.delimiter.as_deref() {
            None | Some("") => b',',
            Some(s) => parse_delimiter(s)?,
        };
        let pretty = match self.pretty.as_deref() {
            None | Some("") => true,
            Some(s) => parse_bool(s)?,
        };

        let content = self.content()?;

        let config = ConversionConfig { delimiter, pretty };
        ConversionEngine::new(config)
            .convert(from, to, &content)
            .map_err(|e| e.user_message())
    }

    /// Uploaded file wins over inline text; one of them must be present
    fn content(&self) -> Result<String, String> {
        if let Some(bytes) = &self.file {
            return String::from_utf8(bytes.clone())
                .map_err(|_| "uploaded file is not valid UTF-8.".to_string());
        }
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err("Provide file upload or text form field.".to_string()),
        }
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, String> {
    field
        .text()
        .await
        .map_err(|err| format!("failed to read form field: {err}"))
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err("delimiter must be a single ASCII character.".to_string()),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'.")),
    }
}
