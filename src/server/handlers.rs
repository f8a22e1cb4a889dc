use super::types::{ChatRequest, ChatResponse, ErrorResponse, OcrResponse};
use crate::{
    Error,
    factcheck::prompt,
    llm::GenerativeClient,
    ocr::{ImageUpload, OcrEngine},
};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a statement to analyze.";
pub const NO_IMAGE_PART: &str = "No image part in the request";
pub const NO_SELECTED_FILE: &str = "No selected file";
pub const NO_TEXT_FOUND: &str = "No recognizable text found in the image.";

const INDEX_HTML: &str = include_str!("../../templates/index.html");

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerativeClient>,
    pub ocr: Arc<dyn OcrEngine>,
    pub search_grounding: bool,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (status, Json(ErrorResponse::new(message)))
}

async fn extract(engine: &dyn OcrEngine, bytes: Vec<u8>) -> crate::Result<String> {
    let image = ImageUpload::new(bytes)?;
    engine.extract_text(&image).await
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let request_id = Uuid::new_v4();

    if !state.client.is_configured() {
        warn!("Chat request {} rejected: no API key configured", request_id);
        return (
            StatusCode::OK,
            Json(ChatResponse::message(Error::MissingApiKey.to_string())),
        );
    }

    let request = payload
        .map_err(|rejection| rejection.body_text())
        .and_then(|Json(body)| ChatRequest::try_from(body));
    let request = match request {
        Ok(request) => request,
        Err(reason) => {
            warn!("Chat request {} has an unreadable body: {}", request_id, reason);
            return (
                StatusCode::OK,
                Json(ChatResponse::message(format!(
                    "An internal error occurred: {}",
                    reason
                ))),
            );
        }
    };

    let language = request.language();
    let statement = request.statement();
    if statement.is_empty() {
        return (StatusCode::OK, Json(ChatResponse::message(EMPTY_MESSAGE_REPLY)));
    }

    info!(
        "Chat request {}: {} chars, answering in {}",
        request_id,
        statement.len(),
        language
    );

    let generate = prompt::build_request(statement, language, state.search_grounding);
    match state.client.generate_content(generate).await {
        Ok(response) => {
            let reply = ChatResponse::from_model(response.text);
            info!(
                "Chat request {} answered, verdict {:?}",
                request_id, reply.verdict
            );
            (StatusCode::OK, Json(reply))
        }
        Err(e) => {
            error!("Chat request {} failed: {}", request_id, e);
            (
                StatusCode::OK,
                Json(ChatResponse::message(format!(
                    "An internal error occurred: {}",
                    e
                ))),
            )
        }
    }
}

pub async fn ocr(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<OcrResponse>, ErrorReply> {
    let request_id = Uuid::new_v4();

    if state.ocr.needs_api_key() && !state.client.is_configured() {
        warn!("OCR request {} rejected: no API key configured", request_id);
        return Err(error_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            Error::MissingApiKey.to_string(),
        ));
    }

    let mut multipart = multipart.map_err(|rejection| {
        warn!("OCR request {} is not multipart: {}", request_id, rejection);
        error_reply(StatusCode::BAD_REQUEST, NO_IMAGE_PART)
    })?;

    let mut upload = None;
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            warn!("OCR request {} has a broken multipart body: {}", request_id, e);
            error_reply(e.status(), format!("Invalid multipart body: {}", e.body_text()))
        })?;
        let Some(field) = field else { break };
        // Parts without a filename are form values, not uploads.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if field.name() != Some("image") {
            continue;
        }

        let bytes = field.bytes().await.map_err(|e| {
            warn!("OCR request {} upload could not be read: {}", request_id, e);
            error_reply(e.status(), format!("Invalid multipart body: {}", e.body_text()))
        })?;
        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(error_reply(StatusCode::BAD_REQUEST, NO_IMAGE_PART));
    };
    if file_name.is_empty() || bytes.is_empty() {
        return Err(error_reply(StatusCode::BAD_REQUEST, NO_SELECTED_FILE));
    }

    info!(
        "OCR request {}: {} ({} bytes) via {}",
        request_id,
        file_name,
        bytes.len(),
        state.ocr.name()
    );

    match extract(state.ocr.as_ref(), bytes.to_vec()).await {
        Ok(text) if text.is_empty() => {
            info!("OCR request {} found no text", request_id);
            Err(error_reply(StatusCode::BAD_REQUEST, NO_TEXT_FOUND))
        }
        Ok(text) => {
            info!("OCR request {} extracted {} chars", request_id, text.len());
            Ok(Json(OcrResponse { text }))
        }
        Err(e) => {
            error!("OCR request {} failed: {}", request_id, e);
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing image: {}", e),
            ))
        }
    }
}
