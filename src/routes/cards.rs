use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Card, CardId, DataResponse};
use crate::state::AppState;
use crate::validation::{Validator, NOT_AN_OBJECT};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{id}", get(get_card).delete(delete_card))
}

/// GET /cards - List all cards in creation order.
async fn list_cards(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Card>>>, ApiError> {
    let cards = state.store.list()?;
    Ok(Json(DataResponse { data: cards }))
}

/// POST /cards - Create a card from `{suit, value}`.
async fn create_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<DataResponse<Card>>), ApiError> {
    let payload = decode_body(&body)?;
    let new_card = Validator::parse(&payload)?;

    let card = state.store.create(new_card).map_err(|e| {
        tracing::debug!("Rejected card: {}", e);
        ApiError::from(e)
    })?;

    tracing::info!("Created card {} ({} of {})", card.id, card.value, card.suit);
    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// GET /cards/{id} - Get a single card.
async fn get_card(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DataResponse<Card>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let card = state.store.get(id).map_err(|e| {
        tracing::debug!("Lookup failed: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(DataResponse { data: card }))
}

/// DELETE /cards/{id} - Remove a card and return it.
async fn delete_card(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DataResponse<Card>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let card = state.store.delete(id).map_err(|e| {
        tracing::debug!("Delete failed: {}", e);
        ApiError::from(e)
    })?;

    tracing::info!("Deleted card {}", card.id);
    Ok(Json(DataResponse { data: card }))
}

/// Empty bodies decode as null. Malformed JSON is rejected as a non-object payload.
fn decode_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Malformed JSON body: {}", e);
        ApiError::ValidationFailed(vec![NOT_AN_OBJECT.to_string()])
    })
}

fn parse_id(raw: &str) -> Result<CardId, ApiError> {
    CardId::parse(raw).ok_or(ApiError::InvalidIdentifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b"").unwrap(), Value::Null);
        assert_eq!(decode_body(b"  \n").unwrap(), Value::Null);
        assert_eq!(
            decode_body(br#"{"suit":"Hearts"}"#).unwrap(),
            serde_json::json!({ "suit": "Hearts" })
        );
        match decode_body(b"{not json") {
            Err(ApiError::ValidationFailed(errors)) => {
                assert_eq!(errors, vec![NOT_AN_OBJECT.to_string()])
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), CardId(12));
        assert!(matches!(parse_id("0"), Err(ApiError::InvalidIdentifier)));
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidIdentifier)));
    }
}
