use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use log::{info, warn};

use crate::config::Defaults;
use crate::error::AppError;
use crate::message;
use crate::types::{PlatformResponse, SendRequest};
use crate::wechat::WechatClient;

/// Detail page linked from every notification; served verbatim.
const DETAIL_PAGE: &str = include_str!("../static/msg_detail.html");

pub struct AppState {
    pub defaults: Defaults,
    pub wechat: WechatClient,
}

pub async fn root() -> impl IntoResponse {
    "wxpush-bridge is running"
}

pub async fn detail() -> impl IntoResponse {
    Html(DETAIL_PAGE)
}

/// `GET /wxsend`: fields arrive as query parameters. Missing ones simply
/// resolve to empty strings, so parsing itself cannot fail.
pub async fn send_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SendRequest>,
) -> Result<impl IntoResponse, AppError> {
    dispatch(&state, params).await
}

/// `POST /wxsend`: same fields as a JSON body. An undecodable body is the
/// one parse-stage failure in the pipeline.
pub async fn send_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(params) = payload.map_err(|rejection| AppError::MalformedInput(rejection.body_text()))?;
    dispatch(&state, params).await
}

/// Resolve → validate → fetch token → build → deliver. Linear, no retries;
/// validation runs before any network call so bad requests cost nothing
/// upstream.
async fn dispatch(
    state: &AppState,
    params: SendRequest,
) -> Result<Json<PlatformResponse>, AppError> {
    let params = params.resolve(&state.defaults);

    let missing = params.missing_required();
    if !missing.is_empty() {
        return Err(AppError::MissingParameters(missing.join(", ")));
    }

    let token = state
        .wechat
        .fetch_token(&params.appid, &params.secret)
        .await
        .map_err(AppError::TokenExchange)?;

    let message = message::build_message(&params);
    info!("Dispatching template {} to {}", params.template_id, params.userid);

    let result = state
        .wechat
        .send_template(&token, &message)
        .await
        .map_err(AppError::Delivery)?;

    // Platform-level failures are the caller's to interpret; relay as-is.
    if result.errcode != 0 {
        warn!("Platform reported errcode {}: {}", result.errcode, result.errmsg);
    }

    Ok(Json(result))
}
