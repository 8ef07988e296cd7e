use crate::server::AppContext;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use marquee_common::{ExternalIds, MediaKind};
use serde::{Deserialize, Deserializer};

pub fn metadata_routes() -> Router<AppContext> {
    Router::new()
        .route("/health", get(health))
        .route("/metadata/resolve", get(resolve))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    tmdb_id: Option<u64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    trakt_id: Option<u64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    tvdb_id: Option<u64>,
    imdb_id: Option<String>,
}

/// `?tmdbId=` is the same as leaving the parameter out.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ResolveQuery {
    /// Zero and empty values count as "not supplied".
    fn ids(&self) -> ExternalIds {
        ExternalIds {
            tmdb: self.tmdb_id.filter(|id| *id > 0),
            trakt: self.trakt_id.filter(|id| *id > 0),
            tvdb: self.tvdb_id.filter(|id| *id > 0),
            imdb: self
                .imdb_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

async fn resolve(
    State(ctx): State<AppContext>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.body_text()),
    };

    let kind = match params.kind.as_deref().map(str::parse::<MediaKind>) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
        None => return error_response(StatusCode::BAD_REQUEST, "Missing 'type' parameter"),
    };

    let ids = params.ids();
    match ctx.resolver.resolve(&ids, kind).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => {
            tracing::debug!("Resolve request for {:?} ({}) failed: {}", ids, kind, e);
            error_response(StatusCode::NOT_FOUND, "metadata unavailable")
        }
    }
}
