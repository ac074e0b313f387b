//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use roster_domain::PlayerDraft;
use roster_shared::{PlayerBody, PlayerListQuery, PlayerResponse};

use crate::app::App;
use crate::use_cases::ManagementError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerListQuery>, QueryRejection>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let page = app
        .use_cases
        .management
        .player
        .list_page(&query.filter(), &query.page_request())
        .await?;
    Ok(Json(page.map(PlayerResponse::from).items))
}

async fn count_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerListQuery>, QueryRejection>,
) -> Result<Json<u64>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let count = app
        .use_cases
        .management
        .player
        .count(&query.filter())
        .await?;
    Ok(Json(count))
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<PlayerBody>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let draft = PlayerDraft::try_from(body).map_err(ManagementError::from)?;
    let player = app.use_cases.management.player.create(draft).await?;
    Ok(Json(PlayerResponse::from(player)))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = app.use_cases.management.player.get(parse_id(&id)?).await?;
    Ok(Json(PlayerResponse::from(player)))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<PlayerBody>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let patch = PlayerDraft::try_from(body).map_err(ManagementError::from)?;
    let player = app.use_cases.management.player.update(id, patch).await?;
    Ok(Json(PlayerResponse::from(player)))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .management
        .player
        .delete(parse_id(&id)?)
        .await?;
    Ok(StatusCode::OK)
}

/// Non-numeric ids are rejected here; range checks happen in the use case.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Id is invalid".to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound => ApiError::NotFound,
            ManagementError::BadRequest(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::sqlite::SqlitePlayerRepo;

    async fn test_router() -> Router {
        let repo = SqlitePlayerRepo::connect("sqlite::memory:", 1).await.unwrap();
        routes().with_state(Arc::new(App::new(Arc::new(repo))))
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    fn ix_body() -> Value {
        json!({
            "name": "Ix",
            "title": "Conqueror",
            "race": "HUMAN",
            "profession": "WARRIOR",
            "birthday": 1_262_304_000_000_i64,
            "experience": 0,
            "banned": false
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));
    }

    #[tokio::test]
    async fn create_then_update_then_delete() {
        let router = test_router().await;

        let (status, created) = send(&router, "POST", "/rest/players", Some(ix_body())).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();
        assert!(id > 0);
        assert_eq!(created["level"], 0);
        assert_eq!(created["untilNextLevel"], 100);

        let uri = format!("/rest/players/{}", id);
        let (status, updated) =
            send(&router, "POST", &uri, Some(json!({ "experience": 5000 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["level"], 9);
        assert_eq!(updated["untilNextLevel"], 500);
        assert_eq!(updated["name"], "Ix");
        assert_eq!(updated["title"], "Conqueror");
        assert_eq!(updated["birthday"], 1_262_304_000_000_i64);

        let (status, fetched) = send(&router, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, updated);

        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&router, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_ids_are_bad_requests() {
        let router = test_router().await;
        for uri in ["/rest/players/0", "/rest/players/-3", "/rest/players/abc"] {
            let (status, _) = send(&router, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        }
        let (status, _) = send(&router, "DELETE", "/rest/players/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let router = test_router().await;
        let (status, _) = send(&router, "GET", "/rest/players/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(
            &router,
            "POST",
            "/rest/players/999999",
            Some(json!({ "title": "Ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_bodies_are_bad_requests() {
        let router = test_router().await;

        let mut long_name = ix_body();
        long_name["name"] = json!("abcdefghijklm");
        let (status, message) = send(&router, "POST", "/rest/players", Some(long_name)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, Value::String("Name is incorrect".into()));

        let mut unknown_race = ix_body();
        unknown_race["race"] = json!("WIZARD");
        let (status, _) = send(&router, "POST", "/rest/players", Some(unknown_race)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut early = ix_body();
        early["birthday"] = json!(946_674_000_482_i64);
        let (status, message) = send(&router, "POST", "/rest/players", Some(early)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, Value::String("Date is invalid".into()));
    }

    #[tokio::test]
    async fn banned_false_in_update_does_not_lift_ban() {
        let router = test_router().await;
        let mut body = ix_body();
        body["banned"] = json!(true);
        let (_, created) = send(&router, "POST", "/rest/players", Some(body)).await;
        let uri = format!("/rest/players/{}", created["id"]);

        let (status, updated) = send(&router, "POST", &uri, Some(json!({ "banned": false }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["banned"], true);
    }

    #[tokio::test]
    async fn list_filters_pages_and_counts() {
        let router = test_router().await;
        let fixtures = [
            ("Ix", "HUMAN", 0, false),
            ("Nix", "DWARF", 1_500, true),
            ("Arwen", "ELF", 40_000, false),
            ("ixia", "HUMAN", 300, false),
            ("Bix", "HUMAN", 90_000, false),
        ];
        for (name, race, experience, banned) in fixtures {
            let mut body = ix_body();
            body["name"] = json!(name);
            body["race"] = json!(race);
            body["experience"] = json!(experience);
            body["banned"] = json!(banned);
            let (status, _) = send(&router, "POST", "/rest/players", Some(body)).await;
            assert_eq!(status, StatusCode::OK);
        }

        // Default page: first three by id
        let (_, page) = send(&router, "GET", "/rest/players", None).await;
        let names: Vec<_> = page.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
        assert_eq!(names, vec![json!("Ix"), json!("Nix"), json!("Arwen")]);

        let (_, count) = send(&router, "GET", "/rest/players/count", None).await;
        assert_eq!(count, 5);

        let (_, count) = send(&router, "GET", "/rest/players/count?name=ix&race=HUMAN", None).await;
        assert_eq!(count, 2);

        let (_, count) = send(&router, "GET", "/rest/players/count?banned=false&minExperience=300", None).await;
        assert_eq!(count, 3);

        let (_, page) = send(
            &router,
            "GET",
            "/rest/players?race=HUMAN&order=EXPERIENCE&pageNumber=0&pageSize=2",
            None,
        )
        .await;
        let names: Vec<_> = page.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
        assert_eq!(names, vec![json!("Ix"), json!("ixia")]);

        let (_, page) = send(
            &router,
            "GET",
            "/rest/players?race=HUMAN&order=EXPERIENCE&pageNumber=1&pageSize=2",
            None,
        )
        .await;
        let names: Vec<_> = page.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
        assert_eq!(names, vec![json!("Bix")]);
    }

    #[tokio::test]
    async fn far_future_birthday_bounds_match_nothing() {
        let router = test_router().await;
        let (status, _) = send(&router, "POST", "/rest/players", Some(ix_body())).await;
        assert_eq!(status, StatusCode::OK);

        let (_, count) = send(&router, "GET", "/rest/players/count?after=9000000000000000000", None).await;
        assert_eq!(count, 0);
        let (_, count) = send(&router, "GET", "/rest/players/count?before=-9000000000000000000", None).await;
        assert_eq!(count, 0);
        let (_, page) = send(&router, "GET", "/rest/players?after=9000000000000000000", None).await;
        assert_eq!(page, json!([]));
    }

    #[tokio::test]
    async fn enum_query_parameters_ignore_case() {
        let router = test_router().await;
        for (name, experience) in [("Ix", 500), ("Bix", 100)] {
            let mut body = ix_body();
            body["name"] = json!(name);
            body["experience"] = json!(experience);
            send(&router, "POST", "/rest/players", Some(body)).await;
        }

        let (status, page) = send(
            &router,
            "GET",
            "/rest/players?race=human&profession=Warrior&order=experience",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = page.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
        assert_eq!(names, vec![json!("Bix"), json!("Ix")]);

        let (status, _) = send(&router, "GET", "/rest/players?order=rank", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_query_is_bad_request() {
        let router = test_router().await;
        let (status, _) = send(&router, "GET", "/rest/players?minLevel=high", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
