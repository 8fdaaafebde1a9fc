use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    common::{check_limit, CreatedResponse},
    error::AppResult,
    extract::{ApiJson, ApiQuery},
    state::AppState,
};

use super::dto::{FoodItem, FoodItemQuery, FoodItemRecord};
use super::{repo, services};

pub fn food_item_routes() -> Router<AppState> {
    Router::new().route(
        "/api/fooditems",
        get(list_food_items).post(create_food_item),
    )
}

#[instrument(skip(state, item))]
pub async fn create_food_item(
    State(state): State<AppState>,
    ApiJson(item): ApiJson<FoodItem>,
) -> AppResult<Json<CreatedResponse>> {
    services::validate_food_item(&item)?;
    let id = repo::insert(state.store()?, &item).await?;
    info!(%id, name = %item.name, "food item created");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state))]
pub async fn list_food_items(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<FoodItemQuery>,
) -> AppResult<Json<Vec<FoodItemRecord>>> {
    let limit = check_limit(p.limit)?;
    let filter = services::name_filter(p.q.as_deref());
    let items = repo::list(state.store()?, &filter, limit).await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{
        app::build_app,
        state::AppState,
        store::{Collection, DocumentStore, MemoryDocumentStore},
    };

    async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn created_item_is_found_by_name_substring() {
        let app = build_app(AppState::in_memory());

        let (status, body) = send(
            app.clone(),
            post(
                "/api/fooditems",
                json!({ "name": "Banana", "unit": "piece", "calories_per_unit": 90 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(app, get("/api/fooditems?q=NAN")).await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], json!(id));
        assert_eq!(items[0]["name"], json!("Banana"));
        assert_eq!(items[0]["unit"], json!("piece"));
        assert_eq!(items[0]["calories_per_unit"], json!(90.0));
    }

    #[tokio::test]
    async fn unit_defaults_to_serving_and_camel_case_is_accepted() {
        let app = build_app(AppState::in_memory());
        let (status, _) = send(
            app.clone(),
            post("/api/fooditems", json!({ "name": "Rice", "caloriesPerUnit": 200 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(app, get("/api/fooditems")).await;
        assert_eq!(body[0]["unit"], json!("serving"));
    }

    #[tokio::test]
    async fn rejects_non_positive_calories_and_empty_name() {
        let app = build_app(AppState::in_memory());
        let (status, body) = send(
            app.clone(),
            post("/api/fooditems", json!({ "name": "Air", "calories_per_unit": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("calories_per_unit"));

        let (status, _) = send(
            app.clone(),
            post("/api/fooditems", json!({ "name": "", "calories_per_unit": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(app, get("/api/fooditems")).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let app = build_app(AppState::in_memory());
        for _ in 0..2 {
            let (status, _) = send(
                app.clone(),
                post("/api/fooditems", json!({ "name": "Egg", "calories_per_unit": 70 })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        let (_, body) = send(app, get("/api/fooditems?q=egg")).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn limit_caps_results() {
        let app = build_app(AppState::in_memory());
        for i in 0..4 {
            send(
                app.clone(),
                post(
                    "/api/fooditems",
                    json!({ "name": format!("Snack {i}"), "calories_per_unit": 10 }),
                ),
            )
            .await;
        }
        let (_, body) = send(app.clone(), get("/api/fooditems?limit=2")).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send(app.clone(), get("/api/fooditems?limit=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = send(app, get("/api/fooditems?limit=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_limit_is_a_json_bad_request() {
        let app = build_app(AppState::in_memory());
        let (status, body) = send(app, get("/api/fooditems?limit=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn malformed_stored_item_does_not_fail_the_listing() {
        let store = Arc::new(MemoryDocumentStore::new());
        for body in [
            json!({ "name": "Good", "calories_per_unit": 5 }),
            json!({ "name": "Imported" }),
        ] {
            store
                .create_document(Collection::FoodItem, body)
                .await
                .unwrap();
        }
        let app = build_app(AppState::from_parts(
            AppState::test_config(),
            Some(store as Arc<dyn DocumentStore>),
        ));

        let (status, body) = send(app, get("/api/fooditems")).await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], json!("Good"));
        assert_eq!(items[1]["name"], json!("Imported"));
        assert!(items[1]["id"].is_string());
    }

    #[tokio::test]
    async fn unwired_store_is_a_server_error() {
        let app = build_app(AppState::from_parts(AppState::test_config(), None));
        let (status, body) = send(app, get("/api/fooditems")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], json!("database not configured"));
    }
}
