//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    error_page::get_404_not_found,
    wallet_page::{
        confirm_add_funds_endpoint, dismiss_add_funds_endpoint, get_snapshot, get_wallet_page,
        open_add_funds_endpoint, select_preset_endpoint, toggle_balance_visibility_endpoint,
        update_amount_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_wallet_page))
        .route(endpoints::SNAPSHOT_API, get(get_snapshot))
        .route(endpoints::OPEN_ADD_FUNDS, post(open_add_funds_endpoint))
        .route(endpoints::ADD_FUNDS_AMOUNT, put(update_amount_endpoint))
        .route(endpoints::ADD_FUNDS_PRESET, post(select_preset_endpoint))
        .route(endpoints::CONFIRM_ADD_FUNDS, post(confirm_add_funds_endpoint))
        .route(endpoints::DISMISS_ADD_FUNDS, post(dismiss_add_funds_endpoint))
        .route(
            endpoints::BALANCE_VISIBILITY,
            post(toggle_balance_visibility_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        AppState, endpoints,
        endpoints::format_endpoint,
        routing::build_router,
        test_utils::{must_select_one, text_of},
    };

    fn test_server() -> (TestServer, AppState) {
        let state = AppState::default();
        let server =
            TestServer::try_new(build_router(state.clone())).expect("Could not create test server.");

        (server, state)
    }

    fn amount_form(text: &str) -> HashMap<&'static str, String> {
        HashMap::from([("amount_text", text.to_owned())])
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (server, _) = test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn add_money_with_htmx() {
        let (server, state) = test_server();

        server
            .post(endpoints::OPEN_ADD_FUNDS)
            .add_header("HX-Request", "true")
            .await
            .assert_status_ok();
        server
            .post(&format_endpoint(endpoints::ADD_FUNDS_PRESET, 100))
            .add_header("HX-Request", "true")
            .await
            .assert_status_ok();
        let response = server
            .post(endpoints::CONFIRM_ADD_FUNDS)
            .add_header("HX-Request", "true")
            .await;

        response.assert_status_ok();
        let fragment = scraper::Html::parse_fragment(&response.text());
        assert_eq!(text_of(&must_select_one(&fragment, "#balance")), "$100.00");
        assert_eq!(state.lock_store().unwrap().wallet().balance(), 100.0);
    }

    #[tokio::test]
    async fn add_money_without_javascript() {
        let (server, _) = test_server();

        server
            .post(endpoints::OPEN_ADD_FUNDS)
            .await
            .assert_status(StatusCode::SEE_OTHER);
        server
            .post(endpoints::CONFIRM_ADD_FUNDS)
            .form(&amount_form("42.5"))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let snapshot = server.get(endpoints::SNAPSHOT_API).await.json::<serde_json::Value>();
        assert_eq!(snapshot["balance"], 42.5);
        assert_eq!(snapshot["history"][0]["title"], "Added Money");
        assert_eq!(snapshot["flow"]["phase"], "closed");
    }

    #[tokio::test]
    async fn typing_an_amount_returns_confirm_button() {
        let (server, _) = test_server();
        server
            .post(endpoints::OPEN_ADD_FUNDS)
            .add_header("HX-Request", "true")
            .await;

        let response = server
            .put(endpoints::ADD_FUNDS_AMOUNT)
            .add_header("HX-Request", "true")
            .form(&amount_form("0"))
            .await;

        response.assert_status_ok();
        let fragment = scraper::Html::parse_fragment(&response.text());
        let button = must_select_one(&fragment, "#confirm-add-funds");
        assert!(button.value().attr("disabled").is_some());
    }

    #[tokio::test]
    async fn snapshot_version_only_moves_on_change() {
        let (server, _) = test_server();
        server
            .post(endpoints::OPEN_ADD_FUNDS)
            .add_header("HX-Request", "true")
            .await;
        let first = server.get(endpoints::SNAPSHOT_API).await.json::<serde_json::Value>();

        server
            .post(endpoints::OPEN_ADD_FUNDS)
            .add_header("HX-Request", "true")
            .await
            .assert_status(StatusCode::CONFLICT);
        let second = server.get(endpoints::SNAPSHOT_API).await.json::<serde_json::Value>();

        assert_eq!(first["version"], second["version"]);
    }

    #[tokio::test]
    async fn preset_path_must_be_a_number() {
        let (server, _) = test_server();

        server
            .post("/api/add-funds/preset/lots")
            .add_header("HX-Request", "true")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
