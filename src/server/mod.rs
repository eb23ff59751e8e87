//! HTTP exposure of the GraphQL schema
//!
//! One route does everything, like the upstream API:
//! - `POST /graphql` executes a GraphQL request body
//! - `GET /graphql?query=...` executes a query string
//! - `GET /graphql` without a query serves the interactive playground
//!
//! Responses are pretty-printed JSON. Execution errors are logged and
//! returned in the `errors` array with HTTP 200; the response is never
//! aborted.

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQLRequest;
use axum::{
    Router,
    extract::{Extension, Query},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::graphql::CatalogSchema;

/// Build the axum router exposing the schema at `/graphql`
pub fn build_router(schema: CatalogSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphql_explorer).post(graphql_handler))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
struct ExplorerParams {
    query: Option<String>,
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<CatalogSchema>,
    request: GraphQLRequest,
) -> Response {
    graphql_response(schema.execute(request.into_inner()).await)
}

/// Handler for browser clients
///
/// Executes the `query` parameter when present, otherwise serves the
/// playground UI.
async fn graphql_explorer(
    Extension(schema): Extension<CatalogSchema>,
    Query(params): Query<ExplorerParams>,
) -> Response {
    match params.query {
        Some(query) => graphql_response(schema.execute(query).await),
        None => {
            Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
        }
    }
}

fn graphql_response(response: async_graphql::Response) -> Response {
    for error in &response.errors {
        tracing::warn!(error = %error.message, "graphql request error");
    }

    match serde_json::to_string_pretty(&response) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to serialize graphql response");
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"errors":[{"message":"response serialization failed"}]}"#,
            )
                .into_response()
        }
    }
}
