//! Landing route handler.

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::Query;
use serde::Deserialize;

use snapvid_models::{NormalizedTarget, ValidationError};

use crate::state::AppState;
use crate::view::Page;

/// Query parameters for the landing route.
///
/// `url` may appear more than once; the first value wins.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub url: Vec<String>,
}

/// Landing route.
///
/// Without a `url` parameter this renders the default view. With one, the
/// full pipeline runs: validate, resolve, render. Every outcome is a
/// terminal page state; nothing propagates past this handler.
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let param = query.url.first().map(String::as_str);

    let page = match NormalizedTarget::from_param(param) {
        Err(ValidationError::MissingInput) => Page::Landing,
        Err(reason) => Page::Error(reason.to_string()),
        Ok(target) => match state.resolver.resolve(&target).await {
            Ok(result) => Page::Result { target, result },
            Err(err) => Page::Error(err.to_string()),
        },
    };

    Html(page.render())
}
