use crate::{error, json_response, select};
use db::{Database, TryStreamExt};
use http_body_util::Full;
use hyper::{body::Bytes, Response, StatusCode};
use serde_json::json;
use std::collections::BTreeMap;

/// Collects the catalog's categories into an id-to-name map.
pub(crate) async fn names(db: &Database) -> error::Result<BTreeMap<i32, String>> {
    let categories: Vec<_> = db.categories().await?.try_collect().await?;
    Ok(categories.into_iter().map(|category| (category.id, category.name)).collect())
}

pub async fn list(db: &Database) -> error::Result<Response<Full<Bytes>>> {
    let categories = names(db).await?;
    json_response(StatusCode::OK, &json!({ "categories": categories }))
}

pub async fn questions(db: &Database, category: i32) -> error::Result<Response<Full<Bytes>>> {
    // Browsing an unknown category is a caller error, unlike the quiz
    // selector's tolerant scope handling.
    let current = db.get_category(category).await?;

    let all: Vec<_> = db.questions().await?.try_collect().await?;
    let matches = select::by_category(&all, category);
    json_response(
        StatusCode::OK,
        &json!({
            "questions": matches,
            "total_questions": matches.len(),
            "current_category": current.name,
        }),
    )
}
