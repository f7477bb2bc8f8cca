pub mod error;
pub mod select;

mod categories;
mod questions;
mod quiz;

use db::Database;
use error::Error;
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Bytes, Incoming},
    header::{HeaderValue, CONTENT_TYPE},
    Request, Response, StatusCode,
};

pub const APPLICATION_JSON: &str = "application/json";

/// Routes one decoded request to its handler. Every classified failure
/// bubbles up here for [`error_response`] to serialize; handlers never pick
/// status codes themselves.
pub async fn try_respond(req: Request<Incoming>, db: &Database) -> error::Result<Response<Full<Bytes>>> {
    let (parts, body) = req.into_parts();
    let payload = body.collect().await.map_err(|_| Error::Fatal)?.to_bytes();

    let path: Vec<_> = parts.uri.path().trim_matches('/').split('/').collect();
    match (parts.method.as_str(), path.as_slice()) {
        ("GET", ["questions"]) => questions::list(db, page_param(parts.uri.query())).await,
        ("POST", ["questions"]) => questions::create(db, &payload).await,
        ("POST", ["questions", "search"]) => questions::search(db, &payload).await,
        ("DELETE", ["questions", id]) => {
            let id = id.parse().map_err(|_| Error::NotFound)?;
            questions::remove(db, id).await
        }
        ("GET", ["categories"]) => categories::list(db).await,
        ("GET", ["categories", id, "questions"]) => {
            let id = id.parse().map_err(|_| Error::NotFound)?;
            categories::questions(db, id).await
        }
        ("POST", ["quizzes"]) => quiz::next(db, &payload).await,
        _ => Err(Error::NotFound),
    }
}

/// Serializes a classified outcome. The mapping from classification to a
/// status code lives here at the transport boundary.
pub fn error_response(err: &Error) -> Response<Full<Bytes>> {
    let status = match err {
        Error::EmptyPayload => StatusCode::BAD_REQUEST,
        Error::InvalidPayload => StatusCode::UNPROCESSABLE_ENTITY,
        Error::NotFound | Error::NoMatches => StatusCode::NOT_FOUND,
        Error::Fatal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = serde_json::json!({ "error": err.code(), "message": err.to_string() });
    match json_response(status, &body) {
        Ok(res) => res,
        Err(_) => {
            let mut res = Response::new(Full::new(Bytes::new()));
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            res
        }
    }
}

fn json_response(status: StatusCode, value: &serde_json::Value) -> error::Result<Response<Full<Bytes>>> {
    let bytes = serde_json::to_vec(value).map_err(|_| Error::Fatal)?;
    let mut res = Response::new(Full::new(bytes.into()));
    *res.status_mut() = status;
    res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    Ok(res)
}

/// Parses the `page` query parameter. Absent, malformed, and non-positive
/// values all fall back to the first page.
fn page_param(query: Option<&str>) -> usize {
    query
        .unwrap_or_default()
        .split('&')
        .filter_map(|chunk| chunk.split_once('='))
        .find_map(|(key, value)| (key == "page").then(|| value.parse::<i64>().ok()).flatten())
        .filter(|&page| page > 0)
        .map_or(1, |page| page as usize)
}
