use crate::{
    error, json_response,
    select::{self, Scope},
};
use db::{Database, TryStreamExt};
use http_body_util::Full;
use hyper::{body::Bytes, Response, StatusCode};
use model::request::{QuizCategory, QuizRequest};
use serde_json::json;

/// Clients send `{"type": "click", "id": 0}` when the player picks "All"
/// instead of a specific category.
fn scope_of(category: &QuizCategory) -> Scope {
    if category.kind == "click" && category.id == 0 {
        Scope::All
    } else {
        Scope::Category(category.id)
    }
}

pub async fn next(db: &Database, payload: &Bytes) -> error::Result<Response<Full<Bytes>>> {
    if payload.is_empty() {
        return Err(error::Error::EmptyPayload);
    }

    let QuizRequest { quiz_category, previous_questions } =
        serde_json::from_slice(payload).map_err(|_| error::Error::InvalidPayload)?;

    let questions: Vec<_> = db.questions().await?.try_collect().await?;
    let pool = scope_of(&quiz_category).pool(&questions);

    // A `null` question tells the player the pool is exhausted. Nothing is
    // recorded here; the client grows `previous_questions` itself.
    let next = select::next_question(&pool, &previous_questions, &mut rand::thread_rng());
    json_response(StatusCode::OK, &json!({ "question": next }))
}

#[cfg(test)]
mod tests {
    use super::scope_of;
    use crate::select::Scope;
    use model::request::{QuizCategory, QuizRequest};

    #[test]
    fn the_all_sentinel_selects_every_category() {
        let category = QuizCategory { kind: "click".into(), id: 0 };
        assert_eq!(scope_of(&category), Scope::All);
    }

    #[test]
    fn named_categories_scope_the_pool() {
        let category = QuizCategory { kind: "Science".into(), id: 4 };
        assert_eq!(scope_of(&category), Scope::Category(4));
    }

    #[test]
    fn a_zero_id_without_the_sentinel_kind_is_a_real_scope() {
        let category = QuizCategory { kind: "Science".into(), id: 0 };
        assert_eq!(scope_of(&category), Scope::Category(0));
    }

    #[test]
    fn quiz_payloads_fail_closed_on_missing_fields() {
        let missing_scope: Result<QuizRequest, _> = serde_json::from_str(r#"{"previous_questions": [1, 2]}"#);
        assert!(missing_scope.is_err());

        let missing_exclusions: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"type": "click", "id": 0}}"#);
        assert!(missing_exclusions.is_err());

        let complete: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"type": "click", "id": 0}, "previous_questions": []}"#);
        assert!(complete.is_ok());
    }
}
