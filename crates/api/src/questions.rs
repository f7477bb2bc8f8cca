use crate::{error, json_response, select};
use db::{Database, TryStreamExt};
use http_body_util::Full;
use hyper::{body::Bytes, Response, StatusCode};
use model::{question::RawQuestion, request::SearchRequest};
use serde_json::json;

/// Rejects creation payloads the schema alone cannot: blank text and
/// out-of-range difficulty ratings.
fn validate_submission(raw: &RawQuestion) -> error::Result<()> {
    if raw.question.trim().is_empty() || raw.answer.trim().is_empty() {
        return Err(error::Error::InvalidPayload);
    }
    if !(1..=5).contains(&raw.difficulty) {
        return Err(error::Error::InvalidPayload);
    }
    Ok(())
}

pub async fn list(db: &Database, page: usize) -> error::Result<Response<Full<Bytes>>> {
    let questions: Vec<_> = db.questions().await?.try_collect().await?;
    let selected = select::paginate(&questions, page);

    // Page 1 of an empty catalog is an ordinary empty success; asking for a
    // page past the end of a populated one is a caller error.
    if selected.is_empty() && !questions.is_empty() {
        return Err(error::Error::NotFound);
    }

    let categories = super::categories::names(db).await?;
    json_response(
        StatusCode::OK,
        &json!({
            "questions": selected,
            "total_questions": questions.len(),
            "categories": categories,
        }),
    )
}

pub async fn create(db: &Database, payload: &Bytes) -> error::Result<Response<Full<Bytes>>> {
    if payload.is_empty() {
        return Err(error::Error::EmptyPayload);
    }

    let raw: RawQuestion = serde_json::from_slice(payload).map_err(|_| error::Error::InvalidPayload)?;
    validate_submission(&raw)?;

    let id = db.add_question(&raw).await?;
    log::info!("created question {id}");
    json_response(StatusCode::CREATED, &json!({ "id": id }))
}

pub async fn remove(db: &Database, id: i32) -> error::Result<Response<Full<Bytes>>> {
    db.remove_question(id).await?;
    log::info!("deleted question {id}");
    json_response(StatusCode::OK, &json!({ "deleted": id }))
}

pub async fn search(db: &Database, payload: &Bytes) -> error::Result<Response<Full<Bytes>>> {
    if payload.is_empty() {
        return Err(error::Error::EmptyPayload);
    }

    let SearchRequest { term } = serde_json::from_slice(payload).map_err(|_| error::Error::InvalidPayload)?;
    let questions: Vec<_> = db.questions().await?.try_collect().await?;
    let matches = select::search(&questions, &term);
    if matches.is_empty() {
        return Err(error::Error::NoMatches);
    }

    json_response(StatusCode::OK, &json!({ "questions": matches, "total_questions": matches.len() }))
}

#[cfg(test)]
mod tests {
    use super::validate_submission;
    use crate::error::Error;
    use model::question::RawQuestion;

    fn submission() -> RawQuestion {
        RawQuestion {
            question: "In which year did the Apollo 11 mission land?".into(),
            answer: "1969".into(),
            category: 4,
            difficulty: 5,
        }
    }

    #[test]
    fn complete_submissions_pass() {
        assert_eq!(validate_submission(&submission()), Ok(()));
    }

    #[test]
    fn blank_text_is_rejected() {
        let blank_question = RawQuestion { question: "   ".into(), ..submission() };
        assert_eq!(validate_submission(&blank_question), Err(Error::InvalidPayload));

        let blank_answer = RawQuestion { answer: String::new(), ..submission() };
        assert_eq!(validate_submission(&blank_answer), Err(Error::InvalidPayload));
    }

    #[test]
    fn difficulty_stays_within_the_rating_scale() {
        for difficulty in [0, -1, 6, 100] {
            let rated = RawQuestion { difficulty, ..submission() };
            assert_eq!(validate_submission(&rated), Err(Error::InvalidPayload));
        }
    }

    #[test]
    fn creation_payloads_fail_closed_on_missing_fields() {
        let missing: Result<RawQuestion, _> =
            serde_json::from_str(r#"{"question": "q", "answer": "a", "category": 4}"#);
        assert!(missing.is_err());

        let mistyped: Result<RawQuestion, _> =
            serde_json::from_str(r#"{"question": "q", "answer": "a", "category": "four", "difficulty": 5}"#);
        assert!(mistyped.is_err());
    }
}
