#![cfg_attr(not(test), no_std)]

pub mod error;

use tokio_postgres::error::SqlState;

pub use futures_util::{TryStream, TryStreamExt};
pub use model::{
    category::Category,
    question::{Question, RawQuestion},
};
pub use tokio_postgres::{tls::NoTls, Client, Config};

pub struct Database(Client);

impl From<Client> for Database {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

fn deserialize_question_from_row(row: tokio_postgres::Row) -> error::Result<Question> {
    let id = row.try_get("id").map_err(|_| error::Error::Fatal)?;
    let question = row.try_get("question").map_err(|_| error::Error::Fatal)?;
    let answer = row.try_get("answer").map_err(|_| error::Error::Fatal)?;
    let category = row.try_get("category").map_err(|_| error::Error::Fatal)?;
    let difficulty = row.try_get("difficulty").map_err(|_| error::Error::Fatal)?;
    Ok(Question { id, raw: RawQuestion { question, answer, category, difficulty } })
}

fn deserialize_category_from_row(row: tokio_postgres::Row) -> error::Result<Category> {
    let id = row.try_get("id").map_err(|_| error::Error::Fatal)?;
    let name = row.try_get("name").map_err(|_| error::Error::Fatal)?;
    Ok(Category { id, name })
}

impl Database {
    /// Streams every question in ascending-identifier order.
    pub async fn questions(&self) -> error::Result<impl TryStream<Ok = Question, Error = error::Error> + '_> {
        Ok(self
            .0
            .query_raw(
                "SELECT id, question, answer, category, difficulty FROM question ORDER BY id",
                core::iter::empty::<i32>(),
            )
            .await
            .map_err(|_| error::Error::Fatal)?
            .map_err(|_| error::Error::Fatal)
            .and_then(|row| core::future::ready(deserialize_question_from_row(row))))
    }

    pub async fn get_question(&self, id: i32) -> error::Result<Question> {
        let row = self
            .0
            .query_opt("SELECT id, question, answer, category, difficulty FROM question WHERE id = $1", &[&id])
            .await
            .map_err(|_| error::Error::Fatal)?
            .ok_or(error::Error::NotFound)?;
        deserialize_question_from_row(row)
    }

    pub async fn add_question(&self, raw: &RawQuestion) -> error::Result<i32> {
        let err = match self
            .0
            .query_opt(
                "INSERT INTO question (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
                &[&raw.question, &raw.answer, &raw.category, &raw.difficulty],
            )
            .await
        {
            Ok(row) => {
                let row = row.ok_or(error::Error::Fatal)?;
                return row.try_get("id").map_err(|_| error::Error::Fatal);
            }
            Err(err) => err,
        };

        let err = err.as_db_error().ok_or(error::Error::Fatal)?;
        if *err.code() == SqlState::FOREIGN_KEY_VIOLATION {
            return Err(error::Error::BadInput);
        }
        if *err.code() != SqlState::CHECK_VIOLATION {
            return Err(error::Error::Fatal);
        }

        let constraint = err.constraint().ok_or(error::Error::Fatal)?;
        Err(match constraint {
            "question_question_check" | "question_answer_check" | "question_difficulty_check" => {
                error::Error::BadInput
            }
            _ => error::Error::Fatal,
        })
    }

    /// Removal is never a silent no-op; deleting an absent row reports back.
    pub async fn remove_question(&self, id: i32) -> error::Result<()> {
        match self.0.execute("DELETE FROM question WHERE id = $1", &[&id]).await {
            Ok(0) => Err(error::Error::NotFound),
            Ok(_) => Ok(()),
            Err(_) => Err(error::Error::Fatal),
        }
    }

    /// Streams every category in ascending-identifier order.
    pub async fn categories(&self) -> error::Result<impl TryStream<Ok = Category, Error = error::Error> + '_> {
        Ok(self
            .0
            .query_raw("SELECT id, name FROM category ORDER BY id", core::iter::empty::<i32>())
            .await
            .map_err(|_| error::Error::Fatal)?
            .map_err(|_| error::Error::Fatal)
            .and_then(|row| core::future::ready(deserialize_category_from_row(row))))
    }

    pub async fn get_category(&self, id: i32) -> error::Result<Category> {
        let row = self
            .0
            .query_opt("SELECT id, name FROM category WHERE id = $1", &[&id])
            .await
            .map_err(|_| error::Error::Fatal)?
            .ok_or(error::Error::NotFound)?;
        deserialize_category_from_row(row)
    }
}
