use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Term {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl Entity for Term {
    const TABLE: &'static str = "terms";
    const NAME: &'static str = "Term";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Alternative spelling/inflection of a term; `word` is unique per term.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RelatedTerm {
    pub id: i32,
    pub word: String,
    pub term_id: i32,
}

impl Entity for RelatedTerm {
    const TABLE: &'static str = "related_terms";
    const NAME: &'static str = "RelatedTerm";

    fn id(&self) -> i32 {
        self.id
    }
}
