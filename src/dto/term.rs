use serde::{Deserialize, Serialize};

use crate::models::{RelatedTerm, Term};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDto {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<Term> for TermDto {
    fn from(t: Term) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTermRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedTermDto {
    pub id: i32,
    pub word: String,
    pub term_id: i32,
}

impl From<RelatedTerm> for RelatedTermDto {
    fn from(r: RelatedTerm) -> Self {
        Self {
            id: r.id,
            word: r.word,
            term_id: r.term_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelatedTermRequest {
    pub word: String,
    pub term_id: i32,
}

pub type UpdateRelatedTermRequest = CreateRelatedTermRequest;
