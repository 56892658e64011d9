//! Hand-rolled request validation. Each public function checks one DTO and
//! surfaces failures as a single 400 response with per-field messages.

use std::collections::HashMap;

use crate::dto;
use crate::error::ApiError;

const MAX_FACT_TITLE: usize = 68;
const MAX_FACT_CONTENT: usize = 600;
const MAX_ART_TITLE: usize = 150;
const MAX_ART_DESCRIPTION: usize = 400;
const MAX_TIMELINE_TITLE: usize = 100;
const MAX_STREETCODE_TITLE: usize = 100;
const MAX_STREETCODE_TEASER: usize = 450;
const MAX_TRANSLITERATION_URL: usize = 100;
const MAX_NAME: usize = 50;
const MIN_PASSWORD: usize = 8;

/// Accumulates per-field failures; first failure per field wins.
#[derive(Debug, Default)]
pub struct Rules {
    errors: HashMap<String, String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_insert(message);
    }

    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, format!("{} is required.", label(field)));
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.fail(
                field,
                format!("{} length should not be longer than {} symbols.", label(field), max),
            );
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.fail(
                field,
                format!("{} should be at least {} symbols long.", label(field), min),
            );
        }
        self
    }

    pub fn positive(&mut self, field: &str, value: i32) -> &mut Self {
        if value <= 0 {
            self.fail(field, format!("{} should be greater than 0.", label(field)));
        }
        self
    }

    pub fn matches(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.fail(field, message.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(
                "One or more validation errors occurred",
                self.errors,
            ))
        }
    }
}

/// "fact_content" -> "Fact content"
fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn is_transliteration(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn looks_like_email(value: &str) -> bool {
    let parts: Vec<&str> = value.split('@').collect();
    parts.len() == 2 && !parts[0].is_empty() && parts[1].contains('.')
}

pub fn fact(title: &str, fact_content: &str, image_id: i32, streetcode_id: i32) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", title)
        .max_len("title", title, MAX_FACT_TITLE)
        .require("fact_content", fact_content)
        .max_len("fact_content", fact_content, MAX_FACT_CONTENT)
        .positive("image_id", image_id)
        .positive("streetcode_id", streetcode_id);
    rules.finish()
}

pub fn art(req: &dto::media::CreateArtRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    if let Some(title) = &req.title {
        rules.max_len("title", title, MAX_ART_TITLE);
    }
    if let Some(description) = &req.description {
        rules.max_len("description", description, MAX_ART_DESCRIPTION);
    }
    rules
        .positive("image_id", req.image_id)
        .positive("streetcode_id", req.streetcode_id);
    rules.finish()
}

pub fn timeline_item(title: &str, streetcode_id: Option<i32>) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", title)
        .max_len("title", title, MAX_TIMELINE_TITLE);
    if let Some(id) = streetcode_id {
        rules.positive("streetcode_id", id);
    }
    rules.finish()
}

pub fn streetcode(
    index: i32,
    title: &str,
    teaser: Option<&str>,
    transliteration_url: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .positive("index", index)
        .require("title", title)
        .max_len("title", title, MAX_STREETCODE_TITLE)
        .require("transliteration_url", transliteration_url)
        .max_len("transliteration_url", transliteration_url, MAX_TRANSLITERATION_URL)
        .matches(
            "transliteration_url",
            is_transliteration(transliteration_url),
            "Transliteration url can only contain lowercase latin letters, digits and hyphens.",
        );
    if let Some(teaser) = teaser {
        rules.max_len("teaser", teaser, MAX_STREETCODE_TEASER);
    }
    if let Some(first_name) = first_name {
        rules.max_len("first_name", first_name, MAX_NAME);
    }
    if let Some(last_name) = last_name {
        rules.max_len("last_name", last_name, MAX_NAME);
    }
    rules.finish()
}

pub fn image(req: &dto::media::CreateImageRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("base64", &req.base64)
        .require("mime_type", &req.mime_type)
        .require("extension", &req.extension);
    if let Some(id) = req.streetcode_id {
        rules.positive("streetcode_id", id);
    }
    rules.finish()
}

pub fn audio(req: &dto::media::CreateAudioRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("base64", &req.base64)
        .require("mime_type", &req.mime_type)
        .require("extension", &req.extension);
    if let Some(id) = req.streetcode_id {
        rules.positive("streetcode_id", id);
    }
    rules.finish()
}

pub fn video(url: &str, streetcode_id: i32) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("url", url)
        .positive("streetcode_id", streetcode_id);
    rules.finish()
}

pub fn partner(req: &dto::partner::CreatePartnerRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", &req.title)
        .max_len("title", &req.title, MAX_STREETCODE_TITLE)
        .positive("logo_id", req.logo_id);
    for link in &req.source_links {
        rules.require("source_links", &link.target_url);
    }
    rules.finish()
}

pub fn category(req: &dto::source::CreateCategoryRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", &req.title)
        .positive("image_id", req.image_id);
    rules.finish()
}

pub fn category_content(req: &dto::source::UpdateCategoryContentRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("text", &req.text)
        .positive("source_link_category_id", req.source_link_category_id)
        .positive("streetcode_id", req.streetcode_id);
    rules.finish()
}

pub fn term(req: &dto::term::CreateTermRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", &req.title)
        .require("description", &req.description);
    rules.finish()
}

pub fn related_term(word: &str, term_id: i32) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("word", word)
        .max_len("word", word, MAX_NAME)
        .positive("term_id", term_id);
    rules.finish()
}

pub fn statistic_record(req: &dto::analytics::CreateStatisticRecordRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .positive("qr_id", req.qr_id)
        .require("address", &req.address)
        .positive("streetcode_id", req.streetcode_id);
    rules.finish()
}

pub fn register(req: &dto::auth::RegisterRequest) -> Result<(), ApiError> {
    let mut rules = Rules::new();
    rules
        .require("user_name", &req.user_name)
        .max_len("user_name", &req.user_name, MAX_NAME)
        .require("email", &req.email)
        .matches("email", looks_like_email(&req.email), "Email is not a valid address.")
        .min_len("password", &req.password, MIN_PASSWORD);
    rules.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn field_errors(err: ApiError) -> HashMap<String, String> {
        match err {
            ApiError::Validation { field_errors, .. } => field_errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn fact_limits() {
        assert!(fact("Title", "Content", 1, 1).is_ok());

        let errors = field_errors(fact("", "Content", 1, 1).unwrap_err());
        assert_eq!(errors["title"], "Title is required.");

        let long_title = "x".repeat(69);
        let errors = field_errors(fact(&long_title, "Content", 1, 1).unwrap_err());
        assert!(errors["title"].contains("68"));

        let long_content = "x".repeat(601);
        let errors = field_errors(fact("Title", &long_content, 1, 1).unwrap_err());
        assert!(errors["fact_content"].contains("600"));

        let errors = field_errors(fact("Title", "Content", 0, -3).unwrap_err());
        assert!(errors.contains_key("image_id"));
        assert!(errors.contains_key("streetcode_id"));
    }

    #[test]
    fn transliteration_url_charset() {
        assert!(is_transliteration("mykola-khvylovy"));
        assert!(is_transliteration("route-66"));
        assert!(!is_transliteration("Mykola"));
        assert!(!is_transliteration("with space"));
        assert!(!is_transliteration("кирилиця"));
        assert!(!is_transliteration(""));
    }

    #[test]
    fn streetcode_rules() {
        assert!(streetcode(1, "Title", None, "title-1", None, None).is_ok());
        let errors =
            field_errors(streetcode(0, "Title", None, "Bad URL", None, None).unwrap_err());
        assert!(errors.contains_key("index"));
        assert!(errors.contains_key("transliteration_url"));
    }

    #[test]
    fn register_rules() {
        let ok = dto::auth::RegisterRequest {
            user_name: "editor".into(),
            email: "editor@streetcode.example".into(),
            password: "longenough".into(),
        };
        assert!(register(&ok).is_ok());

        let bad = dto::auth::RegisterRequest {
            user_name: "editor".into(),
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let errors = field_errors(register(&bad).unwrap_err());
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn labels_are_humanized() {
        assert_eq!(label("fact_content"), "Fact content");
        assert_eq!(label("title"), "Title");
    }
}
