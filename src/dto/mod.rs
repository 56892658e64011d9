pub mod analytics;
pub mod auth;
pub mod fact;
pub mod media;
pub mod partner;
pub mod source;
pub mod streetcode;
pub mod term;
pub mod timeline;
pub mod toponym;
