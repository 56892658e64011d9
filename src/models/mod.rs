pub mod analytics;
pub mod fact;
pub mod media;
pub mod partner;
pub mod source;
pub mod streetcode;
pub mod term;
pub mod timeline;
pub mod toponym;
pub mod user;

pub use analytics::StatisticRecord;
pub use fact::Fact;
pub use media::{Art, Audio, Image, Video};
pub use partner::{LogoType, Partner, PartnerSourceLink};
pub use source::{SourceLinkCategory, StreetcodeCategoryContent};
pub use streetcode::{Streetcode, StreetcodeStatus, StreetcodeType};
pub use term::{RelatedTerm, Term};
pub use timeline::{DateViewPattern, HistoricalContext, TimelineItem};
pub use toponym::{StreetcodeToponym, Toponym};
pub use user::{ApplicationUser, Role};

/// A persisted row with an integer surrogate key. Backs the generic
/// repository and the existence-check extractor.
pub trait Entity:
    for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin + 'static
{
    /// Table name; always a compile-time constant, never request input.
    const TABLE: &'static str;
    /// Display name used in client-facing error messages.
    const NAME: &'static str;

    fn id(&self) -> i32;
}
