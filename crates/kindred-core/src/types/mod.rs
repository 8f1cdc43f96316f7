//! Display-data contracts for the Kindred views

pub mod matching;
pub mod metric;
pub mod profile;
pub mod status;
pub mod timeline;

pub use matching::{category_icon, CompatibilityScore, MatchRationale};
pub use metric::{format_trend, Metric, TrendDirection};
pub use profile::{FieldValue, MemberProfile, ProfileField, ProfileSectionData, SectionState};
pub use status::{StatusDescriptor, StatusTag};
pub use timeline::{EventStatus, IntroductionEvent};
