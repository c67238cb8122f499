//! Contact and newsletter form rules

mod banner;
mod data;
mod email;
mod field;
mod messages;
mod model;
mod submission;

pub use banner::{Banner, BannerId, BannerKind, BANNER_FADE_MS, BANNER_VISIBLE_MS};
pub use data::FormData;
pub use email::is_valid_email;
pub use field::{Field, FieldIssue, FieldKind};
pub use messages::FormMessages;
pub use model::{FormModel, SubmitControl, DEFAULT_SUBMIT_LABEL};
pub use submission::SubmissionState;
