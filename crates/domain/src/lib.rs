//! Domain rules of the IWE site client.
//!
//! Pure value objects and state machines: no I/O, no UI framework, no
//! runtime. `xtask arch-check` keeps it that way.

pub mod error;
pub mod form;
pub mod page;

pub use error::DomainError;
pub use form::{
    is_valid_email, Banner, BannerId, BannerKind, Field, FieldIssue, FieldKind, FormData,
    FormMessages, FormModel, SubmissionState, SubmitControl,
};
pub use page::PageEffects;
