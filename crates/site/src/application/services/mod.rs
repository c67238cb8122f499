//! Application services
//!
//! Controllers are plain owned values created by the component that mounts
//! them. There is no process-wide state.

pub mod form_controller;
pub mod page_effects;

pub use form_controller::{FormController, FormVariant, SubmitOutcome};
pub use page_effects::{
    animate_counter, observe_counter, observe_lazy_image, observe_reveal, observe_video,
    PageEffectsService, COUNTER_FRAME_MS,
};
