//! Page-wide interaction state
//!
//! Created once by the home view and shared through context with the
//! header, the parallax layers and the document click handler.

use dioxus::prelude::*;
use iwe_domain::PageEffects;

use super::SignalStore;
use crate::application::PageEffectsService;

#[derive(Clone, Copy)]
pub struct PageState {
    pub effects: Signal<PageEffects>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            effects: Signal::new(PageEffects::new()),
        }
    }

    pub fn store(&self) -> SignalStore<PageEffects> {
        SignalStore::new(self.effects)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Page effects service bound to the page state in context
pub fn use_page_effects() -> PageEffectsService<SignalStore<PageEffects>> {
    let state = use_context::<PageState>();
    let platform = crate::ui::use_platform();
    use_hook(move || PageEffectsService::new(state.store(), platform))
}
