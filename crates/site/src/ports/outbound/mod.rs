//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the browser and the network without
//! depending on concrete implementations.

pub mod form_submit_port;
pub mod platform;
pub mod platform_port;

pub use form_submit_port::{FormSubmitPort, SubmitError, SubmitReceipt};
pub use platform::{
    DocumentProvider, ElementBounds, SleepProvider, TimeProvider, ViewportProvider, Visibility,
    VisibilityOptions, WindowEvent,
};
pub use platform_port::PlatformPort;

#[cfg(any(test, feature = "testing"))]
pub use form_submit_port::MockFormSubmitPort;
