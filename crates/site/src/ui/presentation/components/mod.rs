//! Interactive islands of the page

pub mod contact_form;
pub mod form_banner;
pub mod form_field;
pub mod lazy_image;
pub mod newsletter_form;
pub mod parallax_layer;
pub mod reveal;
pub mod site_header;
pub mod stat_counter;
pub mod video_card;

pub use contact_form::ContactForm;
pub use form_banner::FormBanner;
pub use form_field::FormField;
pub use lazy_image::LazyImg;
pub use newsletter_form::NewsletterForm;
pub use parallax_layer::ParallaxLayer;
pub use reveal::Reveal;
pub use site_header::SiteHeader;
pub use stat_counter::StatCounter;
pub use video_card::VideoCard;
