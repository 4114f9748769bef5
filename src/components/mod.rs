pub mod cta;
pub mod email_form;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod particles;
pub mod reveal;
pub mod scroll_to_top;
pub mod section_link;
pub mod theme_toggle;
pub mod toast;
