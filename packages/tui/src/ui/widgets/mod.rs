pub mod form;
pub mod status_bar;

pub use form::BriefFormWidget;
pub use status_bar::StatusBarWidget;
