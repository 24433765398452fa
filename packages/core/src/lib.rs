// ABOUTME: Core types and editor logic for AdStudio
// ABOUTME: Campaign brief model, pure transitions, field coercions and response types

pub mod brief;
pub mod constants;
pub mod editor;
pub mod error;
pub mod fields;
pub mod response;
pub mod types;

// Re-export main types
pub use types::{BriefField, CampaignBrief, Objective, Persona, PersonaField, Platform};

pub use brief::{BriefUpdate, PersonaUpdate};
pub use editor::{Editor, RecommendationService, ResponsePolicy, SubmitTicket};
pub use error::{SubmitError, GENERIC_ENDPOINT_ERROR};
pub use fields::NumericInput;
pub use response::{AdPreview, FeedCard, RecommendationResult, SearchCard};
