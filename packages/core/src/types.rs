use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::constants::{self, owned};

/// Campaign objective understood by the recommendation service
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Objective {
    #[default]
    Conversions,
    Leadgen,
    Traffic,
    Reach,
    Awareness,
}

/// Ad channel a campaign can run on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Google,
    Meta,
}

/// One audience segment of a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub age_min: u32,
    pub age_max: u32,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub pains: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Free-form tags used for Meta targeting
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-form tags used for Google search targeting
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_PERSONA_NAME.to_string(),
            age_min: constants::DEFAULT_PERSONA_AGE_MIN,
            age_max: constants::DEFAULT_PERSONA_AGE_MAX,
            genders: owned(constants::DEFAULT_PERSONA_GENDERS),
            pains: owned(constants::DEFAULT_PERSONA_PAINS),
            goals: owned(constants::DEFAULT_PERSONA_GOALS),
            interests: owned(constants::DEFAULT_PERSONA_INTERESTS),
            keywords: owned(constants::DEFAULT_PERSONA_KEYWORDS),
        }
    }
}

impl Persona {
    /// The default persona renamed for position `count + 1`
    pub fn numbered(count: usize) -> Self {
        Self {
            name: format!("{} {}", constants::PERSONA_NAME_PREFIX, count + 1),
            ..Self::default()
        }
    }
}

/// The campaign brief edited by the operator and sent to the service
///
/// Serializes with every field present, including empty lists and a `null`
/// promo, which is the request body of `POST {api_base}/ads/segment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignBrief {
    pub product_name: String,
    pub value_prop: String,
    pub website: String,
    pub landing_path: String,
    pub location_countries: Vec<String>,
    pub location_cities: Vec<String>,
    pub language: String,
    pub budget_daily: f64,
    pub objective: Objective,
    pub platform: Vec<Platform>,
    pub personas: Vec<Persona>,
    pub promo: Option<String>,
}

impl Default for CampaignBrief {
    fn default() -> Self {
        Self {
            product_name: constants::DEFAULT_PRODUCT_NAME.to_string(),
            value_prop: constants::DEFAULT_VALUE_PROP.to_string(),
            website: constants::DEFAULT_WEBSITE.to_string(),
            landing_path: constants::DEFAULT_LANDING_PATH.to_string(),
            location_countries: owned(constants::DEFAULT_COUNTRIES),
            location_cities: owned(constants::DEFAULT_CITIES),
            language: constants::DEFAULT_LANGUAGE.to_string(),
            budget_daily: constants::DEFAULT_BUDGET_DAILY,
            objective: Objective::Conversions,
            platform: vec![Platform::Google, Platform::Meta],
            personas: vec![Persona::default()],
            promo: Some(constants::DEFAULT_PROMO.to_string()),
        }
    }
}

/// Top-level fields of a [`CampaignBrief`], named as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BriefField {
    ProductName,
    ValueProp,
    Website,
    LandingPath,
    LocationCountries,
    LocationCities,
    Language,
    BudgetDaily,
    Objective,
    Platform,
    Personas,
    Promo,
}

impl BriefField {
    /// Human-readable label used by the form
    pub fn label(&self) -> &'static str {
        match self {
            BriefField::ProductName => "Product",
            BriefField::ValueProp => "Value proposition",
            BriefField::Website => "Website",
            BriefField::LandingPath => "Landing path",
            BriefField::LocationCountries => "Countries (comma separated)",
            BriefField::LocationCities => "Cities (comma separated)",
            BriefField::Language => "Language",
            BriefField::BudgetDaily => "Daily budget (USD)",
            BriefField::Objective => "Objective",
            BriefField::Platform => "Platforms",
            BriefField::Personas => "Personas",
            BriefField::Promo => "Promo",
        }
    }
}

/// Fields of a [`Persona`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PersonaField {
    Name,
    AgeMin,
    AgeMax,
    Genders,
    Pains,
    Goals,
    Interests,
    Keywords,
}

impl PersonaField {
    pub fn label(&self) -> &'static str {
        match self {
            PersonaField::Name => "Name",
            PersonaField::AgeMin => "Min age",
            PersonaField::AgeMax => "Max age",
            PersonaField::Genders => "Genders",
            PersonaField::Pains => "Pains",
            PersonaField::Goals => "Goals",
            PersonaField::Interests => "Interests (Meta)",
            PersonaField::Keywords => "Keywords (Google)",
        }
    }
}
