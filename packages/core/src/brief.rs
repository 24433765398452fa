// ABOUTME: Pure transitions over campaign briefs
// ABOUTME: Every edit takes the current brief and returns a new one

use strum::IntoEnumIterator;

use crate::constants::SERVICE_AGE_RANGE;
use crate::fields::NumericInput;
use crate::types::{BriefField, CampaignBrief, Objective, Persona, PersonaField, Platform};

/// Replacement value for one top-level brief field
#[derive(Debug, Clone, PartialEq)]
pub enum BriefUpdate {
    ProductName(String),
    ValueProp(String),
    Website(String),
    LandingPath(String),
    LocationCountries(Vec<String>),
    LocationCities(Vec<String>),
    Language(String),
    BudgetDaily(f64),
    Objective(Objective),
    Platform(Vec<Platform>),
    Personas(Vec<Persona>),
    Promo(Option<String>),
}

impl BriefUpdate {
    /// The field this update replaces
    pub fn field(&self) -> BriefField {
        match self {
            BriefUpdate::ProductName(_) => BriefField::ProductName,
            BriefUpdate::ValueProp(_) => BriefField::ValueProp,
            BriefUpdate::Website(_) => BriefField::Website,
            BriefUpdate::LandingPath(_) => BriefField::LandingPath,
            BriefUpdate::LocationCountries(_) => BriefField::LocationCountries,
            BriefUpdate::LocationCities(_) => BriefField::LocationCities,
            BriefUpdate::Language(_) => BriefField::Language,
            BriefUpdate::BudgetDaily(_) => BriefField::BudgetDaily,
            BriefUpdate::Objective(_) => BriefField::Objective,
            BriefUpdate::Platform(_) => BriefField::Platform,
            BriefUpdate::Personas(_) => BriefField::Personas,
            BriefUpdate::Promo(_) => BriefField::Promo,
        }
    }
}

/// Replacement value for one persona field
///
/// Ages carry the raw numeric input; the cleared/unreadable fallback to
/// 18 and 65 is applied when the update lands.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonaUpdate {
    Name(String),
    AgeMin(NumericInput),
    AgeMax(NumericInput),
    Genders(Vec<String>),
    Pains(Vec<String>),
    Goals(Vec<String>),
    Interests(Vec<String>),
    Keywords(Vec<String>),
}

impl PersonaUpdate {
    pub fn field(&self) -> PersonaField {
        match self {
            PersonaUpdate::Name(_) => PersonaField::Name,
            PersonaUpdate::AgeMin(_) => PersonaField::AgeMin,
            PersonaUpdate::AgeMax(_) => PersonaField::AgeMax,
            PersonaUpdate::Genders(_) => PersonaField::Genders,
            PersonaUpdate::Pains(_) => PersonaField::Pains,
            PersonaUpdate::Goals(_) => PersonaField::Goals,
            PersonaUpdate::Interests(_) => PersonaField::Interests,
            PersonaUpdate::Keywords(_) => PersonaField::Keywords,
        }
    }
}

impl Persona {
    /// A copy of this persona with one field replaced
    pub fn with(&self, change: PersonaUpdate) -> Persona {
        let mut next = self.clone();
        match change {
            PersonaUpdate::Name(v) => next.name = v,
            PersonaUpdate::AgeMin(v) => next.age_min = v.min_age(),
            PersonaUpdate::AgeMax(v) => next.age_max = v.max_age(),
            PersonaUpdate::Genders(v) => next.genders = v,
            PersonaUpdate::Pains(v) => next.pains = v,
            PersonaUpdate::Goals(v) => next.goals = v,
            PersonaUpdate::Interests(v) => next.interests = v,
            PersonaUpdate::Keywords(v) => next.keywords = v,
        }
        next
    }

    /// Read-only view of a list-valued field; `None` for scalar fields
    pub fn list(&self, field: PersonaField) -> Option<&[String]> {
        match field {
            PersonaField::Genders => Some(&self.genders),
            PersonaField::Pains => Some(&self.pains),
            PersonaField::Goals => Some(&self.goals),
            PersonaField::Interests => Some(&self.interests),
            PersonaField::Keywords => Some(&self.keywords),
            PersonaField::Name | PersonaField::AgeMin | PersonaField::AgeMax => None,
        }
    }

    /// Build the update that replaces a list-valued field
    pub fn list_update(field: PersonaField, values: Vec<String>) -> Option<PersonaUpdate> {
        match field {
            PersonaField::Genders => Some(PersonaUpdate::Genders(values)),
            PersonaField::Pains => Some(PersonaUpdate::Pains(values)),
            PersonaField::Goals => Some(PersonaUpdate::Goals(values)),
            PersonaField::Interests => Some(PersonaUpdate::Interests(values)),
            PersonaField::Keywords => Some(PersonaUpdate::Keywords(values)),
            PersonaField::Name | PersonaField::AgeMin | PersonaField::AgeMax => None,
        }
    }
}

impl CampaignBrief {
    /// A new brief with one top-level field replaced
    ///
    /// No validation happens here; the field widgets decide what values reach it.
    pub fn update(&self, change: BriefUpdate) -> CampaignBrief {
        let mut next = self.clone();
        match change {
            BriefUpdate::ProductName(v) => next.product_name = v,
            BriefUpdate::ValueProp(v) => next.value_prop = v,
            BriefUpdate::Website(v) => next.website = v,
            BriefUpdate::LandingPath(v) => next.landing_path = v,
            BriefUpdate::LocationCountries(v) => next.location_countries = v,
            BriefUpdate::LocationCities(v) => next.location_cities = v,
            BriefUpdate::Language(v) => next.language = v,
            BriefUpdate::BudgetDaily(v) => next.budget_daily = v,
            BriefUpdate::Objective(v) => next.objective = v,
            BriefUpdate::Platform(v) => next.platform = v,
            BriefUpdate::Personas(v) => next.personas = v,
            BriefUpdate::Promo(v) => next.promo = v,
        }
        next
    }

    /// Append a copy of the default persona named `Segmento {n+1}`
    pub fn add_persona(&self) -> CampaignBrief {
        let mut personas = self.personas.clone();
        personas.push(Persona::numbered(self.personas.len()));
        self.update(BriefUpdate::Personas(personas))
    }

    /// Drop the persona at `index`. Out of range yields an unchanged brief.
    ///
    /// Removing the last persona is allowed and leaves the list empty.
    pub fn remove_persona(&self, index: usize) -> CampaignBrief {
        let personas = self
            .personas
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();
        self.update(BriefUpdate::Personas(personas))
    }

    /// Replace one field of the persona at `index`; out of range is a no-op
    pub fn update_persona_field(&self, index: usize, change: PersonaUpdate) -> CampaignBrief {
        let Some(current) = self.personas.get(index) else {
            return self.clone();
        };
        let mut personas = self.personas.clone();
        personas[index] = current.with(change);
        self.update(BriefUpdate::Personas(personas))
    }

    /// Replace all personas with a single default persona
    pub fn reset_personas(&self) -> CampaignBrief {
        self.update(BriefUpdate::Personas(vec![Persona::default()]))
    }

    /// Fields whose values differ between `self` and `other`
    pub fn differing_fields(&self, other: &CampaignBrief) -> Vec<BriefField> {
        BriefField::iter()
            .filter(|field| match field {
                BriefField::ProductName => self.product_name != other.product_name,
                BriefField::ValueProp => self.value_prop != other.value_prop,
                BriefField::Website => self.website != other.website,
                BriefField::LandingPath => self.landing_path != other.landing_path,
                BriefField::LocationCountries => {
                    self.location_countries != other.location_countries
                }
                BriefField::LocationCities => self.location_cities != other.location_cities,
                BriefField::Language => self.language != other.language,
                BriefField::BudgetDaily => self.budget_daily != other.budget_daily,
                BriefField::Objective => self.objective != other.objective,
                BriefField::Platform => self.platform != other.platform,
                BriefField::Personas => self.personas != other.personas,
                BriefField::Promo => self.promo != other.promo,
            })
            .collect()
    }

    /// Non-blocking hints about values the recommendation service rejects
    ///
    /// These are shown next to the form; submission is never prevented.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.personas.is_empty() {
            warnings.push("No personas: add at least one segment".to_string());
        }
        if self.budget_daily <= 0.0 {
            warnings.push("Daily budget must be positive".to_string());
        }
        if self.platform.is_empty() {
            warnings.push("No platform selected".to_string());
        }
        if self.product_name.trim().is_empty() {
            warnings.push("Product name is empty".to_string());
        }

        for persona in &self.personas {
            if persona.age_max < persona.age_min {
                warnings.push(format!(
                    "{}: max age {} is below min age {}",
                    persona.name, persona.age_max, persona.age_min
                ));
            }
            for age in [persona.age_min, persona.age_max] {
                if !SERVICE_AGE_RANGE.contains(&age) {
                    warnings.push(format!(
                        "{}: age {} is outside {}-{}",
                        persona.name,
                        age,
                        SERVICE_AGE_RANGE.start(),
                        SERVICE_AGE_RANGE.end()
                    ));
                }
            }
        }

        warnings
    }
}
