// ABOUTME: Focusable form fields and the widget kind each one uses
// ABOUTME: Maps brief and persona fields to text, number, select, multi and tag editors

use adstudio_core::constants::{GENDER_OPTIONS, LANGUAGE_OPTIONS};
use adstudio_core::fields::{format_number, join_comma_list};
use adstudio_core::{BriefField, CampaignBrief, Objective, PersonaField, Platform};
use strum::IntoEnumIterator;

/// Top-level fields in the order the form shows them
pub const BRIEF_FORM_FIELDS: [BriefField; 11] = [
    BriefField::ProductName,
    BriefField::ValueProp,
    BriefField::Website,
    BriefField::LandingPath,
    BriefField::LocationCountries,
    BriefField::LocationCities,
    BriefField::Objective,
    BriefField::BudgetDaily,
    BriefField::Platform,
    BriefField::Language,
    BriefField::Promo,
];

/// A focusable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Brief(BriefField),
    Persona { index: usize, field: PersonaField },
}

/// Widget used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Numeric text; cleared and unreadable input is passed through for coercion
    Number,
    /// Comma separated list
    CommaList,
    /// One choice out of an option list
    Select,
    /// Toggleable set of options
    Multi,
    /// Free-form tags with a pending entry
    Tags,
}

impl FieldKind {
    /// Whether the field is edited through the text input buffer
    pub fn uses_text_input(&self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Number | FieldKind::CommaList | FieldKind::Tags
        )
    }
}

impl FieldId {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Brief(field) => match field {
                BriefField::LocationCountries | BriefField::LocationCities => FieldKind::CommaList,
                BriefField::Objective | BriefField::Language => FieldKind::Select,
                BriefField::BudgetDaily => FieldKind::Number,
                BriefField::Platform => FieldKind::Multi,
                _ => FieldKind::Text,
            },
            FieldId::Persona { field, .. } => match field {
                PersonaField::Name => FieldKind::Text,
                PersonaField::AgeMin | PersonaField::AgeMax => FieldKind::Number,
                PersonaField::Genders => FieldKind::Multi,
                PersonaField::Pains
                | PersonaField::Goals
                | PersonaField::Interests
                | PersonaField::Keywords => FieldKind::Tags,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Brief(field) => field.label(),
            FieldId::Persona { field, .. } => field.label(),
        }
    }

    pub fn persona_index(&self) -> Option<usize> {
        match self {
            FieldId::Persona { index, .. } => Some(*index),
            FieldId::Brief(_) => None,
        }
    }

    /// Options offered by select and multi fields
    pub fn options(&self) -> Vec<String> {
        match self {
            FieldId::Brief(BriefField::Objective) => {
                Objective::iter().map(|o| o.to_string()).collect()
            }
            FieldId::Brief(BriefField::Language) => {
                LANGUAGE_OPTIONS.iter().map(|s| s.to_string()).collect()
            }
            FieldId::Brief(BriefField::Platform) => {
                Platform::iter().map(|p| p.to_string()).collect()
            }
            FieldId::Persona {
                field: PersonaField::Genders,
                ..
            } => GENDER_OPTIONS.iter().map(|s| s.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Every focusable field for the current brief, personas last
pub fn form_fields(brief: &CampaignBrief) -> Vec<FieldId> {
    let mut fields: Vec<FieldId> = BRIEF_FORM_FIELDS.iter().copied().map(FieldId::Brief).collect();
    for index in 0..brief.personas.len() {
        fields.extend(
            PersonaField::iter().map(|field| FieldId::Persona { index, field }),
        );
    }
    fields
}

/// Read-only view of a field's current value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldView {
    Text(String),
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
    Multi {
        options: Vec<String>,
        selected: Vec<bool>,
    },
    Tags(Vec<String>),
}

/// Current value of `field`; `None` when it points at a missing persona
pub fn field_view(brief: &CampaignBrief, field: FieldId) -> Option<FieldView> {
    let view = match field {
        FieldId::Brief(brief_field) => match brief_field {
            BriefField::ProductName => FieldView::Text(brief.product_name.clone()),
            BriefField::ValueProp => FieldView::Text(brief.value_prop.clone()),
            BriefField::Website => FieldView::Text(brief.website.clone()),
            BriefField::LandingPath => FieldView::Text(brief.landing_path.clone()),
            BriefField::LocationCountries => {
                FieldView::Text(join_comma_list(&brief.location_countries))
            }
            BriefField::LocationCities => FieldView::Text(join_comma_list(&brief.location_cities)),
            BriefField::BudgetDaily => FieldView::Text(format_number(brief.budget_daily)),
            BriefField::Promo => FieldView::Text(brief.promo.clone().unwrap_or_default()),
            BriefField::Objective => select_view(field, brief.objective.as_ref()),
            BriefField::Language => select_view(field, &brief.language),
            BriefField::Platform => {
                let chosen: Vec<String> = brief.platform.iter().map(|p| p.to_string()).collect();
                multi_view(field, &chosen)
            }
            BriefField::Personas => return None,
        },
        FieldId::Persona { index, field: persona_field } => {
            let persona = brief.personas.get(index)?;
            match persona_field {
                PersonaField::Name => FieldView::Text(persona.name.clone()),
                PersonaField::AgeMin => FieldView::Text(persona.age_min.to_string()),
                PersonaField::AgeMax => FieldView::Text(persona.age_max.to_string()),
                PersonaField::Genders => multi_view(field, &persona.genders),
                list_field => FieldView::Tags(persona.list(list_field)?.to_vec()),
            }
        }
    };
    Some(view)
}

fn select_view(field: FieldId, current: &str) -> FieldView {
    let options = field.options();
    let selected = options.iter().position(|o| o == current);
    FieldView::Select { options, selected }
}

fn multi_view(field: FieldId, chosen: &[String]) -> FieldView {
    let options = field.options();
    let selected = options.iter().map(|o| chosen.contains(o)).collect();
    FieldView::Multi { options, selected }
}

/// Text loaded into the input buffer when `field` gains focus
pub fn initial_text(brief: &CampaignBrief, field: FieldId) -> String {
    match (field.kind(), field_view(brief, field)) {
        (FieldKind::Tags, _) => String::new(),
        (_, Some(FieldView::Text(text))) => text,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_fields_grow_with_personas() {
        let brief = CampaignBrief::default();
        let one = form_fields(&brief);
        let two = form_fields(&brief.add_persona());
        assert_eq!(one.len(), BRIEF_FORM_FIELDS.len() + 8);
        assert_eq!(two.len(), one.len() + 8);
        assert_eq!(
            two.last(),
            Some(&FieldId::Persona {
                index: 1,
                field: PersonaField::Keywords
            })
        );
    }

    #[test]
    fn test_form_fields_without_personas() {
        let brief = CampaignBrief::default().remove_persona(0);
        assert_eq!(form_fields(&brief).len(), BRIEF_FORM_FIELDS.len());
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldId::Brief(BriefField::BudgetDaily).kind(), FieldKind::Number);
        assert_eq!(FieldId::Brief(BriefField::Platform).kind(), FieldKind::Multi);
        assert_eq!(FieldId::Brief(BriefField::LocationCities).kind(), FieldKind::CommaList);
        let keywords = FieldId::Persona {
            index: 0,
            field: PersonaField::Keywords,
        };
        assert_eq!(keywords.kind(), FieldKind::Tags);
        assert_eq!(keywords.persona_index(), Some(0));
    }

    #[test]
    fn test_field_views_reflect_brief() {
        let brief = CampaignBrief::default();
        assert_eq!(
            field_view(&brief, FieldId::Brief(BriefField::BudgetDaily)),
            Some(FieldView::Text("50".to_string()))
        );
        assert_eq!(
            field_view(&brief, FieldId::Brief(BriefField::Objective)),
            Some(FieldView::Select {
                options: vec![
                    "conversions".to_string(),
                    "leadgen".to_string(),
                    "traffic".to_string(),
                    "reach".to_string(),
                    "awareness".to_string()
                ],
                selected: Some(0)
            })
        );
        assert_eq!(
            field_view(&brief, FieldId::Brief(BriefField::Platform)),
            Some(FieldView::Multi {
                options: vec!["google".to_string(), "meta".to_string()],
                selected: vec![true, true]
            })
        );
        let missing = FieldId::Persona {
            index: 3,
            field: PersonaField::Name,
        };
        assert_eq!(field_view(&brief, missing), None);
    }

    #[test]
    fn test_initial_text() {
        let brief = CampaignBrief::default();
        assert_eq!(
            initial_text(&brief, FieldId::Brief(BriefField::LocationCountries)),
            "AR"
        );
        let interests = FieldId::Persona {
            index: 0,
            field: PersonaField::Interests,
        };
        assert_eq!(initial_text(&brief, interests), "");
    }
}
