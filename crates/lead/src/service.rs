use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Option of a form's "service interested in" select.
///
/// The serialized value is what the provider template receives, so each form
/// keeps its own enumeration.
pub trait ServiceOption:
    FromStr + AsRef<str> + VariantArray + Copy + Send + Sync + 'static
{
    fn label(&self) -> &'static str;

    fn choices() -> Vec<ServiceChoice> {
        Self::VARIANTS
            .iter()
            .map(|service| ServiceChoice {
                value: service.as_ref().to_owned(),
                label: service.label(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceChoice {
    pub value: String,
    pub label: &'static str,
}

/// Services offered on the contact page
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum ContactService {
    HorizontalMosquitoNet,
    VerticalMosquitoNet,
    BirdNetting,
    InvisibleGrills,
    VelcroMosquitoNet,
    RollerBlinds,
    Other,
}

impl ServiceOption for ContactService {
    fn label(&self) -> &'static str {
        match self {
            ContactService::HorizontalMosquitoNet => "Horizontal Mosquito Net",
            ContactService::VerticalMosquitoNet => "Vertical Mosquito Net",
            ContactService::BirdNetting => "Bird Netting",
            ContactService::InvisibleGrills => "Invisible Grills (SS316)",
            ContactService::VelcroMosquitoNet => "Velcro Mosquito Net",
            ContactService::RollerBlinds => "Roller Blinds & Wallpapers",
            ContactService::Other => "Other",
        }
    }
}

/// Services offered in the quote popup
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteService {
    #[strum(serialize = "Mosquito Net")]
    MosquitoNet,
    #[strum(serialize = "Bird Netting")]
    BirdNetting,
    #[strum(serialize = "Invisible Grills")]
    InvisibleGrills,
    #[strum(serialize = "Roller Blinds")]
    RollerBlinds,
    Other,
}

impl ServiceOption for QuoteService {
    fn label(&self) -> &'static str {
        match self {
            QuoteService::MosquitoNet => "Mosquito Net",
            QuoteService::BirdNetting => "Bird Netting",
            QuoteService::InvisibleGrills => "Invisible Grills",
            QuoteService::RollerBlinds => "Roller Blinds",
            QuoteService::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_values_are_kebab_case() {
        let values = ContactService::choices()
            .into_iter()
            .map(|choice| choice.value)
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            vec![
                "horizontal-mosquito-net",
                "vertical-mosquito-net",
                "bird-netting",
                "invisible-grills",
                "velcro-mosquito-net",
                "roller-blinds",
                "other",
            ]
        );
    }

    #[test]
    fn test_quote_values_match_labels() {
        for choice in QuoteService::choices() {
            assert_eq!(choice.value, choice.label);
        }
        assert_eq!(
            QuoteService::from_str("Bird Netting"),
            Ok(QuoteService::BirdNetting)
        );
    }

    #[test]
    fn test_enumerations_stay_independent() {
        assert!(ContactService::from_str("Mosquito Net").is_err());
        assert!(QuoteService::from_str("bird-netting").is_err());
        assert!(QuoteService::from_str("Velcro Mosquito Net").is_err());
    }
}
