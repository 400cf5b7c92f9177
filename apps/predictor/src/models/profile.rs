use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const DEFAULT_SLIDER: u8 = 5;

/// The in-progress profile. Field names on the wire are preserved verbatim
/// (camelCase) so the draft can be posted to `/api/predict` as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub education: String,
    /// `None` when the raw input did not parse as a whole number.
    pub years_experience: Option<u32>,
    pub technical_skills: String,
    pub communication_skills: String,
    pub analytical_thinking: String,
    pub creativity: String,
    pub leadership: String,
    pub interest_science: u8,
    pub interest_arts: u8,
    pub interest_business: u8,
    pub personality_extroversion: u8,
    pub personality_openness: u8,
    pub personality_conscientiousness: u8,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            education: String::new(),
            years_experience: Some(0),
            technical_skills: String::new(),
            communication_skills: String::new(),
            analytical_thinking: String::new(),
            creativity: String::new(),
            leadership: String::new(),
            interest_science: DEFAULT_SLIDER,
            interest_arts: DEFAULT_SLIDER,
            interest_business: DEFAULT_SLIDER,
            personality_extroversion: DEFAULT_SLIDER,
            personality_openness: DEFAULT_SLIDER,
            personality_conscientiousness: DEFAULT_SLIDER,
        }
    }
}

/// Free-text and select inputs of the form. All of them are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Education,
    YearsExperience,
    TechnicalSkills,
    CommunicationSkills,
    AnalyticalThinking,
    Creativity,
    Leadership,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Education,
        ProfileField::YearsExperience,
        ProfileField::TechnicalSkills,
        ProfileField::CommunicationSkills,
        ProfileField::AnalyticalThinking,
        ProfileField::Creativity,
        ProfileField::Leadership,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ProfileField::Education => "education",
            ProfileField::YearsExperience => "yearsExperience",
            ProfileField::TechnicalSkills => "technicalSkills",
            ProfileField::CommunicationSkills => "communicationSkills",
            ProfileField::AnalyticalThinking => "analyticalThinking",
            ProfileField::Creativity => "creativity",
            ProfileField::Leadership => "leadership",
        }
    }
}

impl FromStr for ProfileField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

/// 1–10 slider inputs (interests and personality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderField {
    InterestScience,
    InterestArts,
    InterestBusiness,
    PersonalityExtroversion,
    PersonalityOpenness,
    PersonalityConscientiousness,
}

impl SliderField {
    pub const ALL: [SliderField; 6] = [
        SliderField::InterestScience,
        SliderField::InterestArts,
        SliderField::InterestBusiness,
        SliderField::PersonalityExtroversion,
        SliderField::PersonalityOpenness,
        SliderField::PersonalityConscientiousness,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            SliderField::InterestScience => "interestScience",
            SliderField::InterestArts => "interestArts",
            SliderField::InterestBusiness => "interestBusiness",
            SliderField::PersonalityExtroversion => "personalityExtroversion",
            SliderField::PersonalityOpenness => "personalityOpenness",
            SliderField::PersonalityConscientiousness => "personalityConscientiousness",
        }
    }
}

impl FromStr for SliderField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

impl ProfileDraft {
    /// Overwrites a text/select field. No validation happens here; a years
    /// value that is not a whole number simply leaves the field empty.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Education => self.education = value,
            ProfileField::YearsExperience => {
                self.years_experience = value.trim().parse::<u32>().ok();
            }
            ProfileField::TechnicalSkills => self.technical_skills = value,
            ProfileField::CommunicationSkills => self.communication_skills = value,
            ProfileField::AnalyticalThinking => self.analytical_thinking = value,
            ProfileField::Creativity => self.creativity = value,
            ProfileField::Leadership => self.leadership = value,
        }
    }

    pub fn set_slider(&mut self, field: SliderField, value: u8) {
        *self.slider_mut(field) = value;
    }

    pub fn slider(&self, field: SliderField) -> u8 {
        match field {
            SliderField::InterestScience => self.interest_science,
            SliderField::InterestArts => self.interest_arts,
            SliderField::InterestBusiness => self.interest_business,
            SliderField::PersonalityExtroversion => self.personality_extroversion,
            SliderField::PersonalityOpenness => self.personality_openness,
            SliderField::PersonalityConscientiousness => self.personality_conscientiousness,
        }
    }

    fn slider_mut(&mut self, field: SliderField) -> &mut u8 {
        match field {
            SliderField::InterestScience => &mut self.interest_science,
            SliderField::InterestArts => &mut self.interest_arts,
            SliderField::InterestBusiness => &mut self.interest_business,
            SliderField::PersonalityExtroversion => &mut self.personality_extroversion,
            SliderField::PersonalityOpenness => &mut self.personality_openness,
            SliderField::PersonalityConscientiousness => &mut self.personality_conscientiousness,
        }
    }

    pub fn is_filled(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Education => !self.education.trim().is_empty(),
            ProfileField::YearsExperience => self.years_experience.is_some(),
            ProfileField::TechnicalSkills => !self.technical_skills.trim().is_empty(),
            ProfileField::CommunicationSkills => !self.communication_skills.trim().is_empty(),
            ProfileField::AnalyticalThinking => !self.analytical_thinking.trim().is_empty(),
            ProfileField::Creativity => !self.creativity.trim().is_empty(),
            ProfileField::Leadership => !self.leadership.trim().is_empty(),
        }
    }

    /// Wire names of required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| !self.is_filled(*f))
            .map(ProfileField::wire_name)
            .collect()
    }
}
