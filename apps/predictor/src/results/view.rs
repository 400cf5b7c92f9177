use std::fmt;

use crate::models::{PredictionResult, ProfileDraft};
use crate::results::catalog::describe;
use crate::results::chart::ChartData;
use crate::store::StoredPrediction;

/// Shown in the confidence badge when the service sent no recommendations.
const DEFAULT_CONFIDENCE: u32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    Default,
    Primary,
    Success,
    Secondary,
}

impl ChipTone {
    pub fn for_level(level: &str) -> Self {
        match level {
            "Intermediate" => ChipTone::Primary,
            "Advanced" => ChipTone::Success,
            "Expert" => ChipTone::Secondary,
            _ => ChipTone::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillChip {
    pub label: &'static str,
    pub level: String,
    pub tone: ChipTone,
}

impl SkillChip {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterestBar {
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
}

impl InterestBar {
    /// Fill percentage for a /10 score.
    pub fn percent(&self) -> u16 {
        u16::from(self.value) * 10
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub headline: String,
    pub skills: Vec<SkillChip>,
    pub interests: Vec<InterestBar>,
}

impl ProfileSummary {
    pub fn from_draft(draft: &ProfileDraft) -> Self {
        let education = if draft.education.is_empty() {
            "Not specified"
        } else {
            draft.education.as_str()
        };
        let years = draft
            .years_experience
            .map(|y| y.to_string())
            .unwrap_or_default();

        let skills = [
            ("Technical", &draft.technical_skills),
            ("Communication", &draft.communication_skills),
            ("Analytical", &draft.analytical_thinking),
            ("Creativity", &draft.creativity),
            ("Leadership", &draft.leadership),
        ]
        .into_iter()
        .filter(|(_, level)| !level.is_empty())
        .map(|(label, level)| SkillChip {
            label,
            level: level.clone(),
            tone: ChipTone::for_level(level),
        })
        .collect();

        let interests = vec![
            InterestBar {
                label: "Science & Technology",
                value: draft.interest_science,
                color: "#1976d2",
            },
            InterestBar {
                label: "Arts & Humanities",
                value: draft.interest_arts,
                color: "#e91e63",
            },
            InterestBar {
                label: "Business & Commerce",
                value: draft.interest_business,
                color: "#ff9800",
            },
        ];

        Self {
            headline: format!("{education} • {years} years experience"),
            skills,
            interests,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CareerCard {
    pub career: String,
    pub probability: f64,
    pub is_primary: bool,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub primary_prediction: String,
    pub confidence_percent: u32,
    /// `"<n>% Success Probability"`, only with model details.
    pub success_chip: Option<String>,
    pub model_type: Option<String>,
}

/// Everything the results page displays, derived once on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub headline: Headline,
    pub chart: ChartData,
    pub cards: Vec<CareerCard>,
    pub profile: Option<ProfileSummary>,
}

impl ResultsView {
    pub fn build(stored: &StoredPrediction) -> Self {
        let result = &stored.result;
        Self {
            headline: headline(result),
            chart: ChartData::from_recommendations(&result.recommendations),
            cards: cards(result),
            profile: stored.profile.as_ref().map(ProfileSummary::from_draft),
        }
    }
}

fn headline(result: &PredictionResult) -> Headline {
    let confidence_percent = result
        .recommendations
        .first()
        .map(|r| r.probability.round().max(0.0) as u32)
        .unwrap_or(DEFAULT_CONFIDENCE);

    Headline {
        primary_prediction: result.primary_prediction.clone(),
        confidence_percent,
        success_chip: result
            .model_details
            .as_ref()
            .map(|d| format!("{}% Success Probability", d.student_performance_score.round())),
        model_type: result.model_details.as_ref().map(|d| d.model_type.clone()),
    }
}

fn cards(result: &PredictionResult) -> Vec<CareerCard> {
    result
        .recommendations
        .iter()
        .map(|rec| {
            let descriptor = describe(&rec.career);
            CareerCard {
                career: rec.career.clone(),
                probability: rec.probability,
                is_primary: rec.career == result.primary_prediction,
                description: descriptor.description,
                skills: descriptor.skills,
            }
        })
        .collect()
}

/// Plain-text rendering used for terminal output and printing.
impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Career Prediction Results")?;
        writeln!(
            f,
            "Primary recommendation: {} ({}%)",
            self.headline.primary_prediction, self.headline.confidence_percent
        )?;
        if let Some(chip) = &self.headline.success_chip {
            writeln!(f, "{chip}")?;
        }

        if let Some(profile) = &self.profile {
            writeln!(f)?;
            writeln!(f, "Your profile: {}", profile.headline)?;
            let chips: Vec<String> = profile.skills.iter().map(SkillChip::text).collect();
            if !chips.is_empty() {
                writeln!(f, "  Skills: {}", chips.join(", "))?;
            }
            for bar in &profile.interests {
                writeln!(f, "  {}: {}/10", bar.label, bar.value)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Career match breakdown:")?;
        for segment in &self.chart.segments {
            writeln!(f, " {}", segment.tooltip().trim_start())?;
        }

        for card in &self.cards {
            writeln!(f)?;
            let marker = if card.is_primary { " [TOP MATCH]" } else { "" };
            writeln!(f, "{} - {}%{}", card.career, card.probability.round(), marker)?;
            writeln!(f, "  {}", card.description)?;
            writeln!(f, "  Key skills: {}", card.skills.join(", "))?;
        }

        if let Some(model) = &self.headline.model_type {
            writeln!(f)?;
            writeln!(f, "Prediction based on {model} model")?;
        }
        Ok(())
    }
}
