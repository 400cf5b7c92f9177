//! Static career descriptions and skill tags shown on recommendation cards.
//!
//! Lookup is by exact career name. Anything the table does not know gets
//! `FALLBACK_DESCRIPTOR`.

#[derive(Debug, PartialEq, Eq)]
pub struct CareerDescriptor {
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub static FALLBACK_DESCRIPTOR: CareerDescriptor = CareerDescriptor {
    description: "A profession aligned with your skills and interests.",
    skills: &["Communication", "Problem Solving", "Teamwork"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerKey {
    SoftwareEngineer,
    DataScientist,
    Doctor,
    Teacher,
    MarketingSpecialist,
    FinancialAnalyst,
    GraphicDesigner,
}

impl CareerKey {
    pub const ALL: [CareerKey; 7] = [
        CareerKey::SoftwareEngineer,
        CareerKey::DataScientist,
        CareerKey::Doctor,
        CareerKey::Teacher,
        CareerKey::MarketingSpecialist,
        CareerKey::FinancialAnalyst,
        CareerKey::GraphicDesigner,
    ];

    /// The name the prediction service uses for this career.
    pub fn name(self) -> &'static str {
        match self {
            CareerKey::SoftwareEngineer => "Software Engineer",
            CareerKey::DataScientist => "Data Scientist",
            CareerKey::Doctor => "Doctor",
            CareerKey::Teacher => "Teacher",
            CareerKey::MarketingSpecialist => "Marketing Specialist",
            CareerKey::FinancialAnalyst => "Financial Analyst",
            CareerKey::GraphicDesigner => "Graphic Designer",
        }
    }

    /// Case-sensitive; `"software engineer"` is not a known career.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn descriptor(self) -> &'static CareerDescriptor {
        match self {
            CareerKey::SoftwareEngineer => &CareerDescriptor {
                description: "Design, develop, and maintain software systems and applications with strong technical and problem-solving skills.",
                skills: &["Programming", "Problem Solving", "System Design", "Debugging"],
            },
            CareerKey::DataScientist => &CareerDescriptor {
                description: "Extract valuable insights from complex data using statistical analysis, machine learning, and visualization techniques.",
                skills: &["Statistics", "Machine Learning", "Data Visualization", "Python/R"],
            },
            CareerKey::Doctor => &CareerDescriptor {
                description: "Diagnose and treat medical conditions with a focus on patient care, requiring extensive education and strong interpersonal skills.",
                skills: &["Medical Knowledge", "Diagnosis", "Patient Care", "Communication"],
            },
            CareerKey::Teacher => &CareerDescriptor {
                description: "Educate and inspire students through effective communication, subject expertise, and adaptive teaching methods.",
                skills: &["Communication", "Subject Expertise", "Planning", "Assessment"],
            },
            CareerKey::MarketingSpecialist => &CareerDescriptor {
                description: "Create and implement marketing strategies to promote products or services using creative and analytical skills.",
                skills: &["Market Research", "Campaign Planning", "Social Media", "Analytics"],
            },
            CareerKey::FinancialAnalyst => &CareerDescriptor {
                description: "Analyze financial data and market trends to help organizations make informed business and investment decisions.",
                skills: &["Financial Modeling", "Data Analysis", "Forecasting", "Reporting"],
            },
            CareerKey::GraphicDesigner => &CareerDescriptor {
                description: "Create visual concepts and designs for digital and print media using creative skills and design software.",
                skills: &["Visual Design", "Typography", "Adobe Creative Suite", "UI/UX"],
            },
        }
    }
}

pub fn describe(career: &str) -> &'static CareerDescriptor {
    CareerKey::from_name(career)
        .map(CareerKey::descriptor)
        .unwrap_or(&FALLBACK_DESCRIPTOR)
}
