use crate::content::{FieldValue, StartupField, StartupIdeaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// View tag selecting which startup-idea fields a view presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorType {
    NamesTaglines,
    ElevatorPitch,
    ProblemSolution,
    AudienceUvp,
    HeroCopy,
    LogoColors,
}

/// Field subset presented by each generator type, in display order.
pub static GENERATOR_FIELDS: [(GeneratorType, &[StartupField]); 6] = [
    (
        GeneratorType::NamesTaglines,
        &[StartupField::StartupName, StartupField::Tagline],
    ),
    (GeneratorType::ElevatorPitch, &[StartupField::Pitch]),
    (
        GeneratorType::ProblemSolution,
        &[StartupField::ProblemStatement, StartupField::SolutionStatement],
    ),
    (
        GeneratorType::AudienceUvp,
        &[StartupField::TargetAudience, StartupField::UniqueValueProposition],
    ),
    (GeneratorType::HeroCopy, &[StartupField::HeroCopy]),
    (
        GeneratorType::LogoColors,
        &[StartupField::LogoConcept, StartupField::ColorPalette],
    ),
];

impl GeneratorType {
    pub const ALL: [GeneratorType; 6] = [
        GeneratorType::NamesTaglines,
        GeneratorType::ElevatorPitch,
        GeneratorType::ProblemSolution,
        GeneratorType::AudienceUvp,
        GeneratorType::HeroCopy,
        GeneratorType::LogoColors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorType::NamesTaglines => "names-taglines",
            GeneratorType::ElevatorPitch => "elevator-pitch",
            GeneratorType::ProblemSolution => "problem-solution",
            GeneratorType::AudienceUvp => "audience-uvp",
            GeneratorType::HeroCopy => "hero-copy",
            GeneratorType::LogoColors => "logo-colors",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GeneratorType::NamesTaglines => "Creative Names & Taglines",
            GeneratorType::ElevatorPitch => "Elevator Pitch",
            GeneratorType::ProblemSolution => "Problem & Solution",
            GeneratorType::AudienceUvp => "Target Audience & UVP",
            GeneratorType::HeroCopy => "Website Hero Copy",
            GeneratorType::LogoColors => "Logo & Color Palette",
        }
    }

    pub fn fields(&self) -> &'static [StartupField] {
        GENERATOR_FIELDS
            .iter()
            .find(|(tag, _)| tag == self)
            .map(|(_, fields)| *fields)
            .unwrap_or(&[])
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = GeneratorType::ALL.iter().map(|t| t.as_str()).collect();
                format!("Unknown generator type: {} (expected one of {})", s, known.join(", "))
            })
    }
}

impl StartupIdeaResult {
    /// The fields a generator type presents, in display order.
    pub fn select(&self, generator_type: GeneratorType) -> Vec<(StartupField, FieldValue)> {
        generator_type
            .fields()
            .iter()
            .map(|field| (*field, self.field(*field)))
            .collect()
    }
}
