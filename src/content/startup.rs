//! Startup-idea generation contract: the ten-field branding and strategy package.

use super::{ContentContract, ContentKind, GeneratedContent};
use crate::error::SchemaValidationError;
use crate::schema::{is_hex_color, FieldSpec, FieldType, ItemFormat, SchemaDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const STARTUP_TEMPLATE: &str = r#"You are an expert startup consultant and branding specialist. A user will provide you with a startup idea, and your task is to generate a comprehensive branding and strategy package for them.

Based on the user's input: "{{prompt}}", please generate the following:

1.  **Startup Name:** A creative, memorable, and available-sounding name.
2.  **Tagline:** A catchy and concise tagline that encapsulates the brand's essence.
3.  **Elevator Pitch:** A compelling, 1-2 sentence pitch.
4.  **Problem Statement:** A clear and concise description of the problem the startup is solving.
5.  **Solution Statement:** A clear and concise description of how the startup solves that problem.
6.  **Target Audience:** A specific description of the ideal customer profile.
7.  **Unique Value Proposition (UVP):** What makes this startup different from and better than competitors.
8.  **Website Hero Section Copy:** Engaging and persuasive copy for the hero section of a landing page.
9.  **Color Palette:** A primary color, a secondary color, and an accent color in hex format.
10. **Logo Concept:** A simple, creative, and descriptive concept for a logo.

Please provide a well-thought-out and creative response for each of these categories."#;

/// Branding and strategy package for one startup idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartupIdeaResult {
    pub startup_name: String,
    pub tagline: String,
    pub pitch: String,
    pub problem_statement: String,
    pub solution_statement: String,
    pub target_audience: String,
    pub unique_value_proposition: String,
    pub hero_copy: String,
    /// Primary, secondary, accent by convention.
    pub color_palette: Vec<String>,
    pub logo_concept: String,
}

/// Names the fields of [`StartupIdeaResult`], in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StartupField {
    StartupName,
    Tagline,
    Pitch,
    ProblemStatement,
    SolutionStatement,
    TargetAudience,
    UniqueValueProposition,
    HeroCopy,
    ColorPalette,
    LogoConcept,
}

impl StartupField {
    pub const ALL: [StartupField; 10] = [
        StartupField::StartupName,
        StartupField::Tagline,
        StartupField::Pitch,
        StartupField::ProblemStatement,
        StartupField::SolutionStatement,
        StartupField::TargetAudience,
        StartupField::UniqueValueProposition,
        StartupField::HeroCopy,
        StartupField::ColorPalette,
        StartupField::LogoConcept,
    ];

    /// Serialized key.
    pub fn key(&self) -> &'static str {
        match self {
            StartupField::StartupName => "startupName",
            StartupField::Tagline => "tagline",
            StartupField::Pitch => "pitch",
            StartupField::ProblemStatement => "problemStatement",
            StartupField::SolutionStatement => "solutionStatement",
            StartupField::TargetAudience => "targetAudience",
            StartupField::UniqueValueProposition => "uniqueValueProposition",
            StartupField::HeroCopy => "heroCopy",
            StartupField::ColorPalette => "colorPalette",
            StartupField::LogoConcept => "logoConcept",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StartupField::StartupName => "Startup Name",
            StartupField::Tagline => "Tagline",
            StartupField::Pitch => "Elevator Pitch",
            StartupField::ProblemStatement => "Problem Statement",
            StartupField::SolutionStatement => "Solution Statement",
            StartupField::TargetAudience => "Target Audience",
            StartupField::UniqueValueProposition => "Unique Value Proposition",
            StartupField::HeroCopy => "Website Hero Copy",
            StartupField::ColorPalette => "Color Palette",
            StartupField::LogoConcept => "Logo Concept",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            StartupField::StartupName => "A creative and catchy name for the startup.",
            StartupField::Tagline => "A short and memorable tagline for the startup.",
            StartupField::Pitch => "A concise elevator pitch for the startup.",
            StartupField::ProblemStatement => {
                "A clear statement of the problem the startup solves."
            }
            StartupField::SolutionStatement => {
                "A clear statement of how the startup solves the problem."
            }
            StartupField::TargetAudience => "A definition of the primary target audience.",
            StartupField::UniqueValueProposition => "What makes the startup unique and valuable.",
            StartupField::HeroCopy => "Compelling copy for a website hero section.",
            StartupField::ColorPalette => "A list of suggested hex color codes for branding.",
            StartupField::LogoConcept => "A concept idea for the startup's logo.",
        }
    }

    fn field_type(&self) -> FieldType {
        match self {
            StartupField::ColorPalette => FieldType::StringList(ItemFormat::HexColor),
            _ => FieldType::NonEmptyString,
        }
    }
}

impl fmt::Display for StartupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StartupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StartupField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown startup field: {}", s))
    }
}

/// Value of a single startup field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Palette(Vec<String>),
}

impl FieldValue {
    /// Plain string handed to the clipboard collaborator.
    pub fn copy_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Palette(colors) => colors.join(", "),
        }
    }
}

impl StartupIdeaResult {
    pub fn field(&self, field: StartupField) -> FieldValue {
        let text = |s: &String| FieldValue::Text(s.clone());
        match field {
            StartupField::StartupName => text(&self.startup_name),
            StartupField::Tagline => text(&self.tagline),
            StartupField::Pitch => text(&self.pitch),
            StartupField::ProblemStatement => text(&self.problem_statement),
            StartupField::SolutionStatement => text(&self.solution_statement),
            StartupField::TargetAudience => text(&self.target_audience),
            StartupField::UniqueValueProposition => text(&self.unique_value_proposition),
            StartupField::HeroCopy => text(&self.hero_copy),
            StartupField::ColorPalette => FieldValue::Palette(self.color_palette.clone()),
            StartupField::LogoConcept => text(&self.logo_concept),
        }
    }

    /// Replace one field locally. The value must match the field's declared type.
    pub fn set_field(
        &mut self,
        field: StartupField,
        value: FieldValue,
    ) -> Result<(), SchemaValidationError> {
        let path = format!("/{}", field.key());
        match (field, value) {
            (StartupField::ColorPalette, FieldValue::Palette(colors)) => {
                if let Some((idx, bad)) = colors.iter().enumerate().find(|(_, c)| !is_hex_color(c))
                {
                    return Err(SchemaValidationError::new(
                        format!("{}/{}", path, idx),
                        format!("'{}' is not a hex color code", bad),
                    ));
                }
                self.color_palette = colors;
                Ok(())
            }
            (StartupField::ColorPalette, FieldValue::Text(_)) => Err(SchemaValidationError::new(
                path,
                "expected array, found string",
            )),
            (_, FieldValue::Palette(_)) => Err(SchemaValidationError::new(
                path,
                "expected string, found array",
            )),
            (field, FieldValue::Text(text)) => {
                if text.trim().is_empty() {
                    return Err(SchemaValidationError::new(path, "string must not be empty"));
                }
                match self.text_field_mut(field) {
                    Some(slot) => {
                        *slot = text;
                        Ok(())
                    }
                    None => Err(SchemaValidationError::new(path, "expected array, found string")),
                }
            }
        }
    }

    /// The pair handed to the PDF export collaborator.
    pub fn problem_solution(&self) -> (&str, &str) {
        (&self.problem_statement, &self.solution_statement)
    }

    fn text_field_mut(&mut self, field: StartupField) -> Option<&mut String> {
        let slot = match field {
            StartupField::StartupName => &mut self.startup_name,
            StartupField::Tagline => &mut self.tagline,
            StartupField::Pitch => &mut self.pitch,
            StartupField::ProblemStatement => &mut self.problem_statement,
            StartupField::SolutionStatement => &mut self.solution_statement,
            StartupField::TargetAudience => &mut self.target_audience,
            StartupField::UniqueValueProposition => &mut self.unique_value_proposition,
            StartupField::HeroCopy => &mut self.hero_copy,
            StartupField::LogoConcept => &mut self.logo_concept,
            StartupField::ColorPalette => return None,
        };
        Some(slot)
    }
}

impl ContentContract for StartupIdeaResult {
    const KIND: ContentKind = ContentKind::StartupIdea;

    fn input_schema() -> &'static SchemaDescriptor {
        static SCHEMA: OnceLock<SchemaDescriptor> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaDescriptor::new(
                "GenerateStartupIdeasInput",
                "Startup idea supplied by the user",
                vec![FieldSpec::new(
                    "prompt",
                    FieldType::NonEmptyString,
                    "The user's startup idea or concept.",
                )],
            )
        })
    }

    fn output_schema() -> &'static SchemaDescriptor {
        static SCHEMA: OnceLock<SchemaDescriptor> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaDescriptor::new(
                "GenerateStartupIdeasOutput",
                "Branding and strategy package for a startup idea",
                StartupField::ALL
                    .iter()
                    .map(|field| FieldSpec::new(field.key(), field.field_type(), field.description()))
                    .collect(),
            )
        })
    }

    fn instruction_template() -> &'static str {
        STARTUP_TEMPLATE
    }

    fn into_content(self) -> GeneratedContent {
        GeneratedContent::StartupIdea(self)
    }
}
