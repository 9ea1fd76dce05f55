use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MIN_CONTENT_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 500;
pub const MIN_MODEL_CHARS: usize = 2;
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BioType {
    Personal,
    Brand,
}

impl BioType {
    pub const ALL: [BioType; 2] = [BioType::Personal, BioType::Brand];

    pub fn as_str(self) -> &'static str {
        match self {
            BioType::Personal => "personal",
            BioType::Brand => "brand",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BioType::Personal => "Personal",
            BioType::Brand => "Brand",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BioTone {
    Professional,
    Casual,
    Sarcastic,
    Funny,
    Passionate,
    Thoughtful,
}

impl BioTone {
    pub const ALL: [BioTone; 6] = [
        BioTone::Professional,
        BioTone::Casual,
        BioTone::Sarcastic,
        BioTone::Funny,
        BioTone::Passionate,
        BioTone::Thoughtful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BioTone::Professional => "professional",
            BioTone::Casual => "casual",
            BioTone::Sarcastic => "sarcastic",
            BioTone::Funny => "funny",
            BioTone::Passionate => "passionate",
            BioTone::Thoughtful => "thoughtful",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BioTone::Professional => "Professional",
            BioTone::Casual => "Casual",
            BioTone::Sarcastic => "Sarcastic",
            BioTone::Funny => "Funny",
            BioTone::Passionate => "Passionate",
            BioTone::Thoughtful => "Thoughtful",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A model offered in the form. Any identifier is accepted on submit;
/// the catalog only drives the choices shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const MODEL_CATALOG: &[ModelOption] = &[
    ModelOption {
        id: "llama3-8b-8192",
        label: "Llama 3 8B",
    },
    ModelOption {
        id: "mixtral-8x7b-32768",
        label: "Mixtral 8x7B",
    },
    ModelOption {
        id: "llama3-70b-8192",
        label: "Llama 3 70B",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Unvalidated input, as received from the JSON API or the HTML form.
/// Missing fields deserialize to values that fail validation, so they are
/// reported per field instead of rejecting the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioRequestBody {
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "type")]
    pub bio_type: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub emojis: bool,
    #[serde(default)]
    pub model: String,
    #[serde(default = "missing_temperature")]
    pub temperature: f64,
}

fn missing_temperature() -> f64 {
    f64::NAN
}

impl Default for BioRequestBody {
    fn default() -> Self {
        Self {
            content: String::new(),
            bio_type: BioType::Personal.as_str().to_string(),
            tone: BioTone::Professional.as_str().to_string(),
            emojis: false,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl BioRequestBody {
    pub fn validate(&self) -> Result<BioRequest, FieldErrors> {
        BioRequest::try_from(self)
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// A validated bio request. Only obtainable through [`BioRequestBody::validate`],
/// so every value satisfies the content, model and temperature bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BioRequest {
    content: String,
    bio_type: BioType,
    tone: BioTone,
    emojis: bool,
    model: String,
    temperature: f64,
}

impl BioRequest {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn bio_type(&self) -> BioType {
        self.bio_type
    }

    pub fn tone(&self) -> BioTone {
        self.tone
    }

    pub fn emojis(&self) -> bool {
        self.emojis
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Content length in characters, the unit every length rule uses.
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

impl TryFrom<&BioRequestBody> for BioRequest {
    type Error = FieldErrors;

    fn try_from(body: &BioRequestBody) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        if body.model.chars().count() < MIN_MODEL_CHARS {
            errors.insert("model", "Please select a Model");
        }

        let t = body.temperature;
        if t.is_nan() || t < MIN_TEMPERATURE {
            errors.insert("temperature", "Creativity level should be at least 0");
        } else if t > MAX_TEMPERATURE {
            errors.insert("temperature", "Creativity level should be at most 2");
        }

        let content_chars = body.content.chars().count();
        if content_chars < MIN_CONTENT_CHARS {
            errors.insert("content", "Describe yourself in at least 50 characters");
        } else if content_chars > MAX_CONTENT_CHARS {
            errors.insert(
                "content",
                "Your description should not exceed 500 characters",
            );
        }

        let bio_type = BioType::parse(&body.bio_type);
        if bio_type.is_none() {
            errors.insert("type", "Please select a type");
        }

        let tone = BioTone::parse(&body.tone);
        if tone.is_none() {
            errors.insert("tone", "Please select the tone for your bio");
        }

        match (bio_type, tone) {
            (Some(bio_type), Some(tone)) if errors.is_empty() => Ok(BioRequest {
                content: body.content.clone(),
                bio_type,
                tone,
                emojis: body.emojis,
                model: body.model.clone(),
                temperature: t,
            }),
            _ => Err(errors),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bio {
    pub bio: String,
}

/// Candidate bios in the order the model returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioResponse {
    pub data: Vec<Bio>,
}

impl BioResponse {
    pub fn bios(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|b| b.bio.as_str())
    }
}
