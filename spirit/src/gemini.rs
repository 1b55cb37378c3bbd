//! Wire format of Gemini's `generateContent` call.
//!
//! Requests borrow their text from the persona and the caller's transcript.
//! Responses are decoded leniently: every level of the reply path may be
//! missing, and [`GenerateContentResponse::first_text`] reports what was
//! found.

use serde::{Deserialize, Serialize};

use crate::persona::Persona;
use crate::types::{Role, Turn};

/// Gemini's two speaker tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Model,
}

impl From<Role> for WireRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => WireRole::User,
            Role::Assistant => WireRole::Model,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: WireRole,
    pub parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn new(role: WireRole, text: &'a str) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

/// Sampling settings sent with every request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

/// Keeps the spirit brief and atmospheric.
pub const GUIDE_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.8,
    top_k: 40,
    top_p: 0.95,
    max_output_tokens: 200,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    /// Persona preamble, then `history` in order, then `message` as the user.
    pub fn new(persona: &'a Persona, history: &'a [Turn], message: &'a str) -> Self {
        let mut contents = Vec::with_capacity(history.len() + 3);
        contents.push(Content::new(WireRole::User, persona.instruction()));
        contents.push(Content::new(WireRole::Model, persona.acknowledgment()));
        contents.extend(
            history
                .iter()
                .map(|turn| Content::new(turn.role.into(), &turn.content)),
        );
        contents.push(Content::new(WireRole::User, message));
        Self {
            contents,
            generation_config: GUIDE_GENERATION,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if it is non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}
