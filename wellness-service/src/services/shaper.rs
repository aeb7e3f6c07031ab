//! Turns raw model text into the response shapes.

use serde_json::Value;
use thiserror::Error;

use crate::models::tips::{
    DEFAULT_AFFIRMATION, DEFAULT_EXERCISE, DEFAULT_JOURNALING, DEFAULT_MINDFULNESS,
};
use crate::models::{JournalReflection, Tips};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Tips reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Tips reply is not a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReflectionField {
    Reflection,
    Encouragement,
    Prompt,
    Tip,
}

impl ReflectionField {
    const ALL: [Self; 4] = [
        Self::Reflection,
        Self::Encouragement,
        Self::Prompt,
        Self::Tip,
    ];

    fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "reflection" => Some(Self::Reflection),
            "encouragement" => Some(Self::Encouragement),
            "prompt" | "journaling prompt" | "follow-up prompt" => Some(Self::Prompt),
            "tip" | "wellbeing tip" => Some(Self::Tip),
            _ => None,
        }
    }

    fn slot(self, reflection: &mut JournalReflection) -> &mut String {
        match self {
            Self::Reflection => &mut reflection.reflection,
            Self::Encouragement => &mut reflection.encouragement,
            Self::Prompt => &mut reflection.prompt,
            Self::Tip => &mut reflection.tip,
        }
    }
}

fn is_markup(c: char) -> bool {
    c == '*' || c == '_'
}

/// Split `"**2. Tip:** stretch"` into `(Tip, "stretch")`.
fn split_tagged(line: &str) -> Option<(ReflectionField, &str)> {
    let cleaned = line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ')' | '-' | '#') || is_markup(c)
    });
    let colon = cleaned.find(':')?;
    let label = cleaned[..colon].trim().trim_matches(is_markup).trim();
    let field = ReflectionField::from_label(label)?;
    let rest = cleaned[colon + 1..].trim_start_matches(is_markup).trim();
    Some((field, rest))
}

fn parse_tagged(text: &str) -> Option<JournalReflection> {
    let mut reflection = JournalReflection::default();
    let mut seen: Vec<ReflectionField> = Vec::with_capacity(4);
    let mut current: Option<ReflectionField> = None;
    // Unlabelled lines not attached to any label, in reply order.
    let mut loose: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((field, rest)) = split_tagged(line) {
            if seen.contains(&field) {
                current = None;
                continue;
            }
            seen.push(field);
            *field.slot(&mut reflection) = rest.to_string();
            current = Some(field);
        } else if let Some(field) = current {
            let slot = field.slot(&mut reflection);
            if !slot.is_empty() {
                slot.push(' ');
            }
            slot.push_str(line);
        } else {
            loose.push(line);
        }
    }

    if seen.is_empty() {
        return None;
    }

    let mut loose = loose.into_iter();
    for field in ReflectionField::ALL {
        let slot = field.slot(&mut reflection);
        if slot.is_empty() {
            match loose.next() {
                Some(line) => *slot = line.to_string(),
                None => break,
            }
        }
    }

    Some(reflection)
}

fn parse_positional(text: &str) -> JournalReflection {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut next = || lines.next().unwrap_or_default().to_string();

    JournalReflection {
        reflection: next(),
        encouragement: next(),
        prompt: next(),
        tip: next(),
    }
}

/// Map a journal reply onto the four reflection fields.
///
/// Labelled lines (`Reflection:`, `Encouragement:`, `Prompt:`, `Tip:`) win;
/// unlabelled lines continue the previous field. Unlabelled lines with no
/// preceding label fill the fields still empty, in order. With no labels at
/// all the first four non-empty lines are assigned in order. Fields left over
/// are empty.
pub fn parse_journal_reply(text: &str) -> JournalReflection {
    parse_tagged(text).unwrap_or_else(|| parse_positional(text))
}

/// Drop a surrounding markdown code fence (```` ```json ... ``` ````), if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Parse a tips reply. Keys that are missing or not strings get defaults.
pub fn parse_tips(text: &str) -> Result<Tips, ParseError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))?;
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    let pick = |key: &str, default: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };

    Ok(Tips {
        mindfulness: pick("mindfulness", DEFAULT_MINDFULNESS),
        journaling: pick("journaling", DEFAULT_JOURNALING),
        exercise: pick("exercise", DEFAULT_EXERCISE),
        affirmation: pick("affirmation", DEFAULT_AFFIRMATION),
    })
}
