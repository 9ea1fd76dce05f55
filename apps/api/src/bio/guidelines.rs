//! Checks on generated bios.
//!
//! Two tiers: shape rules are part of the response contract and reject the
//! whole response; generation guidelines are only reported, since the model
//! is asked to follow them but nothing downstream depends on them.

use serde::Serialize;
use thiserror::Error;

use crate::bio::models::{BioRequest, BioResponse};

/// Fewest bios a conforming response may carry.
pub const MIN_BIOS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("expected at least {min} bios, got {found}")]
    TooFewBios { found: usize, min: usize },

    #[error("bio {index} contains hashtag token '{token}'")]
    Hashtag { index: usize, token: String },
}

/// Enforced rules: at least [`MIN_BIOS`] entries and no `#`-prefixed tokens.
pub fn check_shape(response: &BioResponse) -> Result<(), ShapeViolation> {
    if response.data.len() < MIN_BIOS {
        return Err(ShapeViolation::TooFewBios {
            found: response.data.len(),
            min: MIN_BIOS,
        });
    }

    for (index, bio) in response.bios().enumerate() {
        if let Some(token) = hashtag_tokens(bio).next() {
            return Err(ShapeViolation::Hashtag {
                index,
                token: token.to_string(),
            });
        }
    }

    Ok(())
}

/// Whitespace-separated tokens that begin with `#`.
pub fn hashtag_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|t| t.starts_with('#'))
}

/// True if `text` contains a pictographic emoji or emoji presentation selector.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF // pictographs, emoticons, transport, flags, supplemental symbols
            | 0x2600..=0x27BF // misc symbols and dingbats
            | 0x2300..=0x23FF // watch, hourglass, media controls
            | 0x2B05..=0x2B55 // arrows, star, circle
            | 0xFE0F
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

/// Soft guideline results for one response. Indexes refer to `BioResponse::data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuidelineReport {
    /// Bios shorter (in characters) than the user's input.
    pub shorter_than_input: Vec<usize>,
    /// Bios containing emoji although the user turned emojis off.
    pub unexpected_emoji: Vec<usize>,
}

impl GuidelineReport {
    pub fn review(request: &BioRequest, response: &BioResponse) -> Self {
        let min_chars = request.content_chars();
        let mut report = GuidelineReport::default();

        for (index, bio) in response.bios().enumerate() {
            if bio.chars().count() < min_chars {
                report.shorter_than_input.push(index);
            }
            if !request.emojis() && contains_emoji(bio) {
                report.unexpected_emoji.push(index);
            }
        }

        report
    }

    pub fn is_clean(&self) -> bool {
        self.shorter_than_input.is_empty() && self.unexpected_emoji.is_empty()
    }
}
