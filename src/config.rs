//! Board configuration.
//!
//! Defaults match the stock board: three seed cards, 200×200 px cards, rows of five.
//! A page can override any field with an embedded JSON block:
//!
//! ```html
//! <script id="board-config" type="application/json">{ "row_len": 4 }</script>
//! ```

use serde::Deserialize;
use crate::error::BoardError;

pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub card_width: i32,
    pub card_height: i32,
    /// Cards per rendered row
    pub row_len: usize,
    pub seed_cards: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_width: 200,
            card_height: 200,
            row_len: 5,
            seed_cards: 3,
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let config: BoardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.row_len == 0 {
            return Err(BoardError::InvalidConfig("row_len must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Reads the embedded config block, if the page has one.
    pub fn from_document() -> Result<Self, BoardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BoardError::DocumentUnavailable)?;

        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Like `from_document`, but logs problems and falls back to defaults.
    pub fn load() -> Self {
        match Self::from_document() {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("Using default board config: {}", e).into());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = BoardConfig::from_json(r#"{ "row_len": 4, "seed_cards": 0 }"#).unwrap();
        assert_eq!(config.row_len, 4);
        assert_eq!(config.seed_cards, 0);
        assert_eq!(config.card_width, 200);
        assert_eq!(config.card_height, 200);
    }

    #[test]
    fn zero_row_len_is_rejected() {
        let err = BoardConfig::from_json(r#"{ "row_len": 0 }"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_an_invalid_config() {
        let err = BoardConfig::from_json("{ row_len: ").unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(_)));
    }
}
