#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;
use thiserror::Error;

use crate::{assets::assets::AssetProvider, theme::Theme};

/// Theme definitions bundled with the crate.
#[derive(RustEmbed)]
#[folder = "themes/"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct ThemeAssets;

impl AssetProvider for ThemeAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(ThemeAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("no embedded theme named {0:?}")]
    Unknown(String),
    #[error("embedded theme is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("could not parse embedded theme")]
    Parse(#[from] serde_json::Error),
}

impl Theme {
    /// Loads a bundled theme by file stem, e.g. `"crown_quest"`.
    pub fn load_embedded(name: &str) -> Result<Theme, ThemeLoadError> {
        let path = format!("{name}.json");
        let file = <ThemeAssets as RustEmbed>::get(&path)
            .ok_or_else(|| ThemeLoadError::Unknown(name.to_owned()))?;

        let text = std::str::from_utf8(file.data.as_ref())?;
        Ok(Theme::from_string(text)?)
    }
}
