use serde::Deserialize;

/// Font family names for a document, resolved by the downstream renderer.
///
/// Families are passed explicitly into each build call; the builders never
/// read ambient state for styling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontFamilies {
    pub regular: Option<String>,
    pub bold: Option<String>,
    /// Face used for tokens whose digits were normalized out of
    /// Persian-indic form. Falls back to the regular face when unset.
    pub alt_numeral: Option<String>,
    pub sizes: FontSizes,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub regular: f32,
    pub bold: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { regular: 10.0, bold: 12.0 }
    }
}

/// Which configured family a text span should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontRole {
    #[default]
    Regular,
    Bold,
    AltNumeral,
}

impl FontFamilies {
    /// Resolves a role to a family name, if one is configured for it.
    pub fn family_for(&self, role: FontRole) -> Option<&str> {
        match role {
            FontRole::Regular => self.regular.as_deref(),
            FontRole::Bold => self.bold.as_deref(),
            FontRole::AltNumeral => self.alt_numeral.as_deref().or(self.regular.as_deref()),
        }
    }
}
