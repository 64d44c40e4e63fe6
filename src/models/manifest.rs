use serde::{Deserialize, Deserializer, Serialize};

/// `theme.yaml`, as written by theme authors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ThemeManifest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub version: Option<String>,
}

// Authors write `Version: 1.0` as often as `Version: "1.0"`.
fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// `themeExtras.yaml`: which paths survive theme updates and which add-ons
/// the theme works best with.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ThemeExtrasManifest {
    #[serde(default)]
    pub persistent_paths: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Vec<AddonRecommendation>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct AddonRecommendation {
    pub addon_id: String,
    #[serde(default)]
    pub addon_name: String,
}
