use crate::models::manifest::{AddonRecommendation, ThemeExtrasManifest};
use std::collections::HashSet;

/// Recommended add-ons that are not installed, in manifest order, without repeats.
pub fn missing_recommendations<'a>(
    extras: &'a ThemeExtrasManifest,
    installed_addon_ids: &HashSet<String>,
) -> Vec<&'a AddonRecommendation> {
    let mut seen = HashSet::new();
    extras
        .recommendations
        .iter()
        .filter(|r| !installed_addon_ids.contains(&r.addon_id))
        .filter(|r| seen.insert(r.addon_id.as_str()))
        .collect()
}
