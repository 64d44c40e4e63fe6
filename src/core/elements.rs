use crate::core::game_sync::GameProperty;
use crate::core::rating::RatingSource;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Source name the custom elements are registered under with the host.
pub const ELEMENT_SOURCE: &str = "ThemeExtras";
/// Each kind can be placed up to this many times in one view.
pub const VARIANTS: u8 = 3;

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SettableCompletionStatus,
    SettableFavorite,
    SettableHidden,
    SettableUserScore,
    UserRating,
    CommunityRating,
    CriticRating,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        ElementKind::SettableCompletionStatus,
        ElementKind::SettableFavorite,
        ElementKind::SettableHidden,
        ElementKind::SettableUserScore,
        ElementKind::UserRating,
        ElementKind::CommunityRating,
        ElementKind::CriticRating,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.to_string() == name)
    }

    fn construct(self) -> CustomElement {
        match self {
            ElementKind::SettableCompletionStatus => CustomElement::Settable(GameProperty::CompletionStatus),
            ElementKind::SettableFavorite => CustomElement::Settable(GameProperty::Favorite),
            ElementKind::SettableHidden => CustomElement::Settable(GameProperty::Hidden),
            ElementKind::SettableUserScore => CustomElement::Settable(GameProperty::UserScore),
            ElementKind::UserRating => CustomElement::Rating(RatingSource::User),
            ElementKind::CommunityRating => CustomElement::Rating(RatingSource::Community),
            ElementKind::CriticRating => CustomElement::Rating(RatingSource::Critic),
        }
    }
}

/// What the host should render for an element.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomElement {
    /// Edits a property of the selected game through the settings mirror.
    Settable(GameProperty),
    /// Read-only star rating.
    Rating(RatingSource),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementRequest {
    pub kind: ElementKind,
    pub variant: u8,
}

impl ElementRequest {
    /// `"UserRating"` is variant 0, `"UserRating2"` variant 2.
    pub fn parse(name: &str) -> Option<Self> {
        let base = name.trim_end_matches(|c: char| c.is_ascii_digit());
        let suffix = &name[base.len()..];
        let kind = ElementKind::from_name(base)?;

        let variant = match suffix {
            "" => 0,
            s if s.starts_with('0') => return None,
            s => s.parse::<u8>().ok().filter(|v| *v < VARIANTS)?,
        };

        Some(Self { kind, variant })
    }

    pub fn name(&self) -> String {
        match self.variant {
            0 => self.kind.to_string(),
            v => format!("{}{}", self.kind, v),
        }
    }

    pub fn build(&self) -> CustomElement {
        self.kind.construct()
    }
}

/// Every element name registered with the host, kind by kind.
pub fn supported_element_names() -> Vec<String> {
    ElementKind::ALL
        .into_iter()
        .flat_map(|kind| (0..VARIANTS).map(move |variant| ElementRequest { kind, variant }.name()))
        .collect()
}
