//! UI presentation parameters derived from a profile.
//!
//! Every field here is a function of `interface_style` alone. The three
//! presentation families are fixed:
//!
//! | Interface | Button | Font | Spacing | Contrast | Animation | Complexity |
//! |-----------|--------|------|---------|----------|-----------|------------|
//! | accessible | xl | xl | loose | high | minimal | simple |
//! | simple | lg | lg | normal | normal | standard | simple |
//! | premium | default | base | normal | normal | enhanced | advanced |

use serde::Serialize;

use crate::domain::learner::{InterfaceStyle, LearnerProfile};

crate::learner_enum! {
    /// Button size token
    ButtonSize {
        Sm => "sm",
        Default => "default",
        Lg => "lg",
        Xl => "xl",
    }
}

crate::learner_enum! {
    /// Body font size token
    FontSize {
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
    }
}

crate::learner_enum! {
    /// Layout spacing token
    Spacing {
        Tight => "tight",
        Normal => "normal",
        Loose => "loose",
    }
}

crate::learner_enum! {
    /// Colour contrast mode
    Contrast {
        Normal => "normal",
        High => "high",
    }
}

crate::learner_enum! {
    /// How much motion the UI uses
    AnimationLevel {
        Minimal => "minimal",
        Standard => "standard",
        Enhanced => "enhanced",
    }
}

crate::learner_enum! {
    /// How many controls and options are surfaced at once
    Complexity {
        Simple => "simple",
        Standard => "standard",
        Advanced => "advanced",
    }
}

crate::learner_enum! {
    /// Button visual treatment
    ButtonVariant {
        Outline => "outline",
        Minimal => "minimal",
        Primary => "primary",
    }
}

/// Presentation parameters for one render.
///
/// Derived on demand and never stored alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub button_size: ButtonSize,
    pub font_size: FontSize,
    pub spacing: Spacing,
    pub contrast: Contrast,
    pub animation_level: AnimationLevel,
    pub complexity: Complexity,
}

impl UiConfig {
    /// The configuration for one presentation family.
    pub fn for_interface(style: InterfaceStyle) -> Self {
        match style {
            InterfaceStyle::Accessible => Self {
                button_size: ButtonSize::Xl,
                font_size: FontSize::Xl,
                spacing: Spacing::Loose,
                contrast: Contrast::High,
                animation_level: AnimationLevel::Minimal,
                complexity: Complexity::Simple,
            },
            InterfaceStyle::Simple => Self {
                button_size: ButtonSize::Lg,
                font_size: FontSize::Lg,
                spacing: Spacing::Normal,
                contrast: Contrast::Normal,
                animation_level: AnimationLevel::Standard,
                complexity: Complexity::Simple,
            },
            InterfaceStyle::Premium => Self {
                button_size: ButtonSize::Default,
                font_size: FontSize::Base,
                spacing: Spacing::Normal,
                contrast: Contrast::Normal,
                animation_level: AnimationLevel::Enhanced,
                complexity: Complexity::Advanced,
            },
        }
    }
}

/// UI configuration for `profile`.
pub fn ui_config_for(profile: &LearnerProfile) -> UiConfig {
    UiConfig::for_interface(profile.interface_style)
}

/// Button treatment for `profile`, also keyed only on interface style.
pub fn button_variant_for(profile: &LearnerProfile) -> ButtonVariant {
    match profile.interface_style {
        InterfaceStyle::Accessible => ButtonVariant::Outline,
        InterfaceStyle::Simple => ButtonVariant::Minimal,
        InterfaceStyle::Premium => ButtonVariant::Primary,
    }
}
