//! Static presentation tables consumed by the resume renderer.
//!
//! Values are utility-class tokens understood by the front end; the service
//! only stores and hands them out.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Classic,
    Modern,
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyles {
    pub header_font_size: &'static str,
    pub header_spacing: &'static str,
    pub section_spacing: &'static str,
    pub section_header_size: &'static str,
    pub section_header_weight: &'static str,
    pub section_header_tracking: &'static str,
    pub body_font_size: &'static str,
    pub line_height: &'static str,
    pub border_style: &'static str,
    pub padding: &'static str,
}

impl TemplateType {
    pub const ALL: [TemplateType; 3] = [
        TemplateType::Classic,
        TemplateType::Modern,
        TemplateType::Minimal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateType::Classic => "classic",
            TemplateType::Modern => "modern",
            TemplateType::Minimal => "minimal",
        }
    }

    pub fn styles(self) -> TemplateStyles {
        match self {
            TemplateType::Classic => TemplateStyles {
                header_font_size: "text-2xl",
                header_spacing: "mb-2",
                section_spacing: "space-y-6",
                section_header_size: "text-[10px]",
                section_header_weight: "font-semibold",
                section_header_tracking: "tracking-[0.2em]",
                body_font_size: "text-sm",
                line_height: "leading-relaxed",
                border_style: "border-b border-black",
                padding: "p-6",
            },
            TemplateType::Modern => TemplateStyles {
                header_font_size: "text-2xl",
                header_spacing: "mb-3",
                section_spacing: "space-y-5",
                section_header_size: "text-xs",
                section_header_weight: "font-semibold",
                section_header_tracking: "tracking-widest",
                body_font_size: "text-sm",
                line_height: "leading-relaxed",
                border_style: "border-b border-black/20",
                padding: "p-6",
            },
            TemplateType::Minimal => TemplateStyles {
                header_font_size: "text-xl",
                header_spacing: "mb-2",
                section_spacing: "space-y-4",
                section_header_size: "text-[10px]",
                section_header_weight: "font-medium",
                section_header_tracking: "tracking-[0.15em]",
                body_font_size: "text-xs",
                line_height: "leading-normal",
                border_style: "border-b border-black/10",
                padding: "p-5",
            },
        }
    }
}

impl FromStr for TemplateType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accent colors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Teal,
    Navy,
    Burgundy,
    Forest,
    Charcoal,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Teal,
        ColorTheme::Navy,
        ColorTheme::Burgundy,
        ColorTheme::Forest,
        ColorTheme::Charcoal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ColorTheme::Teal => "teal",
            ColorTheme::Navy => "navy",
            ColorTheme::Burgundy => "burgundy",
            ColorTheme::Forest => "forest",
            ColorTheme::Charcoal => "charcoal",
        }
    }

    pub fn hsl(self) -> &'static str {
        match self {
            ColorTheme::Teal => "hsl(168, 60%, 40%)",
            ColorTheme::Navy => "hsl(220, 60%, 35%)",
            ColorTheme::Burgundy => "hsl(345, 60%, 35%)",
            ColorTheme::Forest => "hsl(150, 50%, 30%)",
            ColorTheme::Charcoal => "hsl(0, 0%, 25%)",
        }
    }
}

impl FromStr for ColorTheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTheme::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or(())
    }
}
