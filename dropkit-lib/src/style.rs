//! Presentation styling records.
//!
//! The style tree is opaque to the assembly core: it is cloned into each
//! constructed component and handed to the rendering layer untouched. The
//! core never branches on a style value.

use serde::{Deserialize, Serialize};

/// An RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel.
    pub alpha: u8,
}

impl Color {
    /// Create an opaque color from RGB channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }
}

/// Text appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Text color; `None` uses the platform default.
    pub color: Option<Color>,
    /// Font size in points; `None` uses the platform default.
    pub font_size: Option<f32>,
}

/// Form section header appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    /// Title text style.
    pub title: TextStyle,
}

/// Text field appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldStyle {
    /// Field title style.
    pub title: TextStyle,
    /// Entered text style.
    pub text: TextStyle,
    /// Accent color for the active field.
    pub tint_color: Option<Color>,
    /// Separator color below the field.
    pub separator_color: Option<Color>,
}

/// Switch row appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchStyle {
    /// Switch label style.
    pub title: TextStyle,
    /// Accent color of the switch.
    pub tint_color: Option<Color>,
}

/// Button appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Button title style.
    pub title: TextStyle,
    /// Fill color.
    pub background_color: Option<Color>,
    /// Corner radius in points.
    pub corner_radius: Option<f32>,
}

/// Form footer appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterStyle {
    /// Submit button style.
    pub button: ButtonStyle,
}

/// Styling for form-based components.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormComponentStyle {
    /// Header style.
    pub header: HeaderStyle,
    /// Text field style.
    pub text_field: TextFieldStyle,
    /// Switch row style.
    pub switch_item: SwitchStyle,
    /// Footer style.
    pub footer: FooterStyle,
    /// Primary button style.
    pub main_button: ButtonStyle,
    /// Secondary button style.
    pub secondary_button: ButtonStyle,
}

/// Styling for list-based components (issuer selection).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListComponentStyle {
    /// List row title style.
    pub list_item_title: TextStyle,
    /// Section header style.
    pub section_header: TextStyle,
    /// List background color.
    pub background_color: Option<Color>,
}

/// The complete style tree handed to the drop-in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropInStyle {
    /// Style for form-based components.
    pub form: FormComponentStyle,
    /// Style for list-based components.
    pub list: ListComponentStyle,
}
