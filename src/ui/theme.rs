use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),     // Blue
            accent: ColorSpec::rgb(255, 159, 196),      // Magenta
            banner: ColorSpec::rgb(255, 159, 196),      // Magenta
            text: ColorSpec::rgb(169, 177, 214),        // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),  // Comment
            success: ColorSpec::rgb(158, 206, 106),     // Green
            warning: ColorSpec::rgb(255, 202, 40),      // Yellow
            error: ColorSpec::rgb(247, 118, 142),       // Red
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),     // Purple
            accent: ColorSpec::rgb(255, 121, 198),      // Pink
            banner: ColorSpec::rgb(139, 233, 253),      // Cyan
            text: ColorSpec::rgb(248, 248, 242),        // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),   // Comment
            success: ColorSpec::rgb(80, 250, 123),      // Green
            warning: ColorSpec::rgb(241, 250, 140),     // Yellow
            error: ColorSpec::rgb(255, 85, 85),         // Red
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(98, 114, 164),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(40, 105, 131),      // Pine
            accent: ColorSpec::rgb(144, 122, 169),      // Iris
            banner: ColorSpec::rgb(215, 130, 126),      // Rose
            text: ColorSpec::rgb(87, 82, 121),          // Text
            text_muted: ColorSpec::rgb(152, 147, 165),  // Muted
            success: ColorSpec::rgb(86, 148, 159),      // Foam
            warning: ColorSpec::rgb(234, 157, 52),      // Gold
            error: ColorSpec::rgb(180, 99, 122),        // Love
            border_active: ColorSpec::rgb(40, 105, 131),
            border_normal: ColorSpec::rgb(152, 147, 165),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
