use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Black,
}

/// Inline text styling. Sizes and tracking are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub italic: bool,
    pub underline: bool,
    pub tracking: Option<f32>,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        TextStyle {
            font: None,
            size,
            weight: FontWeight::Regular,
            color,
            italic: false,
            underline: false,
            tracking: None,
        }
    }

    pub fn font(mut self, family: &str) -> Self {
        self.font = Some(family.to_string());
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn tracking(mut self, tracking: f32) -> Self {
        self.tracking = Some(tracking);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// A line used for borders, rules and table strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dashed: bool,
}

impl Stroke {
    pub const fn solid(width: f32, color: Color) -> Self {
        Stroke {
            width,
            color,
            dashed: false,
        }
    }

    pub const fn dashed(width: f32, color: Color) -> Self {
        Stroke {
            width,
            color,
            dashed: true,
        }
    }
}

/// Optional stroke per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Borders {
    pub top: Option<Stroke>,
    pub right: Option<Stroke>,
    pub bottom: Option<Stroke>,
    pub left: Option<Stroke>,
}

impl Borders {
    pub const fn none() -> Self {
        Borders {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    pub const fn all(stroke: Stroke) -> Self {
        Borders {
            top: Some(stroke),
            right: Some(stroke),
            bottom: Some(stroke),
            left: Some(stroke),
        }
    }

    pub const fn top(stroke: Stroke) -> Self {
        Borders {
            top: Some(stroke),
            right: None,
            bottom: None,
            left: None,
        }
    }

    pub const fn bottom(stroke: Stroke) -> Self {
        Borders {
            top: None,
            right: None,
            bottom: Some(stroke),
            left: None,
        }
    }

    pub const fn left(stroke: Stroke) -> Self {
        Borders {
            top: None,
            right: None,
            bottom: None,
            left: Some(stroke),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}
