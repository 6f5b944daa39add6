use serde::{Deserialize, Serialize};

/// 8-bit RGB triple, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

/// Named look. Only cosmetic; validation strictness is configured separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Merbabu,
    Classic,
}

impl ThemePreset {
    pub fn theme(self) -> Theme {
        match self {
            ThemePreset::Merbabu => Theme::merbabu(),
            ThemePreset::Classic => Theme::classic(),
        }
    }
}

/// Every cosmetic value the window uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub window_title: String,
    pub heading: String,
    pub window_size: [f32; 2],
    pub background: Rgb,
    pub heading_color: Rgb,
    pub form_fill: Rgb,
    pub button_fill: Rgb,
    pub button_text: Rgb,
    pub header_fill: Rgb,
    pub header_text: Rgb,
    pub table_fill: Rgb,
    pub grid_color: Rgb,
    pub heading_size: f32,
    pub label_size: f32,
    pub body_size: f32,
    pub row_height: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::merbabu()
    }
}

impl Theme {
    pub fn merbabu() -> Self {
        Self {
            window_title: "Manajer Inventaris - Toko Merbabu".to_string(),
            heading: "Toko Merbabu - Manajemen Inventaris".to_string(),
            window_size: [600.0, 500.0],
            background: Rgb::new(230, 240, 250),
            heading_color: Rgb::new(50, 50, 150),
            form_fill: Rgb::new(180, 200, 230),
            button_fill: Rgb::new(50, 150, 50),
            button_text: Rgb::WHITE,
            header_fill: Rgb::new(100, 150, 200),
            header_text: Rgb::WHITE,
            table_fill: Rgb::WHITE,
            grid_color: Rgb::new(192, 192, 192),
            heading_size: 20.0,
            label_size: 12.0,
            body_size: 12.0,
            row_height: 25.0,
        }
    }

    pub fn classic() -> Self {
        Self {
            window_title: "Manajer Inventaris".to_string(),
            heading: "Manajemen Inventaris".to_string(),
            window_size: [500.0, 400.0],
            background: Rgb::new(238, 238, 238),
            heading_color: Rgb::new(30, 30, 30),
            form_fill: Rgb::new(238, 238, 238),
            button_fill: Rgb::new(70, 110, 180),
            button_text: Rgb::WHITE,
            header_fill: Rgb::new(220, 220, 220),
            header_text: Rgb::new(30, 30, 30),
            table_fill: Rgb::WHITE,
            grid_color: Rgb::new(192, 192, 192),
            heading_size: 16.0,
            label_size: 12.0,
            body_size: 12.0,
            row_height: 20.0,
        }
    }
}
