use egui::Color32;

use crate::economy::Upgrade;

// Game currency, shown next to every amount.
pub const CURRENCY_NAME: &str = "Souls";
pub const CURRENCY_SYMBOL: &str = "€";

// Put the image next to the executable's working directory to replace the placeholder.
pub const MAIN_ITEM_IMAGE_FILE: &str = "soul.png";
pub const MENU_BACKGROUND_FILE: &str = "background.jpg";

pub const MENU_TITLE: &str = "Abyssgate Incremental";
pub const MENU_SIZE: [f32; 2] = [1920.0, 1080.0];
pub const GAME_SIZE: [f32; 2] = [900.0, 700.0];

pub const FPS: u32 = 60;

pub const ITEM_RADIUS: f32 = 120.0;

pub const COST_GROWTH: f64 = 1.15;

// Gameplay palette
pub const BACKGROUND: Color32 = Color32::from_rgb(25, 25, 35);
pub const TEXT: Color32 = Color32::from_rgb(240, 240, 240);
pub const ITEM_RED: Color32 = Color32::from_rgb(180, 50, 50);
pub const PANEL: Color32 = Color32::from_rgb(80, 0, 0);
pub const BUY_GREEN: Color32 = Color32::from_rgb(50, 180, 50);
pub const ROW_GRAY: Color32 = Color32::from_rgb(50, 50, 60);

// Menu palette
pub const MENU_RED: Color32 = Color32::from_rgb(150, 0, 0);
pub const MENU_GLOW: Color32 = Color32::from_rgb(255, 40, 40);
pub const MENU_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const MENU_FALLBACK_FILL: Color32 = Color32::from_rgb(20, 0, 0);

pub fn game_title() -> String {
    format!("Abyssal Clicker: {CURRENCY_NAME} soul")
}

/// Upgrades offered at startup, in display order.
pub fn default_upgrades() -> Vec<Upgrade> {
    vec![
        Upgrade::new("Spectral Harvester", 15.0, 0.1, 0.0, "Increases click yield by 0.1"),
        Upgrade::new(
            "Lesser Demon Imp",
            100.0,
            0.0,
            1.0,
            format!("Generates 1 {CURRENCY_SYMBOL}/s passively"),
        ),
        Upgrade::new(
            "Abyssal Portal I",
            1100.0,
            0.0,
            8.0,
            format!("Generates 8 {CURRENCY_SYMBOL}/s passively"),
        ),
        Upgrade::new(
            "Greater Demon Lord",
            5000.0,
            1.0,
            50.0,
            "Big boost to click and passive income",
        ),
    ]
}
