//! Screen geometry for both scenes.
//!
//! A [`Layout`] is computed once per frame from the current screen rectangle and
//! is then handed to both the input router and the painter, so a click is always
//! tested against the rectangles that are drawn in that same frame.

use std::collections::BTreeMap;

use egui::{pos2, vec2, Pos2, Rect};

use crate::config::{ITEM_RADIUS, MENU_SIZE};

const ROW_TOP: f32 = 80.0;
const ROW_SPACING: f32 = 120.0;
const ROW_HEIGHT: f32 = 110.0;
const BUY_SIZE: [f32; 2] = [100.0, 40.0];

const MENU_BUTTON_SIZE: [f32; 2] = [260.0, 80.0];
const MENU_TITLE_Y: f32 = 180.0;
const MENU_BUTTON_YS: [(Region, f32); 3] = [
    (Region::Start, 450.0),
    (Region::Options, 570.0),
    (Region::Quit, 690.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    MainItem,
    Panel,
    /// Background bar of the upgrade at this index.
    Row(usize),
    /// Buy button of the upgrade at this index.
    Buy(usize),
    Title,
    Start,
    Options,
    Quit,
}

impl Region {
    pub fn is_clickable(self) -> bool {
        !matches!(self, Region::Panel | Region::Row(_) | Region::Title)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    regions: BTreeMap<Region, Rect>,
}

impl Layout {
    /// Item on the left quarter, upgrade panel over the right half.
    pub fn game(screen: Rect, upgrade_count: usize) -> Self {
        let mut regions = BTreeMap::new();
        let (w, h) = (screen.width(), screen.height());
        let origin = screen.min;

        let item_center = origin + vec2(w / 4.0, h / 2.0);
        regions.insert(
            Region::MainItem,
            Rect::from_center_size(item_center, vec2(ITEM_RADIUS * 2.0, ITEM_RADIUS * 2.0)),
        );

        let panel_width = w / 2.0;
        let panel_x = origin.x + w - panel_width;
        regions.insert(
            Region::Panel,
            Rect::from_min_size(pos2(panel_x, origin.y), vec2(panel_width, h)),
        );

        let bar_width = panel_width - 20.0;
        for i in 0..upgrade_count {
            let row_y = origin.y + ROW_TOP + ROW_SPACING * i as f32;
            regions.insert(
                Region::Row(i),
                Rect::from_min_size(pos2(panel_x + 10.0, row_y), vec2(bar_width, ROW_HEIGHT)),
            );
            regions.insert(
                Region::Buy(i),
                Rect::from_min_size(
                    pos2(panel_x + bar_width - BUY_SIZE[0] - 10.0, row_y + 60.0),
                    BUY_SIZE.into(),
                ),
            );
        }

        Self { regions }
    }

    /// Title and the Start/Options/Quit column, scaled from a 1080 px tall reference.
    pub fn menu(screen: Rect) -> Self {
        let mut regions = BTreeMap::new();
        let scale = screen.height() / MENU_SIZE[1];
        let center_x = screen.center().x;

        regions.insert(
            Region::Title,
            Rect::from_center_size(
                pos2(center_x, screen.min.y + MENU_TITLE_Y * scale),
                vec2(screen.width(), 150.0 * scale),
            ),
        );
        for (region, y) in MENU_BUTTON_YS {
            regions.insert(
                region,
                Rect::from_center_size(
                    pos2(center_x, screen.min.y + y * scale),
                    vec2(MENU_BUTTON_SIZE[0] * scale, MENU_BUTTON_SIZE[1] * scale),
                ),
            );
        }

        Self { regions }
    }

    pub fn get(&self, region: Region) -> Option<Rect> {
        self.regions.get(&region).copied()
    }

    pub fn contains(&self, region: Region, pos: Pos2) -> bool {
        self.get(region).is_some_and(|rect| rect.contains(pos))
    }

    /// Clickable region under `pos`, if any.
    pub fn hit(&self, pos: Pos2) -> Option<Region> {
        self.regions
            .iter()
            .find(|(region, rect)| region.is_clickable() && rect.contains(pos))
            .map(|(region, _)| *region)
    }

    pub fn buy_buttons(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.regions.iter().filter_map(|(region, rect)| match region {
            Region::Buy(i) => Some((*i, *rect)),
            _ => None,
        })
    }
}
