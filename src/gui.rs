use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::assets;
use crate::config::{self, FPS, ITEM_RADIUS};
use crate::economy::{GameState, Upgrade};
use crate::format;
use crate::launcher::{Launcher, MenuAction};
use crate::layout::{Layout, Region};

const FLASH_TIME: Duration = Duration::from_millis(120);
const HOVER_BOOST: u8 = 30;

fn brighten(color: egui::Color32, by: u8) -> egui::Color32 {
    egui::Color32::from_rgb(
        color.r().saturating_add(by),
        color.g().saturating_add(by),
        color.b().saturating_add(by),
    )
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn draw_menu_button(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    hovered: bool,
    scale: f32,
) {
    // Hover glow
    let bg_color = if hovered { config::MENU_GLOW } else { config::MENU_RED };
    painter.rect_filled(rect, egui::Rounding::same(20.0 * scale), bg_color);

    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(44.0 * scale),
        config::MENU_TEXT,
    );
}

fn draw_upgrade_row(
    painter: &egui::Painter,
    row: egui::Rect,
    buy: egui::Rect,
    upgrade: &Upgrade,
    can_afford: bool,
    hover: Option<egui::Pos2>,
) {
    painter.rect_filled(row, egui::Rounding::same(5.0), config::ROW_GRAY);

    let text_x = row.left() + 10.0;
    painter.text(
        egui::pos2(text_x, row.top() + 5.0),
        egui::Align2::LEFT_TOP,
        format!("{} (Lvl {})", upgrade.name, upgrade.level),
        egui::FontId::proportional(24.0),
        config::TEXT,
    );
    painter.text(
        egui::pos2(text_x, row.top() + 35.0),
        egui::Align2::LEFT_TOP,
        &upgrade.description,
        egui::FontId::proportional(16.0),
        config::TEXT,
    );
    painter.text(
        egui::pos2(text_x, row.top() + 70.0),
        egui::Align2::LEFT_TOP,
        format::cost(upgrade.current_cost()),
        egui::FontId::proportional(24.0),
        config::TEXT,
    );

    // Affordability only changes the colour, the button is always clickable.
    let mut button_color = if can_afford { config::BUY_GREEN } else { config::ITEM_RED };
    if can_afford && hover.is_some_and(|pos| buy.contains(pos)) {
        button_color = brighten(button_color, HOVER_BOOST);
    }
    painter.rect_filled(buy, egui::Rounding::same(10.0), button_color);
    painter.text(
        buy.center(),
        egui::Align2::CENTER_CENTER,
        "Buy",
        egui::FontId::proportional(24.0),
        config::TEXT,
    );
}

struct GameScene {
    state: GameState,
    item: egui::TextureHandle,
    item_loaded: bool,
    flash_until: Option<Instant>,
}

impl GameScene {
    fn new(ctx: &egui::Context) -> Self {
        let item = assets::load_item_image(Path::new(config::MAIN_ITEM_IMAGE_FILE));
        Self {
            state: GameState::new(config::default_upgrades()),
            item: ctx.load_texture("main-item", item.image, egui::TextureOptions::LINEAR),
            item_loaded: item.loaded,
            flash_until: None,
        }
    }

    fn handle_clicks(&mut self, clicks: &[egui::Pos2], layout: &Layout, now: Instant) {
        for &pos in clicks {
            if self.state.route_click(pos, layout) && !self.item_loaded {
                self.flash_until = Some(now + FLASH_TIME);
            }
        }
    }

    fn paint(
        &self,
        painter: &egui::Painter,
        layout: &Layout,
        screen: egui::Rect,
        hover: Option<egui::Pos2>,
        now: Instant,
    ) {
        painter.rect_filled(screen, egui::Rounding::ZERO, config::BACKGROUND);

        if let Some(item_rect) = layout.get(Region::MainItem) {
            painter.image(self.item.id(), item_rect, full_uv(), egui::Color32::WHITE);
            if self.flash_until.is_some_and(|until| now < until) {
                painter.circle_stroke(
                    item_rect.center(),
                    ITEM_RADIUS + 5.0,
                    egui::Stroke::new(5.0, config::MENU_GLOW),
                );
            }
        }

        let left_center = screen.left() + screen.width() / 4.0;
        painter.text(
            egui::pos2(left_center, screen.top() + 50.0),
            egui::Align2::CENTER_TOP,
            format::balance(self.state.balance()),
            egui::FontId::proportional(40.0),
            config::TEXT,
        );
        painter.text(
            egui::pos2(left_center, screen.top() + 100.0),
            egui::Align2::CENTER_TOP,
            format::rate(self.state.passive_rate()),
            egui::FontId::proportional(24.0),
            config::TEXT,
        );

        if let Some(panel) = layout.get(Region::Panel) {
            painter.rect_filled(panel, egui::Rounding::ZERO, config::PANEL);
            painter.text(
                egui::pos2(panel.center().x, panel.top() + 20.0),
                egui::Align2::CENTER_TOP,
                "Upgrades",
                egui::FontId::proportional(40.0),
                config::TEXT,
            );
        }

        for (index, buy) in layout.buy_buttons() {
            let row = layout.get(Region::Row(index));
            let (Some(row), Some(upgrade)) = (row, self.state.upgrades().get(index)) else {
                continue;
            };
            draw_upgrade_row(painter, row, buy, upgrade, self.state.can_afford(index), hover);
        }
    }
}

enum Scene {
    Menu,
    Game(GameScene),
}

pub struct ClickerApp {
    launcher: Launcher,
    background: Option<egui::TextureHandle>,
    scene: Scene,
}

impl ClickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let size = [config::MENU_SIZE[0] as u32, config::MENU_SIZE[1] as u32];
        let background = assets::load_background(Path::new(config::MENU_BACKGROUND_FILE), size)
            .map(|image| {
                cc.egui_ctx
                    .load_texture("menu-background", image, egui::TextureOptions::LINEAR)
            });

        Self {
            launcher: Launcher::new(),
            background,
            scene: Scene::Menu,
        }
    }

    fn start_game(&mut self, ctx: &egui::Context) {
        tracing::info!("starting game");
        self.scene = Scene::Game(GameScene::new(ctx));
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(config::game_title()));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(config::GAME_SIZE.into()));
        ctx.request_repaint();
    }

    fn update_menu(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        screen: egui::Rect,
        clicks: &[egui::Pos2],
        hover: Option<egui::Pos2>,
    ) {
        let layout = Layout::menu(screen);

        for &pos in clicks {
            let action = layout
                .hit(pos)
                .and_then(|region| self.launcher.dispatch(region));
            let Some(action) = action else {
                continue;
            };
            match action {
                MenuAction::StartGame => {
                    self.start_game(ctx);
                    return;
                }
                MenuAction::Options => {}
                MenuAction::Quit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    return;
                }
            }
        }

        match &self.background {
            Some(texture) => {
                painter.image(texture.id(), screen, full_uv(), egui::Color32::WHITE);
            }
            None => {
                painter.rect_filled(screen, egui::Rounding::ZERO, config::MENU_FALLBACK_FILL);
            }
        }

        let scale = screen.height() / config::MENU_SIZE[1];
        if let Some(title) = layout.get(Region::Title) {
            painter.text(
                title.center(),
                egui::Align2::CENTER_CENTER,
                config::MENU_TITLE,
                egui::FontId::proportional(100.0 * scale),
                config::MENU_GLOW,
            );
        }
        let buttons = [
            (Region::Start, "Start"),
            (Region::Options, "Options"),
            (Region::Quit, "Quit"),
        ];
        for (region, text) in buttons {
            if let Some(rect) = layout.get(region) {
                let hovered = hover.is_some_and(|pos| rect.contains(pos));
                draw_menu_button(painter, rect, text, hovered, scale);
            }
        }
    }
}

impl eframe::App for ClickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fixed 60 Hz pacing
        ctx.request_repaint_after(Duration::from_secs_f64(1.0 / FPS as f64));

        let screen = ctx.screen_rect();
        let (clicks, hover) = ctx.input(|i| {
            let clicks: Vec<egui::Pos2> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed: true,
                        ..
                    } => Some(*pos),
                    _ => None,
                })
                .collect();
            (clicks, i.pointer.hover_pos())
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let painter = ui.painter().clone();
                if let Scene::Game(game) = &mut self.scene {
                    // One layout per frame, shared by input routing and painting.
                    let now = Instant::now();
                    let layout = Layout::game(screen, game.state.upgrades().len());
                    game.handle_clicks(&clicks, &layout, now);
                    game.state.update(now);
                    game.paint(&painter, &layout, screen, hover, now);
                } else {
                    self.update_menu(ctx, &painter, screen, &clicks, hover);
                }
            });
    }
}
