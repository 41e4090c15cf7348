use std::time::Instant;

use egui::Pos2;
use thiserror::Error;

use crate::config::COST_GROWTH;
use crate::layout::{Layout, Region};

/// A purchasable upgrade. Its cost grows by 15% per level.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub name: String,
    pub base_cost: f64,
    pub click_effect: f64,
    pub passive_effect: f64,
    pub description: String,
    pub level: u32,
}

impl Upgrade {
    pub fn new(
        name: impl Into<String>,
        base_cost: f64,
        click_effect: f64,
        passive_effect: f64,
        description: impl Into<String>,
    ) -> Self {
        debug_assert!(base_cost > 0.0);
        debug_assert!(click_effect >= 0.0 && passive_effect >= 0.0);
        Self {
            name: name.into(),
            base_cost,
            click_effect,
            passive_effect,
            description: description.into(),
            level: 0,
        }
    }

    /// `floor(base_cost * 1.15^level)`
    pub fn current_cost(&self) -> u64 {
        let exponent = i32::try_from(self.level).unwrap_or(i32::MAX);
        (self.base_cost * COST_GROWTH.powi(exponent)).floor() as u64
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PurchaseError {
    #[error("need {cost} to buy, have {balance:.2}")]
    InsufficientFunds { cost: u64, balance: f64 },
    #[error("no upgrade at index {0}")]
    UnknownUpgrade(usize),
}

pub struct GameState {
    balance: f64,
    passive_rate: f64,
    click_multiplier: f64,
    upgrades: Vec<Upgrade>,
    last_update: Instant,
}

impl GameState {
    pub fn new(upgrades: Vec<Upgrade>) -> Self {
        Self::starting_at(upgrades, Instant::now())
    }

    pub fn starting_at(upgrades: Vec<Upgrade>, now: Instant) -> Self {
        Self {
            balance: 0.0,
            passive_rate: 0.0,
            click_multiplier: 1.0,
            upgrades,
            last_update: now,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn passive_rate(&self) -> f64 {
        self.passive_rate
    }

    pub fn click_multiplier(&self) -> f64 {
        self.click_multiplier
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn can_afford(&self, index: usize) -> bool {
        self.upgrades
            .get(index)
            .is_some_and(|u| self.balance >= u.current_cost() as f64)
    }

    /// Advances passive income up to `now`. A clock that went backwards adds nothing.
    pub fn update(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_update);
        self.accrue(elapsed.as_secs_f64());
        self.last_update = now;
    }

    pub fn accrue(&mut self, elapsed_secs: f64) {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.balance += self.passive_rate * elapsed_secs;
        }
    }

    /// Returns true when `pos` hit the main item and the click was credited.
    pub fn handle_click(&mut self, pos: Pos2, layout: &Layout) -> bool {
        if layout.contains(Region::MainItem, pos) {
            self.balance += self.click_multiplier;
            true
        } else {
            false
        }
    }

    /// Routes one primary click: the item and every buy button are checked
    /// independently, so overlapping regions each get the click.
    /// Returns true when the item was hit.
    pub fn route_click(&mut self, pos: Pos2, layout: &Layout) -> bool {
        let hit_item = self.handle_click(pos, layout);
        for (index, rect) in layout.buy_buttons() {
            if !rect.contains(pos) {
                continue;
            }
            if let Err(err) = self.purchase(index) {
                tracing::debug!("purchase of upgrade {index} refused: {err}");
            }
        }
        hit_item
    }

    pub fn purchase(&mut self, index: usize) -> Result<&Upgrade, PurchaseError> {
        let upgrade = self
            .upgrades
            .get_mut(index)
            .ok_or(PurchaseError::UnknownUpgrade(index))?;
        let cost = upgrade.current_cost();
        if self.balance < cost as f64 {
            return Err(PurchaseError::InsufficientFunds {
                cost,
                balance: self.balance,
            });
        }

        self.balance -= cost as f64;
        upgrade.level += 1;
        self.click_multiplier += upgrade.click_effect;
        self.passive_rate += upgrade.passive_effect;

        tracing::info!("Bought {} (Lvl {})!", upgrade.name, upgrade.level);
        Ok(upgrade)
    }

    #[cfg(test)]
    pub(crate) fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_upgrades;
    use egui::{pos2, vec2, Rect};
    use proptest::prelude::*;
    use std::time::Duration;

    fn harvester() -> Upgrade {
        Upgrade::new("Spectral Harvester", 15.0, 0.1, 0.0, "Increases click yield by 0.1")
    }

    fn layout() -> Layout {
        Layout::game(Rect::from_min_size(Pos2::ZERO, vec2(900.0, 700.0)), 4)
    }

    #[test]
    fn fresh_state() {
        let state = GameState::new(default_upgrades());
        assert_eq!(state.balance(), 0.0);
        assert_eq!(state.passive_rate(), 0.0);
        assert_eq!(state.click_multiplier(), 1.0);
        assert_eq!(state.upgrades().len(), 4);
        assert!(state.upgrades().iter().all(|u| u.level == 0));
    }

    #[test]
    fn cost_follows_curve() {
        let mut u = harvester();
        assert_eq!(u.current_cost(), 15);
        u.level = 1;
        assert_eq!(u.current_cost(), 17); // 17.25
        u.level = 2;
        assert_eq!(u.current_cost(), 19); // 19.8375
        u.level = 10;
        assert_eq!(u.current_cost(), 60); // 60.68...
    }

    #[test]
    fn purchase_without_funds_changes_nothing() {
        let mut state = GameState::new(vec![harvester()]);
        state.set_balance(10.0);
        let err = state.purchase(0).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InsufficientFunds {
                cost: 15,
                balance: 10.0
            }
        );
        assert_eq!(state.balance(), 10.0);
        assert_eq!(state.upgrades()[0].level, 0);
        assert_eq!(state.click_multiplier(), 1.0);
    }

    #[test]
    fn purchase_applies_effects() {
        let mut state = GameState::new(vec![harvester()]);
        state.set_balance(20.0);
        let bought = state.purchase(0).unwrap();
        assert_eq!(bought.level, 1);
        assert_eq!(state.balance(), 5.0);
        assert!((state.click_multiplier() - 1.1).abs() < 1e-9);
        assert_eq!(state.passive_rate(), 0.0);
        assert_eq!(state.upgrades()[0].current_cost(), 17);
    }

    #[test]
    fn purchase_with_exact_balance() {
        let mut state = GameState::new(default_upgrades());
        state.set_balance(100.0);
        assert!(state.can_afford(1));
        state.purchase(1).unwrap();
        assert_eq!(state.balance(), 0.0);
        assert_eq!(state.passive_rate(), 1.0);
        assert!(!state.can_afford(1));
    }

    #[test]
    fn purchase_unknown_index() {
        let mut state = GameState::new(default_upgrades());
        state.set_balance(1_000_000.0);
        assert_eq!(state.purchase(9).unwrap_err(), PurchaseError::UnknownUpgrade(9));
        assert_eq!(state.balance(), 1_000_000.0);
        assert!(!state.can_afford(9));
    }

    #[test]
    fn greater_demon_lord_boosts_both() {
        let mut state = GameState::new(default_upgrades());
        state.set_balance(5000.0);
        state.purchase(3).unwrap();
        assert_eq!(state.click_multiplier(), 2.0);
        assert_eq!(state.passive_rate(), 50.0);
    }

    #[test]
    fn update_accrues_elapsed_time() {
        let start = Instant::now();
        let mut state = GameState::starting_at(default_upgrades(), start);
        state.set_balance(100.0);
        state.purchase(1).unwrap();

        state.update(start + Duration::from_millis(2500));
        assert!((state.balance() - 2.5).abs() < 1e-9);

        // the clock going backwards adds nothing and moves the mark back
        state.update(start);
        assert!((state.balance() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn accrue_ignores_negative_and_nan() {
        let mut state = GameState::new(default_upgrades());
        state.set_balance(100.0);
        state.purchase(1).unwrap();
        state.accrue(-3.0);
        state.accrue(f64::NAN);
        assert_eq!(state.balance(), 0.0);
    }

    #[test]
    fn click_inside_item_adds_multiplier() {
        let layout = layout();
        let mut state = GameState::new(default_upgrades());
        assert!(state.handle_click(pos2(225.0, 350.0), &layout));
        assert_eq!(state.balance(), 1.0);

        state.set_balance(15.0);
        state.purchase(0).unwrap();
        assert!(state.handle_click(pos2(225.0, 350.0), &layout));
        assert!((state.balance() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn click_outside_item_is_ignored() {
        let layout = layout();
        let mut state = GameState::new(default_upgrades());
        assert!(!state.handle_click(pos2(600.0, 100.0), &layout));
        assert!(!state.handle_click(pos2(10.0, 10.0), &layout));
        assert_eq!(state.balance(), 0.0);
    }

    #[test]
    fn cost_saturates_at_huge_levels() {
        let mut u = harvester();
        u.level = i32::MAX as u32;
        let at_max = u.current_cost();
        u.level = u32::MAX;
        assert_eq!(u.current_cost(), u64::MAX);
        assert!(u.current_cost() >= at_max);
    }

    #[test]
    fn click_on_buy_button_purchases() {
        let layout = layout();
        let buy = layout.get(Region::Buy(0)).unwrap().center();
        let mut state = GameState::new(default_upgrades());

        state.set_balance(10.0);
        assert!(!state.route_click(buy, &layout));
        assert_eq!(state.balance(), 10.0);
        assert_eq!(state.upgrades()[0].level, 0);

        state.set_balance(15.0);
        assert!(!state.route_click(buy, &layout));
        assert_eq!(state.balance(), 0.0);
        assert_eq!(state.upgrades()[0].level, 1);
        assert!((state.click_multiplier() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn overlapping_item_and_buy_button_both_fire() {
        // in a small window the item square reaches into the upgrade panel
        let layout = Layout::game(Rect::from_min_size(Pos2::ZERO, vec2(320.0, 300.0)), 4);
        let pos = pos2(195.0, 160.0);
        assert!(layout.contains(Region::MainItem, pos));
        assert!(layout.contains(Region::Buy(0), pos));

        let mut state = GameState::new(default_upgrades());
        state.set_balance(15.0);
        assert!(state.route_click(pos, &layout));
        // 15 + 1 from the item, then 15 spent on the upgrade
        assert_eq!(state.balance(), 1.0);
        assert_eq!(state.upgrades()[0].level, 1);
    }

    proptest! {
        #[test]
        fn cost_is_floor_of_curve(base in 1.0f64..10_000.0, level in 0u32..60) {
            let mut u = Upgrade::new("u", base, 0.0, 0.0, "");
            u.level = level;
            prop_assert_eq!(u.current_cost(), (base * 1.15f64.powi(level as i32)).floor() as u64);
        }

        #[test]
        fn cost_never_decreases(base in 1.0f64..10_000.0, level in 0u32..60) {
            let mut u = Upgrade::new("u", base, 0.0, 0.0, "");
            u.level = level;
            let before = u.current_cost();
            u.level += 1;
            prop_assert!(u.current_cost() >= before);
        }

        #[test]
        fn accrual_is_rate_times_elapsed(
            start in 0.0f64..1_000.0,
            rate_buys in 0usize..5,
            elapsed in 0.0f64..10_000.0,
        ) {
            let mut state = GameState::new(default_upgrades());
            state.set_balance(100.0 * rate_buys as f64 * 2.0);
            for _ in 0..rate_buys {
                state.purchase(1).unwrap();
            }
            state.set_balance(start);
            let rate = state.passive_rate();
            state.accrue(elapsed);
            prop_assert!((state.balance() - (start + rate * elapsed)).abs() < 1e-6);
            prop_assert!(state.balance() >= start);
        }
    }
}
