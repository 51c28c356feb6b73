//! Explicit session context shared by every scene.
//!
//! A [`Session`] owns the mutable game state together with the read-only
//! catalog, the scene navigator and the player-facing message log. Scenes
//! receive `&mut Session` rather than global state.

use market_content::{ContentFactory, ItemCatalog};
use market_core::{
    Action, ActionResult, AddCurrencyAction, AddToCartAction, AisleId, ExecuteError,
    ExecutionOutcome, GameConfig, GameEngine, GameError, GameState, ItemId, PlaceOnShelfAction,
    RemoveFromCartAction, ShelfAddress, SwitchAisleAction, TakeFromShelfAction,
};

use crate::config::{FrontendConfig, MessageConfig};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::navigation::{
    NavigationError, Navigator, SceneDriver, SceneKey, SlideEvent, SwitchOutcome,
};

pub struct Session {
    config: GameConfig,
    state: GameState,
    catalog: ItemCatalog,
    navigator: Navigator,
    messages: MessageLog,
    message_config: MessageConfig,
    sequence: u64,
}

impl Session {
    pub fn new(config: GameConfig, mut catalog: ItemCatalog, frontend: &FrontendConfig) -> Self {
        catalog.set_asset_mode(frontend.asset_mode);
        Self {
            state: GameState::new(&config),
            config,
            catalog,
            navigator: Navigator::default(),
            messages: MessageLog::new(frontend.messages.capacity),
            message_config: frontend.messages.clone(),
            sequence: 0,
        }
    }

    /// Loads config and catalog through `factory` and starts a fresh session.
    pub fn from_factory(factory: &ContentFactory, frontend: &FrontendConfig) -> anyhow::Result<Self> {
        let config = factory.load_config()?;
        let catalog = factory.load_catalog()?;
        tracing::info!(
            items = catalog.len(),
            cart_max_slots = config.cart_max_slots,
            initial_stack_size = config.initial_stack_size,
            "session content loaded"
        );
        Ok(Self::new(config, catalog, frontend))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ItemCatalog {
        &mut self.catalog
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Number of actions executed since the session started or was reset.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Discards all progress: fresh state, no current scene, empty log.
    pub fn reset(&mut self) {
        tracing::info!(sequence = self.sequence, "session reset");
        self.state = GameState::new(&self.config);
        self.navigator.reset();
        self.messages.clear();
        self.sequence = 0;
    }

    pub fn add_item_to_cart(
        &mut self,
        item_id: impl Into<ItemId>,
        quantity: Option<u32>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(AddToCartAction::new(item_id, quantity).into())
    }

    pub fn remove_item_from_cart(
        &mut self,
        slot_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(RemoveFromCartAction::new(slot_index).into())
    }

    pub fn place_item_on_shelf(
        &mut self,
        cart_slot_index: usize,
        aisle_id: impl Into<AisleId>,
        shelf_index: usize,
        position_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let target = ShelfAddress::new(aisle_id, shelf_index, position_index);
        self.execute(PlaceOnShelfAction::new(cart_slot_index, target).into())
    }

    pub fn remove_item_from_shelf(
        &mut self,
        aisle_id: impl Into<AisleId>,
        shelf_index: usize,
        position_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let target = ShelfAddress::new(aisle_id, shelf_index, position_index);
        self.execute(TakeFromShelfAction::new(target).into())
    }

    pub fn add_currency(&mut self, amount: i64) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(AddCurrencyAction::new(amount).into())
    }

    pub fn switch_aisle(
        &mut self,
        aisle_id: impl Into<AisleId>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SwitchAisleAction::new(aisle_id).into())
    }

    /// Runs `action` against the session state and records the outcome in
    /// the message log.
    pub fn execute(&mut self, action: Action) -> Result<ExecutionOutcome, ExecuteError> {
        self.sequence += 1;
        let sequence = self.sequence;
        let label = action.as_str();

        let result = GameEngine::new(&mut self.state).execute(&action);
        match &result {
            Ok(outcome) => {
                tracing::debug!(
                    sequence,
                    action = label,
                    fields = ?outcome.delta.fields,
                    "action applied"
                );
                if self.message_config.show_success {
                    let text = self.describe(&outcome.result);
                    self.messages.push(MessageEntry::for_action(
                        label,
                        sequence,
                        text,
                        MessageLevel::Info,
                    ));
                }
            }
            Err(error) => {
                if error.severity().is_internal() {
                    tracing::error!(sequence, action = label, code = error.error_code(), %error, "action broke an invariant");
                } else {
                    tracing::warn!(sequence, action = label, code = error.error_code(), %error, "action rejected");
                }
                let level = if error.severity().is_internal() {
                    MessageLevel::Error
                } else {
                    MessageLevel::Warning
                };
                self.messages.push(MessageEntry::for_action(
                    label,
                    sequence,
                    format!("Cannot {}: {}", label.replace('_', " "), error.reason()),
                    level,
                ));
            }
        }

        result
    }

    /// Requests a slide transition to `target`.
    pub fn switch_scene(
        &mut self,
        driver: &mut impl SceneDriver,
        target: SceneKey,
    ) -> Result<SwitchOutcome, NavigationError> {
        let outcome = self.navigator.switch_scene(driver, target);
        if let Err(error) = &outcome {
            tracing::error!(%target, code = error.error_code(), %error, "scene switch failed");
        }
        outcome
    }

    /// Forwards a finished tween to the navigator.
    pub fn on_slide_complete(&mut self, driver: &mut impl SceneDriver) -> SlideEvent {
        let event = self.navigator.on_slide_complete(driver);
        match event {
            SlideEvent::Finished(scene) => {
                tracing::info!(%scene, "scene entered");
                if self.message_config.show_success {
                    self.messages.push_text(format!("Entered {}", scene));
                }
            }
            SlideEvent::SceneMissing(scene) => {
                self.messages.push(MessageEntry::new(
                    format!("Scene {} is not available", scene),
                    None,
                    MessageLevel::Error,
                ));
            }
            SlideEvent::Switched(_) | SlideEvent::Idle => {}
        }
        event
    }

    /// Display name of an item, falling back to its id.
    pub fn item_name<'a>(&'a self, item_id: &'a str) -> &'a str {
        self.catalog
            .item(item_id)
            .map(|item| item.name.as_str())
            .unwrap_or(item_id)
    }

    fn describe(&self, result: &ActionResult) -> String {
        match result {
            ActionResult::AddedToCart { slot } => match self.state.cart.slot(*slot) {
                Some(stack) => format!(
                    "Added {} {} to cart slot {}",
                    stack.quantity,
                    self.item_name(stack.item_id.as_str()),
                    slot
                ),
                None => format!("Added to cart slot {}", slot),
            },
            ActionResult::ReturnedToStockroom(stack) => format!(
                "Returned {} {} to the stockroom",
                stack.quantity,
                self.item_name(stack.item_id.as_str())
            ),
            ActionResult::Placed(item_id) => {
                format!("Placed {} on the shelf", self.item_name(item_id.as_str()))
            }
            ActionResult::Taken(item_id) => {
                format!("Took {} off the shelf", self.item_name(item_id.as_str()))
            }
            ActionResult::Currency { total } => format!("Currency is now {}", total),
            ActionResult::AisleSwitched(aisle_id) => {
                match self.state.sales_floor.aisle(aisle_id.as_str()) {
                    Some(aisle) => format!("Now viewing {}", aisle.name),
                    None => format!("Now viewing {}", aisle_id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_content::AssetMode;
    use market_core::StackedItem;

    /// Driver whose tweens finish as soon as they start.
    #[derive(Default)]
    struct InstantDriver {
        pending: usize,
    }

    impl SceneDriver for InstantDriver {
        fn play_slide(&mut self, _tween: crate::navigation::SlideTween) {
            self.pending += 1;
        }

        fn switch_to(&mut self, _target: SceneKey) -> bool {
            true
        }
    }

    fn session() -> Session {
        let catalog = ItemCatalog::builtin().expect("bundled catalog should parse");
        Session::new(GameConfig::default(), catalog, &FrontendConfig::default())
    }

    #[test]
    fn operations_mutate_owned_state() {
        let mut session = session();

        session.add_item_to_cart("red-apple", Some(3)).unwrap();
        session.place_item_on_shelf(0, "aisle-1", 0, 0).unwrap();
        session.add_currency(10).unwrap();

        let state = session.state();
        assert_eq!(state.stockroom.quantity_of("red-apple"), 7);
        assert_eq!(state.cart.slots, vec![StackedItem::new("red-apple", 2)]);
        assert_eq!(state.currency.total, 10);
    }

    #[test]
    fn messages_use_catalog_names() {
        let mut session = session();

        session.add_item_to_cart("red-apple", Some(3)).unwrap();

        let entry = session.messages().recent(1).next().unwrap();
        assert_eq!(entry.text, "Added 3 Red Apple to cart slot 0");
        assert_eq!(entry.level, MessageLevel::Info);
        assert_eq!(entry.sequence, Some(1));
        assert_eq!(entry.action, Some("add_to_cart"));
    }

    #[test]
    fn rejections_are_logged_as_warnings() {
        let mut session = session();
        let snapshot = session.state().clone();

        assert!(session.remove_item_from_cart(0).is_err());

        assert_eq!(session.state(), &snapshot);
        let entry = session.messages().recent(1).next().unwrap();
        assert_eq!(entry.level, MessageLevel::Warning);
        assert_eq!(entry.action, Some("remove_from_cart"));
        assert!(entry.is_rejection());
        assert!(entry.text.starts_with("Cannot remove from cart:"));
    }

    #[test]
    fn success_messages_can_be_silenced() {
        let mut frontend = FrontendConfig::default();
        frontend.messages.show_success = false;
        let catalog = ItemCatalog::builtin().unwrap();
        let mut session = Session::new(GameConfig::default(), catalog, &frontend);

        session.switch_aisle("aisle-1").unwrap();
        assert!(session.messages().is_empty());

        assert!(session.switch_aisle("aisle-9").is_err());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn asset_mode_comes_from_frontend_config() {
        let mut frontend = FrontendConfig::default();
        frontend.asset_mode = AssetMode::Png;
        let catalog = ItemCatalog::builtin().unwrap();
        let session = Session::new(GameConfig::default(), catalog, &frontend);

        assert_eq!(
            session.catalog().asset("red-apple").as_deref(),
            Some("item_red-apple")
        );
    }

    #[test]
    fn scene_switch_runs_to_completion() {
        let mut session = session();
        let mut driver = InstantDriver::default();
        session.navigator_mut().initialize(SceneKey::SalesFloor);

        assert_eq!(
            session.switch_scene(&mut driver, SceneKey::Stockroom),
            Ok(SwitchOutcome::Started)
        );
        while driver.pending > 0 {
            driver.pending -= 1;
            session.on_slide_complete(&mut driver);
        }

        assert_eq!(session.navigator().current_scene(), Some(SceneKey::Stockroom));
        assert!(!session.navigator().is_transitioning());
        assert_eq!(session.messages().recent(1).next().unwrap().text, "Entered Stockroom");
    }

    #[test]
    fn reset_restores_fresh_session() {
        let mut session = session();
        session.navigator_mut().initialize(SceneKey::SalesFloor);
        session.add_item_to_cart("bread", None).unwrap();
        session.add_currency(25).unwrap();

        session.reset();

        assert_eq!(session.state(), &GameState::new(&GameConfig::default()));
        assert_eq!(session.navigator().current_scene(), None);
        assert!(session.messages().is_empty());
    }
}
