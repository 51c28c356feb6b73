//! Read-eval-print loop over a [`Session`].

use std::io::{BufRead, Write};

use anyhow::Result;
use client_frontend_core::{
    IgnoreReason, MessageLevel, SceneKey, Session, SlideEvent, SwitchOutcome,
};
use market_core::{ExecuteError, ExecutionOutcome, GameError};

use crate::command::{self, Command};
use crate::driver::HeadlessDriver;

const PROMPT: &str = "market> ";
const LOG_LINES: usize = 10;

pub struct Repl {
    session: Session,
    driver: HeadlessDriver,
}

impl Repl {
    pub fn new(mut session: Session, driver: HeadlessDriver) -> Self {
        session.navigator_mut().initialize(SceneKey::SalesFloor);
        Self { session, driver }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to the market. Type `help` for commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match command::parse_line(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command, &mut output)?,
                Ok(None) => {}
                Err(error) => writeln!(output, "{}", error)?,
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        tracing::info!("input closed, leaving");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        tracing::debug!(?command, "command");
        match command {
            Command::Help => writeln!(output, "{}", command::HELP)?,
            Command::Stock => self.print_stock(output)?,
            Command::Cart => self.print_cart(output)?,
            Command::Floor => self.print_floor(output)?,
            Command::Items(category) => self.print_items(category, output)?,
            Command::Add { item_id, quantity } => {
                let result = self.session.add_item_to_cart(item_id, quantity);
                self.report(result, output)?;
            }
            Command::Return { slot } => {
                let result = self.session.remove_item_from_cart(slot);
                self.report(result, output)?;
            }
            Command::Place {
                slot,
                aisle_id,
                shelf,
                position,
            } => {
                let result = self
                    .session
                    .place_item_on_shelf(slot, aisle_id, shelf, position);
                self.report(result, output)?;
            }
            Command::Take {
                aisle_id,
                shelf,
                position,
            } => {
                let result = self
                    .session
                    .remove_item_from_shelf(aisle_id, shelf, position);
                self.report(result, output)?;
            }
            Command::Earn { amount } => {
                let result = self.session.add_currency(amount);
                self.report(result, output)?;
            }
            Command::Aisle { aisle_id } => {
                let result = self.session.switch_aisle(aisle_id);
                self.report(result, output)?;
            }
            Command::Go(target) => self.go(target, output)?,
            Command::Mode(mode) => {
                self.session.catalog_mut().set_asset_mode(mode);
                writeln!(output, "asset mode: {}", mode)?;
            }
            Command::Log => {
                let entries: Vec<_> = self.session.messages().recent(LOG_LINES).collect();
                for entry in entries.into_iter().rev() {
                    writeln!(output, "{}{}", level_marker(entry.level), entry.text)?;
                }
            }
            Command::Reset => {
                self.session.reset();
                self.session.navigator_mut().initialize(SceneKey::SalesFloor);
                self.driver = HeadlessDriver::new();
                writeln!(output, "session reset")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn report<W: Write>(
        &self,
        result: Result<ExecutionOutcome, ExecuteError>,
        output: &mut W,
    ) -> Result<()> {
        let sequence = Some(self.session.sequence());
        let latest = self
            .session
            .messages()
            .recent(1)
            .find(|entry| entry.sequence == sequence);

        match (result, latest) {
            (_, Some(entry)) => writeln!(output, "{}{}", level_marker(entry.level), entry.text)?,
            (Ok(_), None) => writeln!(output, "ok")?,
            (Err(error), None) => writeln!(output, "error [{}]: {}", error.error_code(), error.reason())?,
        }
        Ok(())
    }

    fn go<W: Write>(&mut self, target: SceneKey, output: &mut W) -> Result<()> {
        let outcome = match self.session.switch_scene(&mut self.driver, target) {
            Ok(outcome) => outcome,
            Err(error) => {
                writeln!(output, "error [{}]: {}; use `reset`", error.error_code(), error)?;
                return Ok(());
            }
        };
        match outcome {
            SwitchOutcome::Started => {}
            SwitchOutcome::Ignored(IgnoreReason::AlreadyCurrent) => {
                writeln!(output, "already in {}", target)?;
                return Ok(());
            }
            SwitchOutcome::Ignored(IgnoreReason::Transitioning) => {
                writeln!(output, "still moving, try again")?;
                return Ok(());
            }
        }

        while self.driver.finish_next().is_some() {
            match self.session.on_slide_complete(&mut self.driver) {
                SlideEvent::Finished(scene) => writeln!(output, "entered {}", scene)?,
                SlideEvent::SceneMissing(scene) => {
                    writeln!(output, "scene {} is not available; use `reset`", scene)?
                }
                SlideEvent::Switched(_) | SlideEvent::Idle => {}
            }
        }
        Ok(())
    }

    fn print_stock<W: Write>(&self, output: &mut W) -> Result<()> {
        let catalog = self.session.catalog();
        writeln!(output, "stockroom:")?;
        for stack in &self.session.state().stockroom.inventory {
            let asset = catalog.asset(stack.item_id.as_str()).unwrap_or_default();
            writeln!(
                output,
                "  {:<12} {:>3}  {} {}",
                stack.item_id.as_str(),
                stack.quantity,
                asset,
                self.session.item_name(stack.item_id.as_str())
            )?;
        }
        writeln!(output, "currency: {}", self.session.state().currency.total)?;
        Ok(())
    }

    fn print_cart<W: Write>(&self, output: &mut W) -> Result<()> {
        let cart = &self.session.state().cart;
        writeln!(output, "cart ({}/{} slots):", cart.len(), cart.max_slots)?;
        for (index, stack) in cart.slots.iter().enumerate() {
            writeln!(
                output,
                "  [{}] {} x{}",
                index,
                self.session.item_name(stack.item_id.as_str()),
                stack.quantity
            )?;
        }
        Ok(())
    }

    fn print_floor<W: Write>(&self, output: &mut W) -> Result<()> {
        let floor = &self.session.state().sales_floor;
        let Some(aisle) = floor.current_aisle() else {
            writeln!(output, "no aisle in view")?;
            return Ok(());
        };

        writeln!(output, "{} ({}):", aisle.name, aisle.id)?;
        for (shelf_index, shelf) in aisle.shelves.iter().enumerate() {
            writeln!(output, "  shelf {} [{}]", shelf_index, shelf.id)?;
            for (position_index, position) in shelf.positions.iter().enumerate() {
                let contents: Vec<String> = position
                    .items
                    .iter()
                    .map(|stack| {
                        let asset = self
                            .session
                            .catalog()
                            .asset(stack.item_id.as_str())
                            .unwrap_or_else(|| stack.item_id.to_string());
                        format!("{} x{}", asset, stack.quantity)
                    })
                    .collect();
                writeln!(
                    output,
                    "    {}: {}/{} {}",
                    position_index,
                    position.total_quantity(),
                    position.max_capacity,
                    contents.join(", ")
                )?;
            }
        }
        Ok(())
    }

    fn print_items<W: Write>(
        &self,
        category: Option<market_core::ItemCategory>,
        output: &mut W,
    ) -> Result<()> {
        let catalog = self.session.catalog();
        let mut items = match category {
            Some(category) => catalog.items_by_category(category),
            None => catalog.all_items(),
        };
        items.sort_by(|a, b| a.id.cmp(&b.id));

        for item in items {
            let asset = catalog.asset(&item.id).unwrap_or_default();
            let size = item.dimensions();
            writeln!(
                output,
                "  {:<12} {:<12} {:<10} {} {}x{}",
                item.id,
                item.name,
                item.category.as_str(),
                asset,
                size.width,
                size.height
            )?;
        }
        Ok(())
    }
}

fn level_marker(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "",
        MessageLevel::Warning => "! ",
        MessageLevel::Error => "!! ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::FrontendConfig;
    use market_content::ItemCatalog;
    use market_core::{GameConfig, StackedItem};

    fn repl() -> Repl {
        let catalog = ItemCatalog::builtin().expect("bundled catalog should parse");
        let session = Session::new(GameConfig::default(), catalog, &FrontendConfig::default());
        Repl::new(session, HeadlessDriver::new())
    }

    fn run(repl: &mut Repl, script: &str) -> String {
        let mut output = Vec::new();
        repl.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn stocks_a_shelf() {
        let mut repl = repl();

        let output = run(&mut repl, "add red-apple 3\nplace 0 aisle-1 0 0\nearn 10\nearn 5\n");

        let state = repl.session().state();
        assert_eq!(state.stockroom.quantity_of("red-apple"), 7);
        assert_eq!(state.cart.slots, vec![StackedItem::new("red-apple", 2)]);
        assert_eq!(
            state.sales_floor.position("aisle-1", 0, 0).unwrap().items,
            vec![StackedItem::new("red-apple", 1)]
        );
        assert_eq!(state.currency.total, 15);
        assert!(output.contains("Added 3 Red Apple to cart slot 0"));
        assert!(output.contains("Placed Red Apple on the shelf"));
        assert!(output.contains("Currency is now 15"));
    }

    #[test]
    fn rejections_and_parse_errors_are_printed() {
        let mut repl = repl();

        let output = run(&mut repl, "add caviar\ntake aisle-1\nfly\n");

        assert!(output.contains("! Cannot add to cart: item caviar is not stocked"));
        assert!(output.contains("`take` expects <shelf>"));
        assert!(output.contains("unknown command `fly`"));
    }

    #[test]
    fn earning_past_the_currency_limit_is_rejected() {
        let mut repl = repl();

        let output = run(&mut repl, "earn 9223372036854775807\nearn 1\n");

        assert!(output.contains("! Cannot add currency: adding 1 to 9223372036854775807 would overflow"));
        assert_eq!(repl.session().state().currency.total, i64::MAX);
    }

    #[test]
    fn navigates_between_scenes() {
        let mut repl = repl();

        let output = run(&mut repl, "go stockroom\ngo stockroom\ngo salesfloor\n");

        assert!(output.contains("entered Stockroom"));
        assert!(output.contains("already in Stockroom"));
        assert!(output.contains("entered SalesFloor"));
        assert_eq!(
            repl.session().navigator().current_scene(),
            Some(SceneKey::SalesFloor)
        );
    }

    #[test]
    fn missing_scene_leaves_navigator_uninitialized() {
        let catalog = ItemCatalog::builtin().unwrap();
        let session = Session::new(GameConfig::default(), catalog, &FrontendConfig::default());
        let driver = HeadlessDriver::with_scenes([SceneKey::SalesFloor, SceneKey::Stockroom]);
        let mut repl = Repl::new(session, driver);

        let output = run(&mut repl, "go gameover\n");

        assert!(output.contains("scene GameOver is not available"));
        assert_eq!(repl.session().navigator().current_scene(), None);

        let output = run(&mut repl, "go stockroom\n");
        assert!(output.contains("error [NAVIGATION_NOT_INITIALIZED]"));
    }

    #[test]
    fn mode_switches_asset_rendering() {
        let mut repl = repl();

        let output = run(&mut repl, "mode png\nitems fruit\n");

        assert!(output.contains("asset mode: png"));
        assert!(output.contains("item_red-apple"));
        assert!(!output.contains("item_milk"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut repl = repl();

        run(&mut repl, "quit\nearn 100\n");

        assert_eq!(repl.session().state().currency.total, 0);
    }
}
