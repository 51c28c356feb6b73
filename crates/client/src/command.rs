//! Line-oriented command grammar of the headless driver.

use std::str::FromStr;

use client_frontend_core::SceneKey;
use market_content::AssetMode;
use market_core::ItemCategory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Stockroom inventory.
    Stock,
    Cart,
    /// Shelves of the aisle in view.
    Floor,
    /// Catalog listing, optionally filtered.
    Items(Option<ItemCategory>),
    Add { item_id: String, quantity: Option<u32> },
    Return { slot: usize },
    Place {
        slot: usize,
        aisle_id: String,
        shelf: usize,
        position: usize,
    },
    Take {
        aisle_id: String,
        shelf: usize,
        position: usize,
    },
    Earn { amount: i64 },
    Aisle { aisle_id: String },
    Go(SceneKey),
    Mode(AssetMode),
    Log,
    Reset,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` expects <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid {argument} `{value}`")]
    InvalidArgument { argument: &'static str, value: String },

    #[error("`{0}` takes fewer arguments")]
    TrailingArguments(&'static str),
}

pub const HELP: &str = "\
commands:
  stock                                  list stockroom inventory
  cart                                   list cart slots
  floor                                  show shelves of the current aisle
  items [category]                       list catalog items
  add <item> [qty]                       move a stack from stockroom to cart
  return <slot>                          return a cart slot to the stockroom
  place <slot> <aisle> <shelf> <pos>     place one unit on a shelf position
  take <aisle> <shelf> <pos>             take one unit off a shelf position
  earn <amount>                          add currency
  aisle <id>                             switch the aisle in view
  go <scene>                             slide to another scene
  mode <emoji|png>                       change asset mode
  log                                    show recent messages
  reset                                  start over
  quit                                   exit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let mut args = Args {
        command: "",
        words,
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "stock" => Command::Stock,
        "cart" => Command::Cart,
        "floor" => Command::Floor,
        "items" => {
            args.command = "items";
            Command::Items(args.optional("category")?)
        }
        "add" => {
            args.command = "add";
            Command::Add {
                item_id: args.word("item")?,
                quantity: args.optional("qty")?,
            }
        }
        "return" => {
            args.command = "return";
            Command::Return {
                slot: args.parse("slot")?,
            }
        }
        "place" => {
            args.command = "place";
            Command::Place {
                slot: args.parse("slot")?,
                aisle_id: args.word("aisle")?,
                shelf: args.parse("shelf")?,
                position: args.parse("pos")?,
            }
        }
        "take" => {
            args.command = "take";
            Command::Take {
                aisle_id: args.word("aisle")?,
                shelf: args.parse("shelf")?,
                position: args.parse("pos")?,
            }
        }
        "earn" => {
            args.command = "earn";
            Command::Earn {
                amount: args.parse("amount")?,
            }
        }
        "aisle" => {
            args.command = "aisle";
            Command::Aisle {
                aisle_id: args.word("id")?,
            }
        }
        "go" => {
            args.command = "go";
            Command::Go(args.parse("scene")?)
        }
        "mode" => {
            args.command = "mode";
            Command::Mode(args.parse("mode")?)
        }
        "log" => Command::Log,
        "reset" => Command::Reset,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    if args.words.next().is_some() {
        return Err(CommandError::TrailingArguments(name_of(&command)));
    }
    Ok(Some(command))
}

fn name_of(command: &Command) -> &'static str {
    match command {
        Command::Help => "help",
        Command::Stock => "stock",
        Command::Cart => "cart",
        Command::Floor => "floor",
        Command::Items(_) => "items",
        Command::Add { .. } => "add",
        Command::Return { .. } => "return",
        Command::Place { .. } => "place",
        Command::Take { .. } => "take",
        Command::Earn { .. } => "earn",
        Command::Aisle { .. } => "aisle",
        Command::Go(_) => "go",
        Command::Mode(_) => "mode",
        Command::Log => "log",
        Command::Reset => "reset",
        Command::Quit => "quit",
    }
}

struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl Args<'_> {
    fn word(&mut self, argument: &'static str) -> Result<String, CommandError> {
        self.words
            .next()
            .map(str::to_owned)
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn parse<T: FromStr>(&mut self, argument: &'static str) -> Result<T, CommandError> {
        let value = self.word(argument)?;
        value
            .parse()
            .map_err(|_| CommandError::InvalidArgument { argument, value })
    }

    fn optional<T: FromStr>(&mut self, argument: &'static str) -> Result<Option<T>, CommandError> {
        match self.words.next() {
            None => Ok(None),
            Some(value) => value.parse().map(Some).map_err(|_| CommandError::InvalidArgument {
                argument,
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn parses_stock_movement_commands() {
        assert_eq!(
            parse_line("add red-apple 3"),
            Ok(Some(Command::Add {
                item_id: "red-apple".into(),
                quantity: Some(3),
            }))
        );
        assert_eq!(
            parse_line("ADD pear"),
            Ok(Some(Command::Add {
                item_id: "pear".into(),
                quantity: None,
            }))
        );
        assert_eq!(
            parse_line("place 0 aisle-1 1 2"),
            Ok(Some(Command::Place {
                slot: 0,
                aisle_id: "aisle-1".into(),
                shelf: 1,
                position: 2,
            }))
        );
        assert_eq!(parse_line("earn -5"), Ok(Some(Command::Earn { amount: -5 })));
    }

    #[test]
    fn parses_scene_mode_and_category() {
        assert_eq!(
            parse_line("go stockroom"),
            Ok(Some(Command::Go(SceneKey::Stockroom)))
        );
        assert_eq!(parse_line("mode PNG"), Ok(Some(Command::Mode(AssetMode::Png))));
        assert_eq!(
            parse_line("items dairy"),
            Ok(Some(Command::Items(Some(ItemCategory::Dairy))))
        );
    }

    #[test]
    fn reports_argument_problems() {
        assert_eq!(
            parse_line("take aisle-1 0"),
            Err(CommandError::MissingArgument {
                command: "take",
                argument: "pos",
            })
        );
        assert_eq!(
            parse_line("return first"),
            Err(CommandError::InvalidArgument {
                argument: "slot",
                value: "first".into(),
            })
        );
        assert_eq!(
            parse_line("cart please"),
            Err(CommandError::TrailingArguments("cart"))
        );
        assert_eq!(
            parse_line("checkout"),
            Err(CommandError::Unknown("checkout".into()))
        );
    }
}
