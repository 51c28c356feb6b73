/// Identifier of every scene the game knows about.
///
/// String forms match the scene keys registered with the renderer
/// (`"SalesFloor"`, `"Stockroom"`, ...). Parsing is case-insensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SceneKey {
    Boot,
    Preloader,
    MainMenu,
    GameOver,
    SalesFloor,
    Stockroom,
}

impl SceneKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SceneKey::Boot => "Boot",
            SceneKey::Preloader => "Preloader",
            SceneKey::MainMenu => "MainMenu",
            SceneKey::GameOver => "GameOver",
            SceneKey::SalesFloor => "SalesFloor",
            SceneKey::Stockroom => "Stockroom",
        }
    }

    /// Scenes the player moves between during play.
    pub fn is_gameplay(self) -> bool {
        matches!(self, SceneKey::SalesFloor | SceneKey::Stockroom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn string_forms_match_as_str() {
        for key in SceneKey::iter() {
            assert_eq!(key.to_string(), key.as_str());
            assert_eq!(AsRef::<str>::as_ref(&key), key.as_str());
            assert_eq!(key.as_str().parse::<SceneKey>(), Ok(key));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("stockroom".parse::<SceneKey>(), Ok(SceneKey::Stockroom));
        assert_eq!("salesfloor".parse::<SceneKey>(), Ok(SceneKey::SalesFloor));
        assert!("Checkout".parse::<SceneKey>().is_err());
    }

    #[test]
    fn gameplay_scenes() {
        let gameplay: Vec<SceneKey> = SceneKey::iter().filter(|key| key.is_gameplay()).collect();
        assert_eq!(gameplay, vec![SceneKey::SalesFloor, SceneKey::Stockroom]);
    }
}
