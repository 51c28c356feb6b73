use bitflags::bitflags;

bitflags! {
    /// Tracks which regions of [`GameState`](crate::state::GameState) changed
    /// during a state transition.
    ///
    /// Each bit maps to one region a presentation layer redraws independently.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFields: u8 {
        const CART          = 1 << 0;
        const STOCKROOM     = 1 << 1;
        const SHELVES       = 1 << 2;
        const CURRENT_AISLE = 1 << 3;
        const CURRENCY      = 1 << 4;
    }
}
