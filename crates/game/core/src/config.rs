/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of slots a freshly created cart can hold.
    pub cart_max_slots: usize,
    /// Quantity moved into the cart when the caller does not ask for one.
    pub initial_stack_size: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CART_MAX_SLOTS: usize = 6;
    pub const DEFAULT_INITIAL_STACK_SIZE: u32 = 3;

    pub fn new() -> Self {
        Self {
            cart_max_slots: Self::DEFAULT_CART_MAX_SLOTS,
            initial_stack_size: Self::DEFAULT_INITIAL_STACK_SIZE,
        }
    }

    pub fn with_cart(cart_max_slots: usize, initial_stack_size: u32) -> Self {
        Self {
            cart_max_slots,
            initial_stack_size,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
