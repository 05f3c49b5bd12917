//! Quantity stepper and reserve logic for the detail page.

use serde::Serialize;

/// Page-local state behind the detail controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailState {
    pub quantity: u32,
    pub cart_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailCommand {
    Increment,
    Decrement,
    Reserve,
}

/// What a command changed, for the controller to reflect in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailEffects {
    pub quantity_changed: bool,
    /// Quantity added to the cart by a reserve.
    pub reserved: Option<u32>,
}

impl DetailState {
    /// Fresh stepper at quantity 1 with an existing cart count.
    pub fn new(cart_count: u32) -> Self {
        Self {
            quantity: 1,
            cart_count,
        }
    }

    pub fn apply(&mut self, command: DetailCommand) -> DetailEffects {
        match command {
            DetailCommand::Increment => {
                self.quantity = self.quantity.saturating_add(1);
                DetailEffects {
                    quantity_changed: true,
                    reserved: None,
                }
            }
            DetailCommand::Decrement => {
                let before = self.quantity;
                self.quantity = self.quantity.saturating_sub(1).max(1);
                DetailEffects {
                    quantity_changed: before != self.quantity,
                    reserved: None,
                }
            }
            DetailCommand::Reserve => {
                self.cart_count = self.cart_count.saturating_add(self.quantity);
                DetailEffects {
                    quantity_changed: false,
                    reserved: Some(self.quantity),
                }
            }
        }
    }
}
