//! Render widgets for the main screen regions.

mod inventory;
mod map;
mod messages;
mod status;

pub use inventory::InventoryWidget;
pub use map::MapWidget;
pub use messages::MessagesWidget;
pub use status::StatusWidget;
