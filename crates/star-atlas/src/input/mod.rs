pub mod controller;
pub mod queue;

pub use controller::{InteractionController, InteractionOutcome, InteractionState, MapTarget};
pub use queue::{InputEvent, InputQueue, ViewCommand};
