//! Events exchanged between the alive worker and the GUI thread.
//!
//! AppKit and Win32 objects belong to the GUI thread. The worker therefore
//! never calls into them: it queues UI commands here, and the GUI thread's
//! 16 ms dispatch timer applies them. Native callbacks (button action, quit
//! shortcut) use the same queue in the other direction to reach the
//! controller.
//!
//! ```text
//!  alive-loop ──MoveButton/SetButtonActive/ReinforceTopmost/Quit──┐
//!                                                                 ▼
//!  button action / Cmd+Q / Ctrl+Q ──ButtonClicked/QuitRequested──▶ bus ──▶ dispatcher (GUI thread)
//! ```

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
