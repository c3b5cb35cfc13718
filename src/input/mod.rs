//! Input handling: platform-agnostic events, the event-identifier binding
//! map, and the on-demand input-source contract.

/// Event types and default event identifiers.
pub mod event;
/// Event-identifier → rig-action lookup table.
pub mod bindings;
/// On-demand queries against the host input pipeline.
pub mod source;
/// winit window-event adapter.
#[cfg(feature = "viewer")]
pub mod window;

pub use bindings::{AxisAction, ButtonAction, InputBindings};
pub use event::{RigInputEvent, ROTATE_BUTTON_ID, SCROLL_AXIS_ID};
pub use source::InputSource;
#[cfg(feature = "viewer")]
pub use window::WindowInput;
