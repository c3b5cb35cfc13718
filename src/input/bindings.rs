//! Maps host event identifiers to rig actions.
//!
//! Binding is a plain lookup table installed once when
//! [`bind_inputs`](crate::rig::CameraRigController::bind_inputs) succeeds —
//! no dispatch hierarchy. Until the map is installed, the controller drops
//! incoming events on the floor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::RigInputEvent;
use crate::options::BindingOptions;
use crate::rig::RigCommand;

/// Rig action driven by a continuous axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisAction {
    /// Accumulate the axis value into the requested zoom distance.
    Zoom,
}

/// Rig action driven by a two-state button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Hold to rotate: press enters rotate mode, release exits it.
    RotateMode,
}

/// Installed event-identifier → action lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBindings {
    axes: HashMap<String, AxisAction>,
    buttons: HashMap<String, ButtonAction>,
}

impl InputBindings {
    /// Build the lookup table from configured bindings.
    #[must_use]
    pub fn from_options(options: &BindingOptions) -> Self {
        Self {
            axes: options.axes.clone(),
            buttons: options.buttons.clone(),
        }
    }

    /// Resolve a raw event into a rig command, if its identifier is bound.
    #[must_use]
    pub fn resolve(&self, event: &RigInputEvent<'_>) -> Option<RigCommand> {
        match event {
            RigInputEvent::Axis { id, value } => {
                self.axes.get(*id).map(|action| match action {
                    AxisAction::Zoom => RigCommand::Zoom { delta: *value },
                })
            }
            RigInputEvent::Button { id, pressed } => {
                self.buttons.get(*id).map(|action| match action {
                    ButtonAction::RotateMode => {
                        if *pressed {
                            RigCommand::EnterRotateMode
                        } else {
                            RigCommand::ExitRotateMode
                        }
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::{ROTATE_BUTTON_ID, SCROLL_AXIS_ID};

    #[test]
    fn default_map_resolves_scroll_and_rotate() {
        let bindings = InputBindings::from_options(&BindingOptions::default());

        let cmd = bindings.resolve(&RigInputEvent::Axis {
            id: SCROLL_AXIS_ID,
            value: -50.0,
        });
        assert_eq!(cmd, Some(RigCommand::Zoom { delta: -50.0 }));

        let cmd = bindings.resolve(&RigInputEvent::Button {
            id: ROTATE_BUTTON_ID,
            pressed: true,
        });
        assert_eq!(cmd, Some(RigCommand::EnterRotateMode));

        let cmd = bindings.resolve(&RigInputEvent::Button {
            id: ROTATE_BUTTON_ID,
            pressed: false,
        });
        assert_eq!(cmd, Some(RigCommand::ExitRotateMode));
    }

    #[test]
    fn unbound_identifiers_resolve_to_nothing() {
        let bindings = InputBindings::from_options(&BindingOptions::default());
        let cmd = bindings.resolve(&RigInputEvent::Axis {
            id: "Throttle",
            value: 1.0,
        });
        assert_eq!(cmd, None);
    }

    #[test]
    fn rebinding_uses_the_configured_identifier() {
        let mut options = BindingOptions::default();
        options.axes.clear();
        let _ = options.axes.insert("WheelY".to_owned(), AxisAction::Zoom);

        let bindings = InputBindings::from_options(&options);
        assert_eq!(
            bindings.resolve(&RigInputEvent::Axis {
                id: "WheelY",
                value: 2.0
            }),
            Some(RigCommand::Zoom { delta: 2.0 })
        );
        assert_eq!(
            bindings.resolve(&RigInputEvent::Axis {
                id: SCROLL_AXIS_ID,
                value: 2.0
            }),
            None
        );
    }
}
