use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::event::{ROTATE_BUTTON_ID, SCROLL_AXIS_ID};
use crate::input::{AxisAction, ButtonAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable event-identifier → action bindings.
///
/// Installed into the controller when input binding succeeds; edits made
/// after that point take effect on the next bind.
pub struct BindingOptions {
    /// Continuous axis identifiers → axis actions.
    pub axes: HashMap<String, AxisAction>,
    /// Button identifiers → button actions.
    pub buttons: HashMap<String, ButtonAction>,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            axes: HashMap::from([(
                SCROLL_AXIS_ID.to_owned(),
                AxisAction::Zoom,
            )]),
            buttons: HashMap::from([(
                ROTATE_BUTTON_ID.to_owned(),
                ButtonAction::RotateMode,
            )]),
        }
    }
}
