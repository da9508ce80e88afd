//! Modal overlays. The playground has one: the example picker.

pub mod example_picker;

pub use example_picker::{ExamplePickerState, PickerAction};

/// Active modal overlay, stored separately from `TuiState`.
#[derive(Debug)]
pub enum Overlay {
    ExamplePicker(ExamplePickerState),
}
