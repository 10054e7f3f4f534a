pub mod badge;
pub mod button;
pub mod file_picker;
pub mod input;
pub mod select;
pub mod switch;
pub mod textarea;

pub use badge::{Badge, BadgeTone, StatusBadge};
pub use button::{Button, ButtonVariant};
pub use file_picker::{file_from_event, FilePicker};
pub use input::Input;
pub use select::Select;
pub use switch::Switch;
pub use textarea::Textarea;
