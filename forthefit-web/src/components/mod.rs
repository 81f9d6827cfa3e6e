pub mod cursor;
pub mod footer;
pub mod navbar;
pub mod result_display;
pub mod sound_toggle;
pub mod status_message;
pub mod uploader;

pub use self::{
    cursor::*, footer::*, navbar::*, result_display::*, sound_toggle::*, status_message::*,
    uploader::*,
};
