mod entry;
mod lock;
mod public_post;
mod settings;

pub use entry::{Entry, EntryId, EntryPatch, MAX_BODY_CHARS, Mood, NewEntry, OwnerId};
pub use lock::{LockState, MIN_PIN_LEN, validate_pin};
pub use public_post::{NewPublicPost, PostId, PublicPost};
pub use settings::{DeviceSettings, Theme};
