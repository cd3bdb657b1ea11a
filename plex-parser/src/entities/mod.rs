//! Domain entities decoded from directory and server documents.

pub mod device;
pub mod user;
pub mod video;

pub use device::{Connection, Device, DeviceContainer};
pub use user::{Subscription, User};
pub use video::{Media, Player, SessionContainer, TranscodeSession, Video};
