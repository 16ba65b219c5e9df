//! UI Components
//!
//! One component per page section or interaction.

mod cake;
mod finale;
mod journey;
mod loader;
mod message_card;
mod sound_button;

pub use cake::WishCake;
pub use finale::CameraFinale;
pub use journey::JourneyScene;
pub use loader::LoaderCover;
pub use message_card::MessageCard;
pub use sound_button::SoundButton;
