pub mod error;
pub mod event;
pub mod message;
pub mod wire;

pub use error::{Result, VivaError};
pub use event::{ChannelEvent, ClientEvent, ResponseKind};
pub use message::{Message, Role};
pub use wire::{decode_frame, encode_client_event, Frame};
