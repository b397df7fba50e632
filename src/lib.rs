pub mod chat;
pub mod chat_codec;
pub mod items;
pub mod status;
pub mod utils;
pub mod world;

pub use chat::{ChatColor, ChatComponent, ClickAction, HoverAction};
pub use chat_codec::{decode, decode_bytes, decode_value, encode, to_value};
