//! Flat-file persistence for room maps.
//!
//! A map is stored as a directory holding one text file per room. This
//! crate knows how to:
//!
//! - **Encode/decode** a single room file ([`encode_room`], [`decode_room`])
//! - **Save/load** a whole map directory ([`RoomStore`])
//! - **Find** the most recently written map directory ([`RoomStore::newest_dir`])
//!
//! ```text
//! Graph → RoomStore::save → <prefix><pid>/<Name>_room … → RoomStore::load → Graph
//! ```

mod config;
mod error;
mod format;
mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use format::{DecodeError, ROOM_FILE_SUFFIX, RoomRecord, decode_room, encode_room, room_file_name};
pub use store::RoomStore;
