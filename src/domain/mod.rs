mod emoji;
mod play_record;
pub(crate) mod storage;

pub use emoji::emoji_prefix;
pub use play_record::{Layout, PlayRecord, RankBy};
pub use storage::DocumentStore;
