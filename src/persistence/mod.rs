pub mod files;
pub mod snapshot;
pub mod storage;

pub use files::ensure_data_dir;
pub use snapshot::{load_state, save_state, STATE_KEY};
pub use storage::{FileStorage, Storage};
