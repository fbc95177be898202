pub mod fs_store;
pub mod gist_store;
