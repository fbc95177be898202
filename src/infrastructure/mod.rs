mod clients;
mod storage;

pub use clients::{
    github::{GistClient, GithubAuth},
    steam::SteamClient,
};
pub use storage::{fs_store::FileSystemStore, gist_store::GistFileStore};
