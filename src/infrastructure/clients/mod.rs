pub mod github;
pub mod steam;
