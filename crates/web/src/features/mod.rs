pub mod attempts;
pub mod judges;
pub mod leaderboard;
pub mod questions;
pub mod regattas;
pub mod teams;
