pub mod attempt;
pub mod judge;
pub mod leaderboard;
pub mod question;
pub mod regatta;
pub mod team;
