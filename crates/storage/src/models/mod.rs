pub mod attempt;
pub mod judge;
pub mod question;
pub mod regatta;
pub mod team;

pub use attempt::Attempt;
pub use judge::Judge;
pub use question::{Question, QuestionImage};
pub use regatta::Regatta;
pub use team::Team;
