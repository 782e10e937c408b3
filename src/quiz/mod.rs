//! Quiz rules: difficulty filters, round selection, answer checking and
//! the session that ties them together.

pub mod advisory;
pub mod difficulty;
pub mod selector;
pub mod session;
pub mod validator;

pub use advisory::{Advisory, Severity};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use selector::{filter_countries, select_round};
pub use session::{Feedback, Phase, QuizSession};
pub use validator::{check, normalize_answer, reveal_name, Score, Verdict};
