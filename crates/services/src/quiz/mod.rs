mod matcher;
mod options;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use matcher::{MAX_MATCHES, NameMatch, rank_by_name, search_by_name};
pub use options::{pick_answer, pick_options};
pub use session::{AnswerResult, MIN_ANSWER_POOL, Question, QuizPhase, QuizSession};
pub use view::{
    AnswerInput, ContinentMastery, ProgressSnapshot, QuestionView, Scoreboard, mastered_countries,
};
pub use workflow::QuizLoopService;
