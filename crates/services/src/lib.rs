#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use error::AppServicesError;

pub use quiz::{
    AnswerResult, ProgressSnapshot, Question, QuestionView, QuizLoopService, QuizPhase,
    QuizSession, Scoreboard,
};
