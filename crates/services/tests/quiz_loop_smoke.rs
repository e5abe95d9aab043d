use std::sync::Arc;

use flags_core::Dataset;
use flags_core::model::{ContinentFilter, Difficulty};
use services::quiz::AnswerInput;
use services::{AppServices, QuestionView, QuizLoopService, QuizPhase};
use storage::progress::{BEST_STREAKS_KEY, LEGACY_BEST_STREAK_KEY, PROGRESS_KEY};
use storage::repository::{InMemoryStore, KeyValueStore};

#[tokio::test]
async fn quiz_loop_persists_progress_to_sqlite() {
    let services = AppServices::new_sqlite("sqlite:file:memdb_quiz_loop?mode=memory&cache=shared")
        .await
        .expect("services");
    let quiz = services.quiz_loop();

    let mut session = quiz.start_session(Difficulty::Easy, ContinentFilter::All).await;
    let question = session.current_question().expect("question").clone();
    let view = QuestionView::from_question(&question, services.flag_urls()).unwrap();
    assert!(view.flag_url.ends_with(&format!("{}.png", question.answer.code())));
    assert!(matches!(view.input, AnswerInput::Choices(ref options) if options.len() == 4));

    let result = quiz
        .answer(&mut session, question.answer.code())
        .await
        .expect("scored");
    assert!(result.correct);
    assert!(result.new_best);
    assert_eq!(session.phase(), QuizPhase::Answered);

    quiz.end_session(&mut session).await;

    let snapshot = quiz.progress_snapshot().await;
    assert_eq!(snapshot.total_answered, 1);
    let reopened = quiz.start_session(Difficulty::Easy, ContinentFilter::All).await;
    assert_eq!(reopened.scoreboard().best_streak, 1);
}

#[tokio::test]
async fn switching_difficulty_writes_best_streaks() {
    let kv = InMemoryStore::new();
    kv.set(BEST_STREAKS_KEY, r#"{"easy":5,"hard":2}"#).await.unwrap();
    let quiz =
        QuizLoopService::new(Arc::new(Dataset::builtin()), Arc::new(kv.clone())).with_seed(3);

    let mut session = quiz.start_session(Difficulty::Easy, ContinentFilter::All).await;
    for _ in 0..7 {
        let answer = session.current_question().unwrap().answer.code().clone();
        quiz.answer(&mut session, &answer).await.unwrap();
        session.new_question();
    }

    assert!(quiz.switch_difficulty(&mut session, Difficulty::Hard).await);
    let board = session.scoreboard();
    assert_eq!((board.correct, board.wrong, board.streak, board.best_streak), (0, 0, 0, 2));

    let stored = kv.get(BEST_STREAKS_KEY).await.unwrap().unwrap();
    assert_eq!(stored, r#"{"easy":7,"hard":2}"#);
}

#[tokio::test]
async fn legacy_streak_and_reset_flow() {
    let kv = InMemoryStore::new();
    kv.set(LEGACY_BEST_STREAK_KEY, "4").await.unwrap();
    let quiz =
        QuizLoopService::new(Arc::new(Dataset::builtin()), Arc::new(kv.clone())).with_seed(8);

    let mut session = quiz.start_session(Difficulty::Easy, ContinentFilter::All).await;
    assert_eq!(session.scoreboard().best_streak, 4);
    assert_eq!(kv.get(LEGACY_BEST_STREAK_KEY).await.unwrap(), None);

    let answer = session.current_question().unwrap().answer.code().clone();
    quiz.answer(&mut session, &answer).await.unwrap();
    quiz.reset_progress(&mut session).await;

    assert_eq!(session.scoreboard().best_streak, 0);
    assert_eq!(kv.get(PROGRESS_KEY).await.unwrap().as_deref(), Some("{}"));
    assert_eq!(quiz.progress_snapshot().await.total_answered, 0);
}

#[tokio::test]
async fn beast_mode_uses_free_text() {
    let services = AppServices::in_memory();
    let quiz = services.quiz_loop();
    let mut session = quiz.start_session(Difficulty::Beast, ContinentFilter::All).await;

    let question = session.current_question().unwrap().clone();
    let view = QuestionView::from_question(&question, services.flag_urls()).unwrap();
    assert_eq!(view.input, AnswerInput::FreeText);

    let name = question.answer.name().to_string();
    let pick = session
        .suggestions(&name)
        .first()
        .map(|m| m.country.code().clone())
        .unwrap();
    let result = quiz.answer(&mut session, &pick).await.unwrap();
    assert!(result.correct);
}
