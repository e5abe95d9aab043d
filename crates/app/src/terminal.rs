//! Line-oriented quiz front end.
//!
//! Reads one command or guess per line and renders questions, results and the
//! scoreboard as plain text. All quiz rules live in `services`.

use std::io::{self, BufRead, Write};
use std::ops::Range;

use flags_core::model::{ContinentFilter, Country, Difficulty};
use flags_core::{Dataset, FlagUrlResolver};
use services::quiz::{AnswerInput, search_by_name};
use services::{
    AnswerResult, ProgressSnapshot, QuestionView, QuizLoopService, QuizPhase, QuizSession,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Empty,
    Quit,
    Help,
    Next,
    Progress,
    Reset,
    Difficulty(&'a str),
    Continent(&'a str),
    Study(&'a str),
    Unknown(&'a str),
    Guess(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return if line.is_empty() {
                Self::Empty
            } else {
                Self::Guess(line)
            };
        };
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));
        match name {
            "q" | "quit" => Self::Quit,
            "h" | "help" => Self::Help,
            "n" | "next" => Self::Next,
            "p" | "progress" => Self::Progress,
            "reset" => Self::Reset,
            "d" | "difficulty" => Self::Difficulty(arg),
            "c" | "continent" => Self::Continent(arg),
            "s" | "study" => Self::Study(arg),
            _ => Self::Unknown(name),
        }
    }
}

/// Accepts `hard`, `Hard` and the fragment form `#hard`.
pub fn parse_difficulty(raw: &str) -> Option<Difficulty> {
    Difficulty::from_fragment(raw)
}

pub struct Terminal<'a, R, W> {
    quiz: &'a QuizLoopService,
    flag_urls: &'a FlagUrlResolver,
    input: R,
    out: W,
    /// Candidates listed for the last ambiguous free-text guess.
    suggestions: Vec<Country>,
}

impl<'a, R: BufRead, W: Write> Terminal<'a, R, W> {
    pub fn new(
        quiz: &'a QuizLoopService,
        flag_urls: &'a FlagUrlResolver,
        input: R,
        out: W,
    ) -> Self {
        Self {
            quiz,
            flag_urls,
            input,
            out,
            suggestions: Vec::new(),
        }
    }

    /// Drive `session` until `:quit` or end of input, then end it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input or writing output fails.
    pub async fn run(&mut self, session: &mut QuizSession) -> io::Result<()> {
        self.show_question(session)?;

        let mut line = String::new();
        loop {
            line.clear();
            write!(self.out, "> ")?;
            self.out.flush()?;
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Input::parse(&line) {
                Input::Empty => {}
                Input::Quit => break,
                Input::Help => self.print_help(session)?,
                Input::Next => {
                    session.new_question();
                    self.show_question(session)?;
                }
                Input::Progress => {
                    self.quiz.end_session(session).await;
                    write_progress(&mut self.out, &session.progress_snapshot())?;
                    self.print_scoreboard(session)?;
                }
                Input::Reset => {
                    self.quiz.reset_progress(session).await;
                    writeln!(self.out, "Progress cleared.")?;
                    self.print_scoreboard(session)?;
                }
                Input::Difficulty(raw) => self.switch_difficulty(session, raw).await?,
                Input::Continent(raw) => self.switch_continent(session, raw)?,
                Input::Study(query) => write_study(
                    &mut self.out,
                    session.dataset(),
                    self.flag_urls,
                    session.continent(),
                    query,
                )?,
                Input::Unknown(name) => {
                    writeln!(self.out, "Unknown command :{name}. Type :help for the list.")?;
                }
                Input::Guess(text) => self.guess(session, text).await?,
            }
        }

        self.quiz.end_session(session).await;
        writeln!(self.out, "Session over.")?;
        self.print_scoreboard(session)
    }

    async fn guess(&mut self, session: &mut QuizSession, text: &str) -> io::Result<()> {
        if session.phase() != QuizPhase::AwaitingAnswer {
            return writeln!(self.out, "No open question. Type :next or pick another continent.");
        }

        let result = if session.difficulty().is_free_text() {
            let Some(country) = self.resolve_free_text(session, text)? else {
                return Ok(());
            };
            self.quiz.answer(session, country.code()).await
        } else {
            match text.parse::<usize>() {
                Ok(index) => self.quiz.answer_option(session, index).await,
                Err(_) => None,
            }
        };

        let Some(result) = result else {
            let count = session.current_question().map_or(0, |q| q.options.len());
            return writeln!(self.out, "Pick a number between 1 and {count}.");
        };

        self.print_result(session, &result)?;
        session.new_question();
        self.show_question(session)
    }

    /// Map free text to a country: a listed suggestion number, an exact name,
    /// or the only autocomplete candidate. Otherwise list the candidates.
    fn resolve_free_text(
        &mut self,
        session: &QuizSession,
        text: &str,
    ) -> io::Result<Option<Country>> {
        if let Some(country) = text
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.suggestions.get(index))
        {
            return Ok(Some(country.clone()));
        }

        if let Some(country) = session.dataset().find_by_name(text) {
            return Ok(Some(country.clone()));
        }

        let matches = session.suggestions(text);
        match matches.len() {
            0 => {
                writeln!(self.out, "No country matches \"{text}\".")?;
                Ok(None)
            }
            1 => Ok(matches.first().map(|m| m.country.clone())),
            _ => {
                writeln!(self.out, "Did you mean:")?;
                for (i, m) in matches.iter().enumerate() {
                    let name = mark_match(m.country.name(), m.highlight.as_ref());
                    writeln!(self.out, "  {}. {name}", i + 1)?;
                }
                debug!(query = text, candidates = matches.len(), "ambiguous guess");
                self.suggestions = matches.iter().map(|m| m.country.clone()).collect();
                Ok(None)
            }
        }
    }

    async fn switch_difficulty(&mut self, session: &mut QuizSession, raw: &str) -> io::Result<()> {
        let Some(difficulty) = parse_difficulty(raw) else {
            return writeln!(
                self.out,
                "Unknown difficulty \"{raw}\". Choose easy, medium, hard or beast."
            );
        };
        if !self.quiz.switch_difficulty(session, difficulty).await {
            return writeln!(self.out, "Already playing {}.", difficulty.label());
        }
        writeln!(self.out, "{} ({})", difficulty.label(), difficulty.detail())?;
        self.print_scoreboard(session)?;
        self.show_question(session)
    }

    fn switch_continent(&mut self, session: &mut QuizSession, raw: &str) -> io::Result<()> {
        match raw.parse::<ContinentFilter>() {
            Ok(filter) => {
                session.set_continent(filter);
                self.show_question(session)
            }
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn show_question(&mut self, session: &QuizSession) -> io::Result<()> {
        self.suggestions.clear();
        let Some(question) = session.current_question() else {
            return writeln!(
                self.out,
                "Not enough countries in {} to ask a question.",
                session.continent()
            );
        };
        let view =
            QuestionView::from_question(question, self.flag_urls).map_err(io::Error::other)?;

        writeln!(self.out)?;
        writeln!(
            self.out,
            "[{} | {}] Which country does this flag belong to?",
            session.difficulty().label(),
            session.continent()
        )?;
        writeln!(self.out, "  {}", view.flag_url)?;
        match &view.input {
            AnswerInput::Choices(options) => {
                for (i, country) in options.iter().enumerate() {
                    writeln!(self.out, "  {}. {}", i + 1, country.name())?;
                }
            }
            AnswerInput::FreeText => writeln!(self.out, "  Type the country name.")?,
        }
        Ok(())
    }

    fn print_result(&mut self, session: &QuizSession, result: &AnswerResult) -> io::Result<()> {
        if result.correct {
            writeln!(self.out, "Correct! It's {}.", result.correct_answer.name())?;
        } else {
            writeln!(self.out, "Wrong. It was {}.", result.correct_answer.name())?;
        }
        if result.new_best {
            writeln!(self.out, "New best streak: {}!", session.scoreboard().best_streak)?;
        }
        self.print_scoreboard(session)
    }

    fn print_scoreboard(&mut self, session: &QuizSession) -> io::Result<()> {
        let score = session.scoreboard();
        writeln!(
            self.out,
            "Right {} | Wrong {} | Streak {} | Best {}",
            score.correct, score.wrong, score.streak, score.best_streak
        )
    }

    fn print_help(&mut self, session: &QuizSession) -> io::Result<()> {
        let continents: Vec<String> = session
            .dataset()
            .continents()
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(self.out, "Answer with an option number, or type the name in beast mode.")?;
        writeln!(self.out, "  :next                skip to another flag")?;
        writeln!(self.out, "  :difficulty <key>    easy, medium, hard or beast")?;
        writeln!(self.out, "  :continent <name>    {}", continents.join(", "))?;
        writeln!(self.out, "  :study [query]       list flags in the current continent")?;
        writeln!(self.out, "  :progress            end the session and show long-term progress")?;
        writeln!(self.out, "  :reset               forget all progress")?;
        writeln!(self.out, "  :quit                end the session")
    }
}

/// Wrap the matched span in brackets, e.g. `[Nig]eria`.
fn mark_match(name: &str, highlight: Option<&Range<usize>>) -> String {
    match highlight {
        Some(range) => format!(
            "{}[{}]{}",
            &name[..range.start],
            &name[range.clone()],
            &name[range.end..]
        ),
        None => name.to_string(),
    }
}

/// List the countries of `continent` whose name contains `query`, each with its flag URL.
///
/// # Errors
///
/// Returns an I/O error if writing fails or the flag base URL is invalid.
pub fn write_study(
    out: &mut impl Write,
    dataset: &Dataset,
    flag_urls: &FlagUrlResolver,
    continent: ContinentFilter,
    query: &str,
) -> io::Result<()> {
    let countries = search_by_name(dataset.countries_by_continent(continent), query);
    if countries.is_empty() {
        return writeln!(out, "No countries in {continent} match \"{}\".", query.trim());
    }
    writeln!(out, "{} countries in {continent}:", countries.len())?;
    for country in countries {
        let url = flag_urls
            .flag_url(country.code(), None)
            .map_err(io::Error::other)?;
        writeln!(out, "  {:<32} {url}", country.name())?;
    }
    Ok(())
}

/// Render a progress summary.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_progress(out: &mut impl Write, snapshot: &ProgressSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "Answered {} flags, {}% right. Mastered {} countries.",
        snapshot.total_answered, snapshot.accuracy_percent, snapshot.mastered_count
    )?;
    for entry in &snapshot.per_continent {
        writeln!(
            out,
            "  {:<14} {:>3}/{:<3} {:>3}%",
            entry.continent.name(),
            entry.mastered,
            entry.total,
            entry.percent
        )?;
    }
    if !snapshot.mastered.is_empty() {
        let names: Vec<&str> = snapshot.mastered.iter().map(Country::name).collect();
        writeln!(out, "Mastered: {}", names.join(", "))?;
    }
    Ok(())
}
