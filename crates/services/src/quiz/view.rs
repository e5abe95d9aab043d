use serde::Serialize;

use flags_core::model::{Continent, ContinentFilter, Country, Progress};
use flags_core::{Dataset, FlagUrlResolver};

use super::session::Question;

/// Live session counters for the scoreboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub correct: u32,
    pub wrong: u32,
    pub streak: u32,
    pub best_streak: u32,
}

/// How the presentation layer should collect the guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum AnswerInput {
    Choices(Vec<Country>),
    FreeText,
}

/// Presentation-agnostic question: which flag to show and how to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub flag_url: String,
    pub input: AnswerInput,
}

impl QuestionView {
    /// # Errors
    ///
    /// Returns `flags_core::Error::FlagUrl` if the resolver's base URL is invalid.
    pub fn from_question(
        question: &Question,
        flags: &FlagUrlResolver,
    ) -> Result<Self, flags_core::Error> {
        let flag_url = flags.flag_url(question.answer.code(), None)?.to_string();
        let input = if question.options.is_empty() {
            AnswerInput::FreeText
        } else {
            AnswerInput::Choices(question.options.clone())
        };
        Ok(Self { flag_url, input })
    }
}

/// Mastery progress for one continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentMastery {
    pub continent: Continent,
    pub mastered: usize,
    pub total: usize,
    pub percent: u32,
}

/// Long-term progress summary for the progress view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub total_answered: u64,
    pub accuracy_percent: u32,
    pub mastered_count: usize,
    pub per_continent: Vec<ContinentMastery>,
    pub mastered: Vec<Country>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn build(dataset: &Dataset, progress: &Progress) -> Self {
        let right = progress.total_right();
        let total_answered = right + progress.total_wrong();
        let mastered: Vec<Country> = mastered_countries(dataset, progress)
            .into_iter()
            .cloned()
            .collect();

        let per_continent = dataset
            .continents()
            .into_iter()
            .filter_map(|filter| match filter {
                ContinentFilter::All => None,
                ContinentFilter::Only(continent) => Some(continent),
            })
            .map(|continent| {
                let countries = dataset.countries_by_continent(continent.into());
                let total = countries.len();
                let mastered = countries
                    .iter()
                    .filter(|c| progress.is_mastered(c.code()))
                    .count();
                ContinentMastery {
                    continent,
                    mastered,
                    total,
                    percent: round_percent(mastered as u64, total as u64),
                }
            })
            .collect();

        Self {
            total_answered,
            accuracy_percent: round_percent(right, total_answered),
            mastered_count: mastered.len(),
            per_continent,
            mastered,
        }
    }
}

/// Countries with at least the mastery threshold of right answers, in dataset order.
#[must_use]
pub fn mastered_countries<'a>(dataset: &'a Dataset, progress: &Progress) -> Vec<&'a Country> {
    dataset
        .countries()
        .iter()
        .filter(|c| progress.is_mastered(c.code()))
        .collect()
}

/// `round(part / whole * 100)` with halves rounded up; `0` when `whole` is zero.
fn round_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = (part.saturating_mul(200) + whole) / whole.saturating_mul(2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::model::{CountryCode, ProgressEntry};

    fn code(raw: &str) -> CountryCode {
        CountryCode::new(raw).unwrap()
    }

    #[test]
    fn snapshot_matches_reference_example() {
        let dataset = Dataset::builtin();
        let progress: Progress = [
            (code("us"), ProgressEntry { right: 3, wrong: 1 }),
            (code("fr"), ProgressEntry { right: 2, wrong: 0 }),
        ]
        .into_iter()
        .collect();

        let snapshot = ProgressSnapshot::build(&dataset, &progress);
        assert_eq!(snapshot.total_answered, 6);
        assert_eq!(snapshot.accuracy_percent, 83);
        assert_eq!(snapshot.mastered_count, 1);
        assert_eq!(snapshot.mastered[0].code(), &code("us"));

        let north_america = snapshot
            .per_continent
            .iter()
            .find(|m| m.continent == Continent::NorthAmerica)
            .unwrap();
        assert_eq!(north_america.mastered, 1);
        let europe = snapshot
            .per_continent
            .iter()
            .find(|m| m.continent == Continent::Europe)
            .unwrap();
        assert_eq!(europe.mastered, 0);
        assert_eq!(europe.percent, 0);
    }

    #[test]
    fn empty_progress_has_zero_accuracy() {
        let snapshot = ProgressSnapshot::build(&Dataset::builtin(), &Progress::new());
        assert_eq!(snapshot.total_answered, 0);
        assert_eq!(snapshot.accuracy_percent, 0);
        assert!(snapshot.mastered.is_empty());
        assert_eq!(snapshot.per_continent.len(), Continent::ALL.len());
    }

    #[test]
    fn question_view_serializes_answer_input_by_kind() {
        let dataset = Dataset::builtin();
        let answer = dataset.get(&code("jp")).unwrap().clone();
        let question = Question {
            answer,
            options: Vec::new(),
        };
        let view = QuestionView::from_question(&question, &FlagUrlResolver::default()).unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["flag_url"], "https://flagcdn.com/w320/jp.png");
        assert_eq!(json["input"], serde_json::json!({ "kind": "free_text" }));
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(round_percent(1, 2), 50);
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(1, 200), 1);
        assert_eq!(round_percent(0, 0), 0);
        assert_eq!(round_percent(4, 4), 100);
    }

    #[test]
    fn mastered_ignores_wrong_answers() {
        let dataset = Dataset::builtin();
        let progress: Progress = [
            (code("jp"), ProgressEntry { right: 3, wrong: 40 }),
            (code("kr"), ProgressEntry { right: 2, wrong: 0 }),
        ]
        .into_iter()
        .collect();
        let mastered = mastered_countries(&dataset, &progress);
        assert_eq!(mastered.len(), 1);
        assert_eq!(mastered[0].name(), "Japan");
    }
}
