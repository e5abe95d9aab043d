use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use flags_core::model::Country;

/// Pick the answer uniformly from the filtered pool.
pub fn pick_answer<'a, R: Rng + ?Sized>(
    pool: &[&'a Country],
    rng: &mut R,
) -> Option<&'a Country> {
    pool.choose(rng).copied()
}

/// Build `count` options: the answer plus `count - 1` distinct distractors from
/// `pool`, in uniformly random order.
///
/// The result is shorter than `count` when `pool` lacks enough other countries.
pub fn pick_options<R: Rng + ?Sized>(
    answer: &Country,
    pool: &[Country],
    count: usize,
    rng: &mut R,
) -> Vec<Country> {
    if count == 0 {
        return Vec::new();
    }

    let others: Vec<&Country> = pool.iter().filter(|c| c.code() != answer.code()).collect();
    let mut options: Vec<Country> = others
        .choose_multiple(rng, count - 1)
        .map(|c| (*c).clone())
        .collect();
    options.push(answer.clone());
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::model::{Continent, CountryCode};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn country(code: &str) -> Country {
        Country::new(CountryCode::new(code).unwrap(), code.to_uppercase(), Continent::Europe)
    }

    fn pool(codes: &[&str]) -> Vec<Country> {
        codes.iter().map(|c| country(c)).collect()
    }

    fn codes(options: &[Country]) -> Vec<String> {
        options.iter().map(|c| c.code().to_string()).collect()
    }

    #[test]
    fn options_contain_answer_and_distinct_distractors() {
        let pool = pool(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let answer = &pool[3];
            let options = pick_options(answer, &pool, 4, &mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|c| c.code() == answer.code()).count(), 1);
            let unique: HashSet<_> = codes(&options).into_iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn options_are_capped_by_pool_size() {
        let pool = pool(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(3);
        let options = pick_options(&pool[0], &pool, 12, &mut rng);
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn answer_outside_pool_still_included() {
        let pool = pool(&["a", "b", "c", "d"]);
        let outsider = country("z");
        let mut rng = StdRng::seed_from_u64(5);
        let options = pick_options(&outsider, &pool, 4, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&outsider));
    }

    #[test]
    fn zero_count_yields_no_options() {
        let pool = pool(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_options(&pool[0], &pool, 0, &mut rng).is_empty());
    }

    #[test]
    fn every_permutation_is_roughly_equally_likely() {
        let pool = pool(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 24_000;
        let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..trials {
            let options = pick_options(&pool[1], &pool, 4, &mut rng);
            *seen.entry(codes(&options)).or_default() += 1;
        }

        assert_eq!(seen.len(), 24);
        for count in seen.values() {
            assert!((700..=1300).contains(count), "skewed permutation count {count}");
        }
    }

    #[test]
    fn pick_answer_handles_empty_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(pick_answer(&[], &mut rng).is_none());

        let pool = pool(&["a", "b"]);
        let refs: Vec<&Country> = pool.iter().collect();
        let picked = pick_answer(&refs, &mut rng).unwrap();
        assert!(pool.contains(picked));
    }
}
