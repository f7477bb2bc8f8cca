use model::question::Question;
use rand::{seq::SliceRandom, Rng};

/// Number of questions served per browsing page.
pub const PAGE_SIZE: usize = 10;

/// Category scope for the quiz selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(i32),
}

impl Scope {
    /// Resolves the candidate pool. Unknown category identifiers yield an
    /// empty pool rather than an error; the "All" sentinel convention means
    /// callers may pass identifiers that were never issued.
    pub fn pool<'q>(&self, questions: &'q [Question]) -> Vec<&'q Question> {
        match *self {
            Self::All => questions.iter().collect(),
            Self::Category(id) => by_category(questions, id),
        }
    }
}

/// Slices an identifier-ordered sequence into its 1-based `page`. Pages past
/// the end come back empty; whether that is an error is the caller's call.
pub fn paginate(questions: &[Question], page: usize) -> &[Question] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(questions.len());
    questions.get(start..end).unwrap_or_default()
}

/// Case-insensitive substring filter over question text. An empty term
/// matches everything. Preserves the catalog's iteration order.
pub fn search<'q>(questions: &'q [Question], term: &str) -> Vec<&'q Question> {
    let needle = term.to_lowercase();
    questions.iter().filter(|question| question.raw.question.to_lowercase().contains(&needle)).collect()
}

/// Selects the questions belonging to one category.
pub fn by_category(questions: &[Question], category: i32) -> Vec<&Question> {
    questions.iter().filter(|question| question.raw.category == category).collect()
}

/// Picks one not-yet-seen question uniformly at random, or `None` once the
/// pool is exhausted. The pick is never recorded here; the caller extends
/// `excluded` on its next call.
pub fn next_question<'q, R: Rng>(pool: &[&'q Question], excluded: &[i32], rng: &mut R) -> Option<&'q Question> {
    let unseen: Vec<_> = pool.iter().copied().filter(|question| !excluded.contains(&question.id)).collect();
    unseen.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::question::RawQuestion;
    use rand::{rngs::StdRng, SeedableRng};

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question {
            id,
            raw: RawQuestion {
                question: text.into(),
                answer: "whichever".into(),
                category,
                difficulty: 1,
            },
        }
    }

    fn catalog(count: i32) -> Vec<Question> {
        (1..=count).map(|id| question(id, "placeholder", 1 + id % 3)).collect()
    }

    #[test]
    fn first_page_holds_the_ten_lowest_identifiers() {
        let questions = catalog(12);
        let ids: Vec<_> = paginate(&questions, 1).iter().map(|question| question.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let questions = catalog(12);
        let ids: Vec<_> = paginate(&questions, 2).iter().map(|question| question.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let questions = catalog(12);
        assert!(paginate(&questions, 3).is_empty());
        assert!(paginate(&questions, 400).is_empty());
    }

    #[test]
    fn repeated_pagination_is_deterministic() {
        let questions = catalog(35);
        assert_eq!(paginate(&questions, 3), paginate(&questions, 3));
    }

    #[test]
    fn short_catalogs_fit_on_one_page() {
        let questions = catalog(4);
        assert_eq!(paginate(&questions, 1), &questions[..]);
    }

    #[test]
    fn search_ignores_case() {
        let questions = vec![
            question(1, "What is the title of this song?", 1),
            question(2, "Name the first president.", 2),
            question(3, "Which book has the longest TITLE?", 1),
        ];
        let upper = search(&questions, "TITLE");
        let lower = search(&questions, "title");
        assert_eq!(upper, lower);
        assert_eq!(upper.iter().map(|question| question.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let questions = catalog(7);
        assert_eq!(search(&questions, "").len(), 7);
    }

    #[test]
    fn search_preserves_catalog_order() {
        let questions = catalog(20);
        let matches = search(&questions, "placeholder");
        assert!(matches.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn category_filter_is_total() {
        let questions = catalog(30);
        let matches = by_category(&questions, 2);
        assert!(matches.iter().all(|question| question.raw.category == 2));
        let expected = questions.iter().filter(|question| question.raw.category == 2).count();
        assert_eq!(matches.len(), expected);
    }

    #[test]
    fn missing_categories_filter_to_nothing() {
        let questions = catalog(9);
        assert!(by_category(&questions, 999).is_empty());
        assert!(Scope::Category(999).pool(&questions).is_empty());
    }

    #[test]
    fn excluded_questions_are_never_served() {
        let questions = catalog(12);
        let pool = Scope::All.pool(&questions);
        let mut rng = StdRng::seed_from_u64(42);
        let mut excluded = Vec::new();
        while let Some(next) = next_question(&pool, &excluded, &mut rng) {
            assert!(!excluded.contains(&next.id));
            excluded.push(next.id);
        }

        // Every question surfaced exactly once before exhaustion.
        excluded.sort_unstable();
        assert_eq!(excluded, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn scoped_pools_only_serve_their_category() {
        let questions = catalog(30);
        let pool = Scope::Category(2).pool(&questions);
        let mut rng = StdRng::seed_from_u64(7);
        let next = next_question(&pool, &[], &mut rng).unwrap();
        assert_eq!(next.raw.category, 2);
    }

    #[test]
    fn exhausted_pools_yield_nothing() {
        let questions = catalog(3);
        let pool = Scope::All.pool(&questions);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(next_question(&pool, &[1, 2, 3], &mut rng).is_none());
        assert!(next_question(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn selection_is_reproducible_for_a_seeded_generator() {
        let questions = catalog(12);
        let pool = Scope::All.pool(&questions);
        let first = next_question(&pool, &[], &mut StdRng::seed_from_u64(99)).unwrap();
        let second = next_question(&pool, &[], &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first.id, second.id);
    }
}
