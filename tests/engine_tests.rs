//! Engine scenario tests.
//!
//! These walk whole games through the public API: correct and incorrect
//! guesses, winning on the last category, losing on the last life, and
//! rejecting moves once a game is over.

use connections::categories::builtin::classic_categories;
use connections::core::{
    GameConfig, GameError, GamePhase, GameResult, GameRng, PoolSource, SelectionResult,
    SubmitResult,
};
use connections::{Category, GameEngine};

fn fruit_and_friends() -> Vec<Category> {
    vec![
        Category::new("fruit", ["apple", "banana", "orange", "grape"]).unwrap(),
        Category::new("pets", ["cat", "dog", "fish", "bird"]).unwrap(),
        Category::new("weather", ["rain", "snow", "hail", "fog"]).unwrap(),
        Category::new("metals", ["iron", "gold", "tin", "zinc"]).unwrap(),
    ]
}

fn select(engine: &mut GameEngine, words: &[&str]) {
    for word in words {
        assert_eq!(engine.toggle_selection(word), Ok(SelectionResult::Selected));
    }
}

fn solve(engine: &mut GameEngine, category: &Category) -> SubmitResult {
    for word in category.words() {
        engine.toggle_selection(word).unwrap();
    }
    engine.submit_selection().unwrap()
}

/// Selecting a category's exact words and submitting solves it.
#[test]
fn test_correct_group_is_solved() {
    let mut engine = GameEngine::new(fruit_and_friends(), &GameRng::new(1), 4).unwrap();

    select(&mut engine, &["apple", "banana", "orange", "grape"]);
    let result = engine.submit_selection().unwrap();

    assert!(matches!(result, SubmitResult::Correct { ref category } if category.name() == "fruit"));
    assert_eq!(engine.solved_categories().len(), 1);
    for word in ["apple", "banana", "orange", "grape"] {
        assert!(!engine.remaining_words().iter().any(|w| w == word));
    }
    assert_eq!(engine.remaining_words().len(), 12);
    assert_eq!(engine.lives(), 4);
}

/// A mixed selection costs exactly one life and changes nothing else.
#[test]
fn test_mixed_group_costs_one_life() {
    let mut engine = GameEngine::new(fruit_and_friends(), &GameRng::new(2), 4).unwrap();
    let categories_before = engine.remaining_categories().to_vec();
    let words_before = engine.remaining_words().to_vec();

    select(&mut engine, &["apple", "banana", "cat", "dog"]);
    assert_eq!(engine.submit_selection(), Ok(SubmitResult::Incorrect { lives: 3 }));

    assert_eq!(engine.lives(), 3);
    assert!(engine.selected_words().is_empty());
    assert_eq!(engine.remaining_categories(), categories_before.as_slice());
    assert_eq!(engine.remaining_words(), words_before.as_slice());
}

/// Three of a category plus one stray is still wrong.
#[test]
fn test_near_miss_is_incorrect() {
    let mut engine = GameEngine::new(fruit_and_friends(), &GameRng::new(3), 4).unwrap();
    select(&mut engine, &["apple", "banana", "orange", "iron"]);
    assert!(matches!(engine.submit_selection(), Ok(SubmitResult::Incorrect { .. })));
}

/// Running out of lives ends the game; later moves are rejected.
#[test]
fn test_last_life_loses() {
    let mut engine = GameEngine::new(fruit_and_friends(), &GameRng::new(4), 1).unwrap();

    select(&mut engine, &["apple", "cat", "rain", "iron"]);
    assert_eq!(engine.submit_selection(), Ok(SubmitResult::Lost));
    assert_eq!(engine.is_terminal(), Some(GameResult::Lost));
    assert_eq!(engine.phase(), GamePhase::Lost);

    let before = engine.snapshot();
    assert_eq!(engine.toggle_selection("apple"), Err(GameError::GameOver));
    assert_eq!(engine.submit_selection(), Err(GameError::GameOver));
    assert_eq!(engine.snapshot(), before);
}

/// Losing lives along the way, then solving everything, still wins.
#[test]
fn test_win_after_mistakes() {
    let cats = fruit_and_friends();
    let mut engine = GameEngine::new(cats.clone(), &GameRng::new(5), 4).unwrap();

    for _ in 0..3 {
        select(&mut engine, &["apple", "cat", "rain", "iron"]);
        engine.submit_selection().unwrap();
    }
    assert_eq!(engine.lives(), 1);

    for cat in &cats[..3] {
        assert!(matches!(solve(&mut engine, cat), SubmitResult::Correct { .. }));
    }
    assert_eq!(
        solve(&mut engine, &cats[3]),
        SubmitResult::Won {
            category: cats[3].clone()
        }
    );
    assert_eq!(engine.lives(), 1);
    assert_eq!(engine.is_terminal(), Some(GameResult::Won));
}

/// The final correct submission reports `Won`, never `Correct`.
#[test]
fn test_final_solve_is_won() {
    let cats = fruit_and_friends();
    let mut engine = GameEngine::new(cats.clone(), &GameRng::new(6), 4).unwrap();

    let results: Vec<SubmitResult> = cats.iter().map(|c| solve(&mut engine, c)).collect();
    assert!(results[..3].iter().all(|r| matches!(r, SubmitResult::Correct { .. })));
    assert!(matches!(results[3], SubmitResult::Won { .. }));

    let solved: Vec<&str> = engine.solved_categories().iter().map(|c| c.name()).collect();
    assert_eq!(solved, ["fruit", "pets", "weather", "metals"]);
}

/// Words from a solved category can no longer be selected.
#[test]
fn test_solved_words_are_invalid() {
    let cats = fruit_and_friends();
    let mut engine = GameEngine::new(cats.clone(), &GameRng::new(7), 4).unwrap();
    solve(&mut engine, &cats[1]);

    let before = engine.snapshot();
    let history_len = engine.history().len();
    assert_eq!(
        engine.toggle_selection("dog"),
        Err(GameError::InvalidWord("dog".into()))
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.history().len(), history_len);
}

/// A fifth distinct word is refused; the four stay selected.
#[test]
fn test_fifth_word_refused() {
    let mut engine = GameEngine::new(fruit_and_friends(), &GameRng::new(8), 4).unwrap();
    select(&mut engine, &["apple", "cat", "rain", "iron"]);

    assert_eq!(engine.toggle_selection("gold"), Err(GameError::SelectionFull));
    assert_eq!(engine.selected_words(), ["apple", "cat", "rain", "iron"]);
}

/// The classic board plays start to finish.
#[test]
fn test_classic_board() {
    let config = GameConfig::default()
        .with_pool(PoolSource::Classic)
        .with_seed(2024);
    let mut engine = GameEngine::from_config(&config).unwrap();
    assert_eq!(engine.remaining_words().len(), 16);

    let cats = classic_categories().unwrap();
    let last = cats.len() - 1;
    for (i, cat) in cats.iter().enumerate() {
        let result = solve(&mut engine, cat);
        assert_eq!(result.is_terminal(), i == last);
    }
    assert_eq!(engine.is_terminal(), Some(GameResult::Won));
}

/// Seeded configs deal identical boards; different seeds usually don't.
#[test]
fn test_seeded_boards() {
    let a = GameEngine::from_config(&GameConfig::default().with_seed(10)).unwrap();
    let b = GameEngine::from_config(&GameConfig::default().with_seed(10)).unwrap();
    let c = GameEngine::from_config(&GameConfig::default().with_seed(11)).unwrap();

    assert_eq!(a.remaining_categories(), b.remaining_categories());
    assert_eq!(a.remaining_words(), b.remaining_words());
    assert_ne!(a.remaining_words(), c.remaining_words());
}

/// Unseeded configs still produce valid boards.
#[test]
fn test_unseeded_board() {
    let engine = GameEngine::from_config(&GameConfig::default()).unwrap();
    assert_eq!(engine.remaining_words().len(), 16);
    assert!(engine.state().invariants_hold());
}
