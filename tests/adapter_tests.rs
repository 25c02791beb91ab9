//! Input adapter session tests.
//!
//! Scripted players drive full sessions through `InputAdapter`, checking the
//! prompts shown, the messages printed, and the final outcome.

use std::io::Cursor;

use connections::adapter::{LinePrompt, Prompt, ScriptedPrompt};
use connections::core::{GameResult, GameRng};
use connections::{BoardRenderer, Category, GameEngine, InputAdapter, SessionOutcome};

fn categories() -> Vec<Category> {
    vec![
        Category::new("fruit", ["apple", "banana", "orange", "grape"]).unwrap(),
        Category::new("pets", ["cat", "dog", "fish", "bird"]).unwrap(),
    ]
}

fn engine(lives: u8) -> GameEngine {
    GameEngine::new(categories(), &GameRng::new(99), lives).unwrap()
}

fn play(engine: &mut GameEngine, lines: &[&str]) -> (SessionOutcome, ScriptedPrompt, String) {
    let script = ScriptedPrompt::new(lines.iter().copied());
    let mut adapter = InputAdapter::new(script, Vec::new(), BoardRenderer::plain());
    let outcome = adapter.run(engine).unwrap();
    let (script, out) = adapter.into_parts();
    (outcome, script, String::from_utf8(out).unwrap())
}

#[test]
fn test_winning_session() {
    let mut engine = engine(4);
    let (outcome, script, out) = play(
        &mut engine,
        &[
            "Apple", "banana", "orange", " grape ", "",
            "cat", "dog", "fish", "bird", "",
        ],
    );

    assert_eq!(outcome, SessionOutcome::Finished(GameResult::Won));
    assert_eq!(script.remaining(), 0);
    assert!(out.contains("correct! you found \"fruit\""));
    assert!(out.contains("you have won the game, congratulations :)"));
    assert_eq!(engine.lives(), 4);
}

#[test]
fn test_losing_session() {
    let mut engine = engine(2);
    let mixed = ["apple", "banana", "cat", "dog", ""];
    let lines: Vec<&str> = mixed.iter().chain(mixed.iter()).copied().collect();

    let (outcome, _, out) = play(&mut engine, &lines);

    assert_eq!(outcome, SessionOutcome::Finished(GameResult::Lost));
    assert_eq!(out.matches("words do not align as a group (1 life lost) :(").count(), 1);
    assert!(out.contains("you have lost the game, better luck next time :("));
    assert_eq!(engine.lives(), 0);
}

#[test]
fn test_invalid_input_reprompts() {
    let mut engine = engine(4);
    let (outcome, script, out) = play(&mut engine, &["kiwi", "", "apple"]);

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert_eq!(
        out.matches("invalid word (not in list of remaining words), try again").count(),
        2
    );
    assert_eq!(engine.selected_words(), ["apple"]);
    // kiwi, "", apple, then end of input.
    assert_eq!(
        script.prompts(),
        [
            Prompt::SelectFirst,
            Prompt::SelectFirst,
            Prompt::SelectFirst,
            Prompt::SelectOrDeselect,
        ]
    );
}

#[test]
fn test_full_selection_only_deselects_or_submits() {
    let mut engine = engine(4);
    let (outcome, script, out) = play(
        &mut engine,
        &["apple", "banana", "orange", "cat", "grape", "cat", "grape"],
    );

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(out.contains("invalid input, try again"));
    assert_eq!(engine.selected_words(), ["apple", "banana", "orange", "grape"]);
    assert_eq!(script.prompts()[4], Prompt::DeselectOrSubmit);
    assert_eq!(script.prompts()[5], Prompt::DeselectOrSubmit);
    assert_eq!(script.prompts()[6], Prompt::SelectOrDeselect);
    assert_eq!(engine.lives(), 4);
}

#[test]
fn test_deselect_then_reselect() {
    let mut engine = engine(4);
    let (_, _, _) = play(&mut engine, &["apple", "dog", "apple", "apple"]);
    assert_eq!(engine.selected_words(), ["dog", "apple"]);
}

#[test]
fn test_board_redrawn_after_each_move() {
    let mut engine = engine(4);
    let (_, _, out) = play(&mut engine, &["apple", "dog"]);
    // Initial draw plus one per accepted move.
    assert_eq!(out.matches("remaining lives:").count(), 3);
    assert!(out.contains("[apple "));
}

#[test]
fn test_finished_game_ends_immediately() {
    let mut engine = engine(1);
    for word in ["apple", "cat", "dog", "fish"] {
        engine.toggle_selection(word).unwrap();
    }
    engine.submit_selection().unwrap();

    let (outcome, script, _) = play(&mut engine, &["banana"]);
    assert_eq!(outcome, SessionOutcome::Finished(GameResult::Lost));
    assert!(script.prompts().is_empty());
}

#[test]
fn test_line_prompt_session() {
    let mut engine = GameEngine::new(
        vec![Category::new("pets", ["cat", "dog", "fish", "bird"]).unwrap()],
        &GameRng::new(3),
        4,
    )
    .unwrap();

    let input = Cursor::new("cat\ndog\nfish\nbird\n\n");
    let source = LinePrompt::new(input, Vec::new());
    let mut adapter = InputAdapter::new(source, Vec::new(), BoardRenderer::plain());

    assert_eq!(
        adapter.run(&mut engine).unwrap(),
        SessionOutcome::Finished(GameResult::Won)
    );

    let (source, _) = adapter.into_parts();
    let prompts = String::from_utf8(source.into_writer()).unwrap();
    assert!(prompts.contains(Prompt::DeselectOrSubmit.text()));
}
