use wordle_clues::commands::{GameEnd, SimulateConfig, simulate_game};
use wordle_clues::{
    Alphabet, Clue, Feedback, Scorer, Selection, Selector, StrategyType, Word, evaluate,
};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn vocabulary() -> (Vec<Word>, Vec<Word>) {
    let answers = words(&[
        "crate", "grate", "irate", "plate", "slate", "spate", "state", "skate",
    ]);
    let mut guesses = answers.clone();
    guesses.extend(words(&["cigar", "spilt", "gimpy"]));
    (answers, guesses)
}

/// Plays a game by hand through the clue API, checking the answer survives
/// every round and the candidate pool never grows.
fn play_by_hand(selector: &Selector<'_, StrategyType>, answer: &Word) -> usize {
    let alphabet = selector.alphabet();
    let mut clue = selector.initial_clue();
    let mut remaining = selector.answers().len();

    for round in 1..=6 {
        let progress = (round - 1) as f64 / 6.0;
        let Selection::Guess(ranking) = selector.select_best_guess(&clue, progress) else {
            panic!("no candidates left for {answer}");
        };
        let guess = ranking.word();
        let feedback = evaluate(alphabet, guess, answer).unwrap();
        if feedback.is_perfect() {
            return round;
        }

        let round_clue = Clue::from_feedback(alphabet, guess, &feedback).unwrap();
        clue = clue.combine(&round_clue).unwrap();
        assert!(clue.matches(answer), "{answer} rejected after {guess}");

        let survivors = clue.filter(selector.answers()).len();
        assert!(survivors <= remaining);
        assert!(survivors >= 1);
        remaining = survivors;
    }
    panic!("{answer} not solved in 6 rounds");
}

#[test]
fn every_strategy_solves_every_answer() {
    let alphabet = Alphabet::lowercase();
    let (answers, guesses) = vocabulary();

    for strategy in StrategyType::all() {
        let name = strategy.name();
        let selector = Selector::new(strategy, &alphabet, 5, &answers, &guesses).unwrap();
        for answer in &answers {
            let rounds = play_by_hand(&selector, answer);
            assert!(rounds <= 6, "{name} took {rounds} rounds on {answer}");
        }
    }
}

#[test]
fn simulated_game_matches_manual_feedback() {
    let alphabet = Alphabet::lowercase();
    let (answers, guesses) = vocabulary();
    let selector =
        Selector::new(StrategyType::default(), &alphabet, 5, &answers, &guesses).unwrap();

    let answer = Word::new("skate").unwrap();
    let result = simulate_game(&selector, &SimulateConfig::new(answer.clone()), &()).unwrap();

    assert_eq!(result.end, GameEnd::Solved);
    assert_eq!(result.steps.last().unwrap().guess, &answer);
    for step in &result.steps {
        let expected = evaluate(&alphabet, step.guess, &answer).unwrap();
        assert_eq!(step.feedback, expected);
    }
}

#[test]
fn clues_from_a_real_game_narrow_to_the_answer() {
    let alphabet = Alphabet::lowercase();
    let (answers, _) = vocabulary();

    let crane = Word::new("crane").unwrap();
    let spilt = Word::new("spilt").unwrap();
    let first: Feedback = "--G-G".parse().unwrap();
    let second: Feedback = "G--YY".parse().unwrap();

    let clue = Clue::from_feedback(&alphabet, &crane, &first)
        .unwrap()
        .combine(&Clue::from_feedback(&alphabet, &spilt, &second).unwrap())
        .unwrap();

    let survivors: Vec<&str> = clue.filter(&answers).iter().map(|w| w.text()).collect();
    assert_eq!(survivors, vec!["slate"]);
    assert_eq!(clue.solution(), None);
}

#[test]
fn contradictory_feedback_leaves_no_candidates() {
    let alphabet = Alphabet::lowercase();
    let (answers, guesses) = vocabulary();
    let selector =
        Selector::new(StrategyType::default(), &alphabet, 5, &answers, &guesses).unwrap();

    let guess = Word::new("crate").unwrap();
    let all_green = Clue::from_feedback(&alphabet, &guess, &Feedback::perfect(5)).unwrap();
    let all_grey: Feedback = "-----".parse().unwrap();
    let clue = all_green
        .combine(&Clue::from_feedback(&alphabet, &guess, &all_grey).unwrap())
        .unwrap();

    assert!(matches!(
        selector.select_best_guess(&clue, 0.5),
        Selection::NoCandidates
    ));
}
