use mrquack::games::{GUESS_MAX, GUESS_MIN, GuessGame, GuessOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn secret_ten_guessed_on_third_try() {
    let mut game = GuessGame::with_secret(10, StdRng::seed_from_u64(2024)).unwrap();

    let responses: Vec<GuessOutcome> = [5, 15, 10]
        .into_iter()
        .map(|guess| game.submit(guess).unwrap())
        .collect();

    assert_eq!(
        responses,
        vec![
            GuessOutcome::TooLow,
            GuessOutcome::TooHigh,
            GuessOutcome::Correct {
                secret: 10,
                attempts: 3
            },
        ]
    );
    assert_eq!(responses[0].to_string(), "Too low! Try again.");
    assert_eq!(responses[1].to_string(), "Too high! Try again.");
    assert!(responses[2].to_string().contains("You guessed it in 3 attempts"));

    assert_eq!(game.attempts(), 0);
    assert!((GUESS_MIN..=GUESS_MAX).contains(&game.secret()));
}

#[test]
fn game_keeps_running_across_rounds() {
    let mut game = GuessGame::seeded(5);
    for _round in 0..10 {
        let secret = game.secret();
        // Binary search always finds the secret within five guesses.
        let (mut low, mut high) = (i64::from(GUESS_MIN), i64::from(GUESS_MAX));
        let mut guesses = 0;
        loop {
            let guess = (low + high) / 2;
            guesses += 1;
            match game.submit(guess).unwrap() {
                GuessOutcome::TooLow => low = guess + 1,
                GuessOutcome::TooHigh => high = guess - 1,
                GuessOutcome::Correct { secret: s, attempts } => {
                    assert_eq!(s, secret);
                    assert_eq!(attempts, guesses);
                    break;
                }
            }
        }
        assert!(guesses <= 5);
        assert_eq!(game.attempts(), 0);
    }
}
