use mrquack::games::{
    AnswerOutcome, QuizGame, QuizProgress, QuizState, duck_questions,
};

fn answers() -> Vec<String> {
    duck_questions()
        .unwrap()
        .iter()
        .map(|q| q.answer().to_string())
        .collect()
}

#[test]
fn all_correct_scores_four() {
    let mut quiz = QuizGame::new(duck_questions().unwrap()).unwrap();

    let mut last = None;
    for answer in answers() {
        assert_eq!(quiz.submit_answer(&answer).unwrap(), AnswerOutcome::Correct);
        last = Some(quiz.next().unwrap());
    }

    assert_eq!(last, Some(QuizProgress::Finished { score: 4, total: 4 }));
    assert_eq!(quiz.state(), &QuizState::Finished { score: 4 });
}

#[test]
fn claws_first_then_correct_scores_three() {
    let mut quiz = QuizGame::new(duck_questions().unwrap()).unwrap();

    let first = quiz.submit_answer("Claws").unwrap();
    assert_eq!(
        first,
        AnswerOutcome::Incorrect {
            correct_answer: "Webbed feet".into()
        }
    );
    assert!(first.to_string().contains("Webbed feet"));
    assert_eq!(quiz.choice(), Some("Claws"));
    quiz.next().unwrap();

    for answer in answers().iter().skip(1) {
        quiz.submit_answer(answer).unwrap();
        quiz.next().unwrap();
    }

    assert_eq!(quiz.state(), &QuizState::Finished { score: 3 });
}

#[test]
fn restart_returns_to_initial_state() {
    let fresh = QuizGame::new(duck_questions().unwrap()).unwrap();
    let mut quiz = fresh.clone();
    for answer in answers() {
        quiz.submit_answer(&answer).unwrap();
        quiz.next().unwrap();
    }
    assert!(quiz.is_finished());

    quiz.restart();
    assert_eq!(quiz.state(), fresh.state());
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.score(), 0);
    assert!(!quiz.is_answered());
    assert_eq!(quiz.choice(), None);
}

#[test]
fn double_submit_counts_once() {
    let mut quiz = QuizGame::new(duck_questions().unwrap()).unwrap();
    quiz.submit_answer("Webbed feet").unwrap();
    assert_eq!(
        quiz.submit_answer("Webbed feet").unwrap(),
        AnswerOutcome::AlreadyAnswered
    );
    assert_eq!(quiz.score(), 1);
}
