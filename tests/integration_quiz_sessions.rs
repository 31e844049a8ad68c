use entornos::interval::{Interval, IntervalKind, TypeTag};
use entornos::render::{render, Figure, Recorder};
use entornos::validator::{check, AnswerSubmission, Outcome};
use entornos::{InputError, Session};

/// End-to-end behaviour of a quiz session: answering, neighborhoods,
/// membership questions and the running score.

#[test]
fn closed_interval_outcome_table() {
    let interval = Interval::Closed { left: 2, right: 5 };

    let both = check(&interval, &AnswerSubmission::new(Some(TypeTag::Closed), "[2,5]")).unwrap();
    assert_eq!(both.outcome, Outcome::BothCorrect);

    let notation =
        check(&interval, &AnswerSubmission::new(Some(TypeTag::Closed), "[2,5)")).unwrap();
    assert_eq!(notation.outcome, Outcome::TypeCorrectNotationWrong);

    let wrong = check(&interval, &AnswerSubmission::new(Some(TypeTag::Open), "[2,5]")).unwrap();
    assert_eq!(wrong.outcome, Outcome::Incorrect);
    let text = wrong.feedback().text();
    assert!(text.contains("Cerrado [a,b]"));
    assert!(text.contains("[2,5]"));
}

#[test]
fn session_score_over_mixed_answers() {
    let mut session = Session::seeded(2024);

    for round in 0..10 {
        let interval = *session.current();
        let notation = if round % 2 == 0 {
            interval.notation()
        } else {
            format!("{} ", interval.notation()).replace(',', ";")
        };
        session
            .submit_answer(&AnswerSubmission::new(Some(interval.type_tag()), notation))
            .unwrap();
        session.new_question();
    }

    let stats = session.stats();
    assert_eq!(stats.correct, 5);
    assert_eq!(stats.incorrect, 5);
    assert_eq!(stats.percentage(), 50);
}

#[test]
fn incomplete_answers_do_not_count() {
    let mut session = Session::seeded(5);

    let err = session
        .submit_answer(&AnswerSubmission::new(None, "[1,2]"))
        .unwrap_err();
    assert_eq!(err, InputError::IncompleteInput);
    let err = session
        .submit_answer(&AnswerSubmission::new(Some(TypeTag::Open), "   "))
        .unwrap_err();
    assert_eq!(err, InputError::IncompleteInput);

    assert_eq!(session.stats().total(), 0);
}

#[test]
fn every_kind_shows_up_over_a_long_session() {
    let mut session = Session::seeded(99);
    let mut seen = Vec::new();
    for _ in 0..500 {
        let kind = session.new_question().kind();
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    for kind in IntervalKind::ALL {
        assert!(seen.contains(&kind), "{kind} never generated");
    }
}

#[test]
fn membership_counts_towards_score() {
    let mut session = Session::seeded(1);

    let zero = session.check_membership("0", "0", "10", false, true).unwrap();
    let ten = session.check_membership("10", "0", "10", false, true).unwrap();
    let five = session.check_membership(" 5 ", "0", "10", false, true).unwrap();

    assert!(!zero.belongs);
    assert!(ten.belongs);
    assert!(five.belongs);
    assert_eq!(session.stats().correct, 2);
    assert_eq!(session.stats().incorrect, 1);

    assert!(session.check_membership("", "0", "10", true, true).is_err());
    assert_eq!(session.stats().total(), 3);
}

#[test]
fn neighborhood_is_drawn_without_scoring() {
    let session = Session::seeded(1);
    let n = session.create_neighborhood("3", "2", true).unwrap();

    let mut surface = Recorder::new(600.0, 150.0);
    render(&mut surface, &Figure::Neighborhood(n));

    let points = surface.points();
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|(_, solid)| !solid));
    assert_eq!(surface.labels(), vec!["1", "3", "5"]);
    assert_eq!(session.stats().total(), 0);
}

#[test]
fn generated_questions_render_their_bounds() {
    let mut session = Session::seeded(7);
    for _ in 0..50 {
        let interval = *session.new_question();
        let mut surface = Recorder::new(600.0, 150.0);
        render(&mut surface, &Figure::Interval(interval));

        let labels = surface.labels();
        for bound in [interval.left(), interval.right()].into_iter().flatten() {
            assert!(labels.contains(&bound.to_string().as_str()));
        }
        let expected_arrows = usize::from(interval.left().is_none() || interval.right().is_none());
        assert_eq!(surface.arrows().len(), expected_arrows);
    }
}
