//! Score review tests.

use guessword::{RoundController, RoundOptions, ScoreReview};

#[test]
fn score_is_fixed_at_construction() {
    let review = ScoreReview::new(7);
    assert_eq!(review.score(), 7);

    review.request_new_round();
    review.acknowledge_new_round_handled();
    review.request_new_round();
    assert_eq!(review.score(), 7);
}

#[test]
fn new_round_request_is_one_shot() {
    let review = ScoreReview::new(-2);
    assert!(!review.new_round_requested());

    review.request_new_round();
    assert!(review.new_round_requested());

    review.acknowledge_new_round_handled();
    assert!(!review.new_round_requested());
}

#[test]
fn review_hands_off_to_a_fresh_round() {
    let round = RoundController::new(RoundOptions::simple(), 8).unwrap();
    round.mark_correct();
    while round.is_ticking() {
        round.tick();
    }
    round.dispose();

    let review = round.review().unwrap();
    assert_eq!(review.score(), 1);
    review.request_new_round();

    let next = if review.new_round_requested() {
        review.acknowledge_new_round_handled();
        RoundController::new(RoundOptions::simple(), 9).ok()
    } else {
        None
    };

    let next = next.unwrap();
    assert_eq!(next.score(), 0);
    assert!(!next.is_over());
    assert!(!review.new_round_requested());
}
