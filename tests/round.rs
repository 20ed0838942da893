//! Round controller integration tests.

use std::collections::HashSet;

use guessword::{
    AlertSignal, BuzzPattern, CANONICAL_WORDS, HapticActuator, OptionsError, RoundController,
    RoundOptions, TickOutcome, WORD_COUNT,
};

fn classic(seed: u64) -> RoundController {
    RoundController::new(RoundOptions::classic(), seed).unwrap()
}

fn tick_n(round: &RoundController, n: usize) {
    for _ in 0..n {
        round.tick();
    }
}

#[derive(Default)]
struct RecordingActuator {
    played: Vec<BuzzPattern>,
}

impl HapticActuator for RecordingActuator {
    fn vibrate(&mut self, pattern: BuzzPattern) {
        self.played.push(pattern);
    }
}

#[test]
fn new_round_initial_state() {
    let round = classic(1);
    assert!(CANONICAL_WORDS.contains(&round.current_word()));
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining_millis(), 20_000);
    assert_eq!(round.time_display(), "00:20");
    assert!(!round.is_over());
    assert!(!round.round_finished());
    assert_eq!(round.alert(), AlertSignal::None);
    assert!(round.is_ticking());
    assert!(!round.is_disposed());
    assert_eq!(round.words_remaining(), WORD_COUNT - 1);
}

#[test]
fn invalid_options_are_rejected() {
    let zero_tick = RoundOptions::classic().with_tick_interval_millis(0);
    assert_eq!(
        RoundController::new(zero_tick, 1).unwrap_err(),
        OptionsError::ZeroTickInterval
    );

    let zero_total = RoundOptions::classic().with_total_duration_millis(0);
    assert_eq!(
        RoundController::new(zero_total, 1).unwrap_err(),
        OptionsError::ZeroDuration
    );
}

#[test]
fn classic_countdown_enters_panic_then_ends() {
    let round = classic(2);

    tick_n(&round, 15);
    assert_eq!(round.remaining_millis(), 5_000);
    assert_eq!(round.alert(), AlertSignal::None);

    round.tick();
    assert_eq!(round.remaining_millis(), 4_000);
    assert_eq!(round.alert(), AlertSignal::Panic);
    assert!(!round.is_over());

    tick_n(&round, 3);
    assert_eq!(round.remaining_millis(), 1_000);
    assert_eq!(round.time_display(), "00:01");

    assert_eq!(round.tick(), TickOutcome::Finished);
    assert_eq!(round.remaining_millis(), 0);
    assert!(round.is_over());
    assert!(round.round_finished());
    assert_eq!(round.alert(), AlertSignal::RoundOver);
    assert!(!round.is_ticking());
    assert_eq!(round.time_display(), "00:00");
}

#[test]
fn panic_alert_repeats_every_tick() {
    let round = classic(3);
    tick_n(&round, 16);
    assert_eq!(round.alert(), AlertSignal::Panic);

    round.acknowledge_alert();
    assert_eq!(round.alert(), AlertSignal::None);

    assert_eq!(
        round.tick(),
        TickOutcome::Running {
            remaining_millis: 3_000
        }
    );
    assert_eq!(round.alert(), AlertSignal::Panic);
}

#[test]
fn finish_is_signaled_once() {
    let round = classic(4);
    let mut finishes = 0;

    for _ in 0..40 {
        if round.tick() == TickOutcome::Finished {
            finishes += 1;
        }
    }
    assert_eq!(finishes, 1);
    assert_eq!(round.remaining_millis(), 0);

    round.acknowledge_round_finished();
    assert!(!round.round_finished());
    assert!(round.is_over());

    assert_eq!(round.tick(), TickOutcome::Stopped);
    assert!(!round.round_finished());
}

#[test]
fn uneven_duration_clamps_at_zero() {
    let options = RoundOptions::classic()
        .with_total_duration_millis(2_500)
        .with_panic_threshold_millis(None);
    let round = RoundController::new(options, 5).unwrap();

    assert_eq!(
        round.tick(),
        TickOutcome::Running {
            remaining_millis: 1_500
        }
    );
    assert_eq!(
        round.tick(),
        TickOutcome::Running {
            remaining_millis: 500
        }
    );
    assert_eq!(round.tick(), TickOutcome::Finished);
    assert_eq!(round.remaining_millis(), 0);
}

#[test]
fn three_correct_one_skip_scores_two() {
    let round = classic(6);
    assert!(round.mark_correct());
    assert!(round.mark_correct());
    assert!(round.mark_correct());
    assert!(round.mark_skip());
    assert_eq!(round.score(), 2);
}

#[test]
fn score_is_correct_minus_skips() {
    let round = classic(7);
    let mut expected = 0;

    for i in 0..100_u32 {
        if (i * 7 + 3) % 5 < 2 {
            round.mark_correct();
            expected += 1;
        } else {
            round.mark_skip();
            expected -= 1;
        }
        assert_eq!(round.score(), expected);
    }
    assert!(round.score() < 0);
}

#[test]
fn correct_raises_alert_and_skip_leaves_it() {
    let round = classic(8);

    round.mark_skip();
    assert_eq!(round.alert(), AlertSignal::None);

    round.mark_correct();
    assert_eq!(round.alert(), AlertSignal::Correct);

    round.mark_skip();
    assert_eq!(round.alert(), AlertSignal::Correct);

    round.acknowledge_alert();
    assert_eq!(round.alert(), AlertSignal::None);
}

#[test]
fn actions_draw_through_the_whole_pool() {
    let round = classic(9);
    let mut seen = vec![round.current_word()];

    for i in 0..WORD_COUNT - 1 {
        if i % 2 == 0 {
            round.mark_correct();
        } else {
            round.mark_skip();
        }
        seen.push(round.current_word());
    }
    assert_eq!(round.words_remaining(), 0);

    let unique: HashSet<&str> = seen.into_iter().collect();
    assert_eq!(unique.len(), WORD_COUNT);

    round.mark_skip();
    assert_eq!(round.words_remaining(), WORD_COUNT - 1);
}

#[test]
fn actions_after_round_over_are_ignored() {
    let round = classic(10);
    round.mark_correct();
    tick_n(&round, 20);
    assert!(round.is_over());

    let word = round.current_word();
    assert!(!round.mark_correct());
    assert!(!round.mark_skip());
    assert_eq!(round.score(), 1);
    assert_eq!(round.current_word(), word);
    assert_eq!(round.alert(), AlertSignal::RoundOver);
}

#[test]
fn dispose_freezes_the_round() {
    let round = classic(11);
    tick_n(&round, 5);
    round.mark_correct();
    round.dispose();

    assert!(round.is_disposed());
    assert!(!round.is_ticking());
    assert_eq!(round.tick(), TickOutcome::Stopped);
    assert_eq!(round.remaining_millis(), 15_000);

    assert!(!round.mark_correct());
    assert!(!round.mark_skip());
    round.acknowledge_alert();
    round.acknowledge_round_finished();

    assert_eq!(round.score(), 1);
    assert_eq!(round.alert(), AlertSignal::Correct);
    assert!(!round.is_over());
    assert!(round.review().is_none());
}

#[test]
fn dispose_after_finish_is_harmless() {
    let round = classic(12);
    tick_n(&round, 20);
    round.dispose();
    round.dispose();

    assert!(round.is_over());
    assert_eq!(round.remaining_millis(), 0);
    assert_eq!(round.review().map(|review| review.score()), Some(0));
}

#[test]
fn simple_round_never_alerts() {
    let round = RoundController::new(RoundOptions::simple(), 13).unwrap();
    assert_eq!(round.remaining_millis(), 10_000);

    round.mark_correct();
    assert_eq!(round.alert(), AlertSignal::None);

    for _ in 0..10 {
        round.tick();
        assert_eq!(round.alert(), AlertSignal::None);
    }
    assert!(round.is_over());
    assert!(round.round_finished());
}

#[test]
fn deliver_alert_plays_matching_pattern() {
    let round = classic(14);
    let mut actuator = RecordingActuator::default();

    assert_eq!(round.deliver_alert(&mut actuator), AlertSignal::None);
    assert!(actuator.played.is_empty());

    round.mark_correct();
    assert_eq!(round.deliver_alert(&mut actuator), AlertSignal::Correct);
    assert_eq!(round.alert(), AlertSignal::None);

    tick_n(&round, 16);
    assert_eq!(round.deliver_alert(&mut actuator), AlertSignal::Panic);

    tick_n(&round, 4);
    assert_eq!(round.deliver_alert(&mut actuator), AlertSignal::RoundOver);

    assert_eq!(
        actuator.played,
        vec![
            BuzzPattern::RepeatingShort,
            BuzzPattern::SingleShort,
            BuzzPattern::SingleLong,
        ]
    );
}

#[test]
fn buzz_pattern_timings() {
    assert_eq!(AlertSignal::Correct.buzz_pattern().timings(), &[100; 6]);
    assert_eq!(AlertSignal::RoundOver.buzz_pattern().timings(), &[0, 2000]);
    assert_eq!(AlertSignal::Panic.buzz_pattern().timings(), &[0, 200]);
    assert_eq!(AlertSignal::None.buzz_pattern(), BuzzPattern::Silent);
    assert_eq!(BuzzPattern::Silent.timings(), &[0]);
}

#[test]
fn snapshot_matches_getters() {
    let round = classic(15);
    round.mark_correct();
    tick_n(&round, 17);

    let snapshot = round.snapshot();
    assert_eq!(snapshot.current_word, round.current_word());
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.remaining_millis, 3_000);
    assert_eq!(snapshot.time_display, "00:03");
    assert!(!snapshot.is_over);
    assert!(!snapshot.finish_pending);
    assert_eq!(snapshot.alert, AlertSignal::Panic);
}

#[test]
fn long_rounds_display_hours() {
    let options = RoundOptions::classic().with_total_duration_millis(3_700_000);
    let round = RoundController::new(options, 16).unwrap();
    assert_eq!(round.time_display(), "1:01:40");
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default()
        .with_total_duration_millis(30_000)
        .with_tick_interval_millis(500)
        .with_panic_threshold_millis(Some(2_000))
        .with_alerts(false);

    assert_eq!(options.total_duration_millis, 30_000);
    assert_eq!(options.tick_interval_millis, 500);
    assert_eq!(options.panic_threshold_millis, Some(2_000));
    assert!(!options.alerts);
    assert_eq!(RoundOptions::default(), RoundOptions::classic());
}
