use guessword::{
    AlertSignal, OptionsError, RoundController, RoundOptions, RoundSnapshot, ScoreReview,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser binding: one round at a time, followed by its score review.
///
/// The page drives `tick` from `setInterval(.., tickIntervalMillis)` and stops
/// the interval once `tick` returns `false`.
#[wasm_bindgen]
pub struct WasmRound {
    options: RoundOptions,
    seed: u64,
    round: RoundController,
    review: Option<ScoreReview>,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, simple: bool) -> Result<WasmRound, JsValue> {
        let options = if simple {
            RoundOptions::simple()
        } else {
            RoundOptions::classic()
        };
        let seed = seed as u64;
        let round = RoundController::new(options, seed).map_err(js_err)?;

        Ok(Self {
            options,
            seed,
            round,
            review: None,
        })
    }

    pub fn tick_interval_millis(&self) -> u32 {
        self.options.tick_interval_millis as u32
    }

    /// Returns whether the page should keep ticking.
    pub fn tick(&mut self) -> bool {
        self.round.tick();
        if self.round.is_over() && self.review.is_none() {
            self.review = self.round.review();
        }
        self.round.is_ticking()
    }

    pub fn mark_correct(&self) {
        self.round.mark_correct();
    }

    pub fn mark_skip(&self) {
        self.round.mark_skip();
    }

    /// Takes the pending alert and returns its vibration timings for
    /// `navigator.vibrate`, or `null` when there is nothing to play.
    pub fn take_buzz(&self) -> Option<Vec<u32>> {
        let alert = self.round.alert();
        if alert == AlertSignal::None {
            return None;
        }
        self.round.acknowledge_alert();
        Some(
            alert
                .buzz_pattern()
                .timings()
                .iter()
                .map(|&millis| millis as u32)
                .collect(),
        )
    }

    pub fn acknowledge_round_finished(&self) {
        self.round.acknowledge_round_finished();
    }

    pub fn dispose(&self) {
        self.round.dispose();
    }

    pub fn request_new_round(&self) -> Result<(), JsValue> {
        self.review
            .as_ref()
            .ok_or_else(|| JsValue::from_str("round is not over"))?
            .request_new_round();
        Ok(())
    }

    /// Replaces the finished round with a fresh one if the player asked for it.
    ///
    /// Returns whether a new round was started.
    pub fn start_requested_round(&mut self) -> Result<bool, JsValue> {
        let requested = self
            .review
            .as_ref()
            .is_some_and(ScoreReview::new_round_requested);
        if !requested {
            return Ok(false);
        }

        self.round.dispose();
        self.seed = self.seed.wrapping_add(1);
        self.round = RoundController::new(self.options, self.seed).map_err(js_err)?;
        if let Some(review) = self.review.take() {
            review.acknowledge_new_round_handled();
        }
        Ok(true)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            round: JsRound::from(self.round.snapshot()),
            review: self.review.as_ref().map(|review| JsReview {
                score: review.score(),
                new_round_requested: review.new_round_requested(),
            }),
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    round: JsRound,
    review: Option<JsReview>,
}

#[derive(Serialize)]
struct JsRound {
    word: &'static str,
    score: i32,
    remaining_millis: u32,
    time: String,
    is_over: bool,
    finish_pending: bool,
    alert: &'static str,
}

impl From<RoundSnapshot> for JsRound {
    fn from(snapshot: RoundSnapshot) -> Self {
        Self {
            word: snapshot.current_word,
            score: snapshot.score,
            remaining_millis: snapshot.remaining_millis as u32,
            time: snapshot.time_display,
            is_over: snapshot.is_over,
            finish_pending: snapshot.finish_pending,
            alert: alert_to_str(snapshot.alert),
        }
    }
}

#[derive(Serialize)]
struct JsReview {
    score: i32,
    new_round_requested: bool,
}

fn alert_to_str(alert: AlertSignal) -> &'static str {
    match alert {
        AlertSignal::None => "None",
        AlertSignal::Correct => "Correct",
        AlertSignal::Panic => "Panic",
        AlertSignal::RoundOver => "RoundOver",
    }
}

fn js_err(err: OptionsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
