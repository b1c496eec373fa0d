//! Environment threading through readers and stacked layers.

use confluence::stack::{ReaderEffect, ReaderMaybe, ReaderOutcome};
use confluence::testing::MockEnv;
use confluence::{Effect, Maybe, Outcome, Reader};

#[derive(Clone)]
struct GameEnv {
    min_wager: i32,
    payout_multiplier: i32,
}

fn game(min_wager: i32) -> GameEnv {
    GameEnv {
        min_wager,
        payout_multiplier: 3,
    }
}

#[test]
fn same_reader_pipeline_respects_each_environment() {
    #[derive(Clone)]
    struct Env {
        threshold: i32,
    }

    // Built once, run many times; every stage reads the env it is given.
    let admitted = Reader::asks(|env: &Env| env.threshold)
        .and_then(|threshold| Reader::new(move |env: &Env| env.threshold == threshold))
        .zip(Reader::asks(|env: &Env| 42 > env.threshold));

    assert_eq!(admitted.run(&Env { threshold: 10 }), (true, true));
    assert_eq!(admitted.run(&Env { threshold: 100 }), (true, false));
    // No caching: back to the first environment, same answer as before.
    assert_eq!(admitted.run(&Env { threshold: 10 }), (true, true));
}

#[test]
fn reader_local_projects_from_mock_env() {
    struct Config {
        greeting: String,
    }

    let env = MockEnv::new()
        .with(|| Config {
            greeting: "hello".to_string(),
        })
        .with(|| 3usize)
        .build();

    // env is (((), Config), usize); adapt a Reader<Config, _> to it.
    let greet = Reader::asks(|config: &Config| config.greeting.clone());
    let repeated = greet
        .local(|env: &(((), Config), usize)| Config {
            greeting: env.0 .1.greeting.clone(),
        })
        .zip(Reader::asks(|env: &(((), Config), usize)| env.1));

    let (greeting, times) = repeated.run(&env);
    assert_eq!(greeting.repeat(times), "hellohellohello");
}

fn eligible_wager(wager: i32) -> ReaderMaybe<GameEnv, i32> {
    ReaderMaybe::new(move |env: &GameEnv| {
        Maybe::from_predicate(wager, |w| *w >= env.min_wager)
    })
}

#[test]
fn reader_maybe_stack_gates_on_the_environment() {
    let pipeline = eligible_wager(10).map(|w| w * 2);

    assert_eq!(pipeline.run(&game(5)), Maybe::Present(20));
    assert_eq!(pipeline.run(&game(50)), Maybe::Absent);
}

#[test]
fn reader_outcome_stack_carries_typed_failures() {
    let placed = ReaderOutcome::<GameEnv, String, i32>::asks(|env: &GameEnv| env.min_wager)
        .and_then(|min| {
            ReaderOutcome::new(move |_: &GameEnv| {
                Outcome::from_predicate(min * 2, |w| *w >= 10, || {
                    "wager below table minimum".to_string()
                })
            })
        })
        .map(|w| w + 1);

    assert_eq!(placed.run(&game(5)), Outcome::Success(11));
    assert_eq!(
        placed.run(&game(2)),
        Outcome::Failure("wager below table minimum".to_string())
    );
}

#[tokio::test]
async fn reader_effect_stack_defers_work_until_run() {
    let payout = ReaderEffect::<GameEnv, String, i32>::asks(|env: &GameEnv| env.min_wager)
        .and_then(|wager| {
            ReaderEffect::new(move |env: &GameEnv| {
                let total = wager * env.payout_multiplier;
                Effect::from_async(move || async move { Ok(total) })
            })
        });

    // The environment decides the result per invocation.
    assert_eq!(payout.run(&game(10)).run().await, Ok(30));
    assert_eq!(payout.run(&game(7)).run().await, Ok(21));
}

#[tokio::test]
async fn reader_effect_stack_short_circuits_failures() {
    let pipeline = ReaderEffect::<GameEnv, String, i32>::new(|_| {
        Effect::fail("wheel jammed".to_string())
    })
    .and_then(|w| ReaderEffect::pure(w + 1));

    assert_eq!(
        pipeline.run(&game(1)).run().await,
        Err("wheel jammed".to_string())
    );
}
