mod harness;

use std::time::Duration;

use anyhow::Result;
use common::{
    Direction, GameEngine, GameEvent, GameState, GameStatus, InputEvent, Key, Position, PseudoRandom,
};
use harness::{Call, ManualClock, RecordingPresenter, ScriptedInput};

fn game(width: u16, height: u16) -> Result<GameState<PseudoRandom>> {
    GameState::with_rng(width, height, PseudoRandom::new(4242))
}

fn presenter_on(clock: &ManualClock, render_cost: Duration) -> RecordingPresenter {
    RecordingPresenter {
        render_cost,
        clock: Some(clock.handle()),
        ..Default::default()
    }
}

#[test]
fn quit_event_ends_the_loop_after_rendering_that_frame() -> Result<()> {
    let mut game = game(10, 10)?;
    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(16));
    let mut input = ScriptedInput::default();
    input.push_frame(vec![InputEvent::Quit], &[]);
    let mut presenter = RecordingPresenter::default();

    let summary = engine.run(&mut game, &mut input, &mut presenter)?;

    assert_eq!(summary.frames, 1);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.size, 1);
    assert_eq!(presenter.renders(), 1);
    assert!(!engine.is_running());
    Ok(())
}

#[test]
fn sleeps_for_the_rest_of_each_frame() -> Result<()> {
    let mut game = game(10, 10)?;
    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(16));
    let mut input = ScriptedInput::default();
    input.push_idle(3);
    let mut presenter = presenter_on(&clock, Duration::from_millis(5));

    engine.run(&mut game, &mut input, &mut presenter)?;

    // Three idle frames plus the quitting one, 11ms of sleep each
    assert_eq!(engine.total_frames(), 4);
    assert_eq!(clock.slept.get(), Duration::from_millis(44));
    Ok(())
}

#[test]
fn slow_frames_do_not_sleep() -> Result<()> {
    let mut game = game(10, 10)?;
    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(16));
    let mut input = ScriptedInput::default();
    input.push_idle(5);
    let mut presenter = presenter_on(&clock, Duration::from_millis(20));

    engine.run(&mut game, &mut input, &mut presenter)?;

    assert_eq!(clock.slept.get(), Duration::ZERO);
    Ok(())
}

#[test]
fn reports_throughput_once_per_second() -> Result<()> {
    let mut game = game(10, 10)?;
    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(10));
    let mut input = ScriptedInput::default();
    input.push_idle(150);
    let mut presenter = RecordingPresenter::default();

    engine.run(&mut game, &mut input, &mut presenter)?;

    // Frame 100 ends at exactly 1000ms, counting frames 0..=100
    assert_eq!(presenter.stats(), vec![(0, 101)]);
    assert_eq!(engine.total_frames(), 151);
    Ok(())
}

#[test]
fn events_reach_the_presenter_before_the_render() -> Result<()> {
    let mut game = game(10, 10)?;
    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(16));
    let mut input = ScriptedInput::default();
    input.push_frame(vec![InputEvent::KeyDown(Key::Other)], &[Key::Left]);
    let mut presenter = RecordingPresenter::default();

    engine.run(&mut game, &mut input, &mut presenter)?;

    assert_eq!(
        presenter.calls[0],
        Call::Event(GameEvent::StatusChanged {
            from: GameStatus::StartScreen,
            to: GameStatus::Playing,
        })
    );
    assert_eq!(presenter.calls[1], Call::Event(GameEvent::SnakeTurned { direction: Direction::Left }));
    assert!(matches!(presenter.calls[2], Call::Render { status: GameStatus::Playing, .. }));
    Ok(())
}

#[test]
fn food_eaten_is_delivered_in_the_frame_it_happens() -> Result<()> {
    let mut game = game(10, 10)?;
    game.status = GameStatus::Playing;
    game.arena.snake.speed = 1.0;
    let head = game.snake().head();
    game.arena.food = Position::new(head.x, head.y - 1);

    let clock = ManualClock::default();
    // 20ms frames at speed 1.0 accumulate 1.2 cells: one step per frame
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(20));
    let mut input = ScriptedInput::default();
    input.push_idle(1);
    let mut presenter = RecordingPresenter::default();

    engine.run_frame(&mut game, &mut input, &mut presenter)?;

    let eaten = presenter
        .calls
        .iter()
        .position(|c| matches!(c, Call::Event(GameEvent::FoodEaten { .. })))
        .expect("food eaten event");
    let render = presenter
        .calls
        .iter()
        .position(|c| matches!(c, Call::Render { .. }))
        .expect("render");
    assert!(eaten < render);
    assert_eq!(presenter.renders(), 1);
    assert!(matches!(presenter.calls[render], Call::Render { score: 1, .. }));
    Ok(())
}

#[test]
fn pause_freezes_the_snake_and_escape_quits() -> Result<()> {
    let mut game = game(20, 20)?;
    game.status = GameStatus::Playing;
    game.arena.food = Position::new(0, 0);
    let head = game.snake().head();

    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(16));
    let mut input = ScriptedInput::default();
    input
        .push_frame(vec![InputEvent::KeyDown(Key::Space)], &[])
        .push_idle(60)
        .push_frame(vec![InputEvent::KeyDown(Key::Escape)], &[]);
    let mut presenter = RecordingPresenter::default();

    let summary = engine.run(&mut game, &mut input, &mut presenter)?;

    assert_eq!(game.status, GameStatus::Paused);
    assert_eq!(game.snake().head(), head);
    assert_eq!(summary.frames, 62);
    Ok(())
}

#[test]
fn rapid_turns_are_debounced() -> Result<()> {
    let mut game = game(20, 20)?;
    game.status = GameStatus::Playing;

    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(10));
    let mut input = ScriptedInput::default();
    input.push_frame(Vec::new(), &[Key::Left]).push_frame(Vec::new(), &[Key::Down]);
    for _ in 0..10 {
        input.push_frame(Vec::new(), &[]);
    }
    input.push_frame(Vec::new(), &[Key::Down]);
    let mut presenter = RecordingPresenter::default();

    engine.run(&mut game, &mut input, &mut presenter)?;

    let turns: Vec<GameEvent> = presenter
        .events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::SnakeTurned { .. }))
        .collect();
    assert_eq!(
        turns,
        vec![
            GameEvent::SnakeTurned { direction: Direction::Left },
            GameEvent::SnakeTurned { direction: Direction::Down },
        ]
    );
    Ok(())
}

#[test]
fn crash_fires_one_death_and_restart_resumes() -> Result<()> {
    let mut game = game(6, 6)?;
    game.status = GameStatus::Playing;
    game.arena.snake.speed = 1.0;
    game.arena.food = Position::new(0, 5);

    let clock = ManualClock::default();
    let mut engine = GameEngine::new(clock.clone(), Duration::from_millis(20));
    let mut input = ScriptedInput::default();
    input
        .push_idle(10)
        .push_frame(vec![InputEvent::KeyDown(Key::Char('r'))], &[])
        .push_frame(vec![InputEvent::KeyDown(Key::Space)], &[]);
    let mut presenter = RecordingPresenter::default();

    engine.run(&mut game, &mut input, &mut presenter)?;

    let events = presenter.events();
    assert_eq!(events.iter().filter(|e| **e == GameEvent::SnakeDied).count(), 1);
    assert!(events.contains(&GameEvent::GameRestarted));
    assert_eq!(game.status, GameStatus::Paused);
    assert_eq!(game.score, 0);
    assert_eq!(game.size(), 1);
    Ok(())
}
