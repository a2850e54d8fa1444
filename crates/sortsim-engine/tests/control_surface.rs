//! End-to-end behavior of the `Visualizer` control surface.

use std::time::Duration;

use sortsim_algorithms::AlgorithmKind;
use sortsim_engine::{
    SchedulerError, SessionStatus, TickOutcome, Visualizer, VisualizerConfig, GENERATED_TITLE,
};
use sortsim_test_utils::{is_permutation, RecordingRenderer};

fn visualizer(seed: u64) -> Visualizer<RecordingRenderer> {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("sortsim_engine=debug")
        .try_init();
    Visualizer::new(VisualizerConfig::default().with_seed(seed), RecordingRenderer::new()).unwrap()
}

fn run_to_end(vis: &mut Visualizer<RecordingRenderer>) -> u64 {
    loop {
        match vis.tick().unwrap() {
            TickOutcome::Stepped { .. } => {}
            TickOutcome::Completed { steps } => return steps,
            TickOutcome::Idle => panic!("session stopped before completing"),
        }
    }
}

#[test]
fn every_algorithm_sorts_and_draws_a_final_frame() {
    for kind in AlgorithmKind::ALL {
        let mut vis = visualizer(3);
        vis.generate(64, -50, 50).unwrap();
        let original = vis.array().snapshot();

        vis.start(kind, 1).unwrap();
        let steps = run_to_end(&mut vis);

        assert!(vis.array().is_sorted(), "{kind}");
        assert!(is_permutation(&original, vis.array().as_slice()));
        assert_eq!(vis.status(), Some(SessionStatus::Completed));
        assert_eq!(vis.metrics().unwrap().steps, steps);

        let frames = &vis.renderer().frames;
        let last = frames.last().unwrap();
        assert!(last.is_final);
        assert_eq!(last.title, kind.name());
        assert!(last.highlights.is_empty());
        assert_eq!(vis.renderer().final_count(), 1);
    }
}

#[test]
fn step_frames_are_titled_with_algorithm_and_step() {
    let mut vis = visualizer(5);
    vis.renderer_mut().clear();
    vis.start(AlgorithmKind::Bubble, 10).unwrap();
    vis.tick().unwrap();
    vis.tick().unwrap();

    let titles: Vec<_> = vis.renderer().frames.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, ["Bubble Sort (step 1)", "Bubble Sort (step 2)"]);
}

#[test]
fn generate_draws_the_new_array() {
    let mut vis = visualizer(8);
    vis.generate(5, 1, 3).unwrap();
    let last = vis.renderer().last().unwrap();
    assert_eq!(last.title, GENERATED_TITLE);
    assert_eq!(last.snapshot, vis.array().as_slice());
    assert_eq!(last.snapshot.len(), 5);
}

#[test]
fn stop_when_idle_is_a_noop() {
    let mut vis = visualizer(1);
    let before = vis.array().snapshot();
    let frames = vis.renderer().frames.len();
    assert!(!vis.stop());
    assert!(!vis.stop());
    assert_eq!(vis.array().as_slice(), before.as_slice());
    assert_eq!(vis.renderer().frames.len(), frames);
}

#[test]
fn stop_mid_sort_leaves_a_permutation_and_idles() {
    let mut vis = visualizer(11);
    let original = vis.array().snapshot();
    vis.start(AlgorithmKind::Insertion, 5).unwrap();
    for _ in 0..4 {
        vis.tick().unwrap();
    }
    assert!(vis.stop());
    assert!(!vis.is_running());
    assert!(is_permutation(&original, vis.array().as_slice()));

    let frozen = vis.array().snapshot();
    assert_eq!(vis.tick().unwrap(), TickOutcome::Idle);
    assert_eq!(vis.array().as_slice(), frozen.as_slice());
}

#[test]
fn generate_while_running_stops_the_sort_and_stale_ticks_are_ignored() {
    let mut vis = visualizer(21);
    let old = vis.start(AlgorithmKind::Quick, 5).unwrap();
    vis.tick_session(old).unwrap();

    vis.generate(30, 1, 99).unwrap();
    assert!(!vis.is_running());
    assert!(vis.status().is_none());
    let fresh = vis.array().snapshot();

    // A timer armed for the old session fires late.
    assert_eq!(vis.tick_session(old).unwrap(), TickOutcome::Idle);
    assert_eq!(vis.array().as_slice(), fresh.as_slice());

    let new = vis.start(AlgorithmKind::Quick, 5).unwrap();
    assert_ne!(new, old);
    assert_eq!(vis.tick_session(old).unwrap(), TickOutcome::Idle);
    assert!(matches!(
        vis.tick_session(new).unwrap(),
        TickOutcome::Stepped { .. } | TickOutcome::Completed { .. }
    ));
}

#[test]
fn start_while_running_is_rejected_without_side_effects() {
    let mut vis = visualizer(2);
    let id = vis.start(AlgorithmKind::Merge, 5).unwrap();
    vis.tick().unwrap();
    let snapshot = vis.array().snapshot();

    assert_eq!(
        vis.start(AlgorithmKind::Bubble, 5),
        Err(SchedulerError::AlreadyRunning)
    );
    assert!(vis.is_running());
    assert_eq!(vis.session_id(), Some(id));
    assert_eq!(vis.array().as_slice(), snapshot.as_slice());
}

#[test]
fn out_of_range_requests_are_rejected() {
    let mut vis = visualizer(4);
    let before = vis.array().snapshot();

    for delay_ms in [0, 1001] {
        assert!(matches!(
            vis.start(AlgorithmKind::Heap, delay_ms),
            Err(SchedulerError::InvalidConfiguration(_))
        ));
    }
    assert!(matches!(
        vis.generate(10_001, 1, 99),
        Err(SchedulerError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        vis.generate(10, 9, 1),
        Err(SchedulerError::InvalidConfiguration(_))
    ));
    assert_eq!(vis.array().as_slice(), before.as_slice());
    assert!(!vis.is_running());
}

#[test]
fn delay_is_handed_back_to_the_host() {
    let mut vis = visualizer(6);
    vis.start(AlgorithmKind::Bubble, 250).unwrap();
    assert_eq!(
        vis.tick().unwrap().next_tick_in(),
        Some(Duration::from_millis(250))
    );
}

#[test]
fn same_seed_same_arrays_and_frames() {
    let record = |seed| {
        let mut vis = visualizer(seed);
        vis.generate(40, 1, 99).unwrap();
        vis.start(AlgorithmKind::Heap, 1).unwrap();
        run_to_end(&mut vis);
        vis.into_renderer().frames
    };
    assert_eq!(record(99), record(99));
    assert_ne!(record(99)[0].snapshot, record(100)[0].snapshot);
}

#[test]
fn all_equal_array_completes_without_swaps() {
    let mut vis = visualizer(0);
    vis.generate(3, 2, 2).unwrap();
    for kind in AlgorithmKind::ALL {
        vis.start(kind, 1).unwrap();
        run_to_end(&mut vis);
        assert_eq!(vis.array().as_slice(), &[2, 2, 2]);
        assert_eq!(vis.metrics().unwrap().swaps, 0, "{kind}");
    }
}

#[test]
fn tiny_arrays_complete_on_first_tick() {
    let mut vis = visualizer(0);
    for size in [0, 1] {
        vis.generate(size, 1, 99).unwrap();
        vis.start(AlgorithmKind::Quick, 1).unwrap();
        assert_eq!(vis.tick().unwrap(), TickOutcome::Completed { steps: 0 });
        assert_eq!(vis.renderer().last().unwrap().snapshot.len(), size);
    }
}
