use crate::*;

use loopscroll::{LoopOptions, LoopScroll, Size, Spacing, Vec2};

const FRAME: f64 = 1.0 / 64.0;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// A frame time between 1ms and ~50ms.
    fn gen_dt(&mut self) -> f64 {
        0.001 + (self.next_u64() % 1000) as f64 * 0.000049
    }
}

/// viewport 550, template 100, gap 10: six nodes, unit_delta 110.
fn options() -> LoopOptions {
    LoopOptions::new(Size::new(550.0, 300.0), Size::new(100.0, 200.0))
        .with_spacing(Spacing::new(10.0, 0.0))
        .with_move_time(0.25)
        .with_coast_time(0.25)
}

fn controller(opts: LoopOptions, count: usize) -> Controller<String> {
    let mut view = LoopScroll::new(opts, |_slot: usize, _name: &str| String::new()).unwrap();
    view.set_content(
        count,
        |index: usize, text: &mut String| *text = format!("item {index}"),
        None,
    )
    .unwrap();
    Controller::new(view)
}

fn run_to_end(c: &mut Controller<String>, dt: f64) -> Vec<f64> {
    let mut deltas = Vec::new();
    while let Some(delta) = c.tick(dt) {
        deltas.push(delta);
        assert!(deltas.len() < 10_000, "motion never finished");
    }
    deltas
}

#[test]
fn move_tween_contributions_sum_to_distance_under_jitter() {
    let mut rng = Lcg::new(7);
    for distance in [1234.567, -98.765, 0.1, 5_000_000.25] {
        let mut tween = MoveTween::new(distance, 0.2);
        let mut sum = 0.0;
        let mut frames = 0;
        while let Some(delta) = tween.step(rng.gen_dt()) {
            sum += delta;
            frames += 1;
        }
        assert!(tween.is_done());
        assert!(frames >= 4, "0.2s can't finish in {frames} frames of <= 50ms");
        assert!(
            (sum - distance).abs() <= distance.abs() * 1e-12,
            "sum {sum} != distance {distance}"
        );
    }
}

#[test]
fn move_tween_with_uniform_frames_is_exact() {
    let mut tween = MoveTween::new(330.0, 0.25);
    let mut deltas = Vec::new();
    while let Some(delta) = tween.step(FRAME) {
        deltas.push(delta);
    }
    assert_eq!(deltas.len(), 16);
    assert!(deltas.iter().all(|&d| d == 20.625));
    assert_eq!(deltas.iter().sum::<f64>(), 330.0);
    assert_eq!(tween.elapsed(), 0.25);
}

#[test]
fn move_tween_without_duration_finishes_in_one_frame() {
    let mut tween = MoveTween::new(42.0, 0.0);
    assert_eq!(tween.step(FRAME), Some(42.0));
    assert_eq!(tween.step(FRAME), None);

    let mut tween = MoveTween::new(-7.0, f64::NAN);
    assert_eq!(tween.step(0.0), Some(-7.0));
    assert!(tween.is_done());
}

#[test]
fn coast_tween_emits_speed_until_duration_passes() {
    let mut tween = CoastTween::new(12.0, 0.25);
    let mut deltas = Vec::new();
    while let Some(delta) = tween.step(1.0 / 16.0) {
        deltas.push(delta);
    }
    // Frames start at 0, 1/16, 2/16, 3/16 and 4/16 seconds.
    assert_eq!(deltas, [12.0; 5]);
    assert!(tween.is_done());
}

#[test]
fn motion_slot_start_replaces_and_invalidates_previous_motion() {
    let mut slot = MotionSlot::new();
    let first = slot.start(MoveTween::new(100.0, 1.0));
    assert!(slot.is_current(first));

    let second = slot.start(CoastTween::new(3.0, 1.0));
    assert!(!slot.is_current(first));
    assert!(slot.is_current(second));
    assert_eq!(slot.current().map(Motion::kind), Some(MotionKind::Coast));

    assert!(slot.cancel().is_some());
    assert!(!slot.is_current(second));
    assert!(!slot.is_active());
    assert_eq!(slot.step(FRAME), None);
    assert!(slot.cancel().is_none());
}

#[test]
fn motion_slot_reports_the_final_frame() {
    let mut slot = MotionSlot::new();
    slot.start(MoveTween::new(10.0, 0.0));
    assert_eq!(
        slot.step(FRAME),
        Some(MotionFrame {
            delta: 10.0,
            kind: MotionKind::Move,
            finished: true,
        })
    );
    assert!(!slot.is_active());
}

#[test]
fn drag_tracker_estimates_release_speed_from_two_samples() {
    let mut drag = DragTracker::default();
    assert_eq!(drag.release_speed(), None);

    drag.begin(DragSample::new(1.0, Vec2::ZERO));
    assert_eq!(drag.release_speed(), None);

    drag.end(DragSample::new(1.5, Vec2::new(200.0, 30.0)));
    assert_eq!(drag.release_speed(), Some(400.0));
    assert_eq!(drag.fling_speed(0.25), Some(100.0));

    // A new drag forgets the previous release.
    drag.begin(DragSample::new(2.0, Vec2::ZERO));
    assert_eq!(drag.end_sample(), None);

    drag.end(DragSample::new(2.0, Vec2::main(50.0)));
    assert_eq!(drag.release_speed(), None);
}

#[test]
fn jump_index_brings_item_to_the_head() {
    let mut c = controller(options(), 10);
    let token = c.jump_index(3);
    assert!(c.is_current(token));

    let deltas = run_to_end(&mut c, FRAME);

    assert_eq!(deltas.len(), 16);
    assert_eq!(deltas.iter().sum::<f64>(), 330.0);
    assert!(!c.is_current(token));
    assert!(!c.is_animating());

    let view = c.view();
    assert_eq!(view.move_delta(), 330.0);
    assert_eq!(view.cur_index(), 3);
    let head = view.head().unwrap();
    assert_eq!(head.index(), 3);
    assert_eq!(head.content(), "item 3");
    assert_eq!(head.position().main, 0.0);
}

#[test]
fn jump_index_backward_reduces_move_delta() {
    let mut c = controller(options(), 10);
    c.jump_index(3);
    run_to_end(&mut c, FRAME);

    c.jump_index(1);
    run_to_end(&mut c, FRAME);

    let view = c.view();
    assert_eq!(view.move_delta(), 110.0);
    // Backward moves recycle the tail once it reaches the lower limit. The last frame puts the
    // tail exactly on it, so one node beyond item 1 is brought in above it.
    assert_eq!(view.cur_index(), 0);
    assert_eq!(view.visible_indices(), [0, 1, 2, 3, 4, 5]);
    let mains: Vec<f64> = view.nodes().map(|node| node.position().main).collect();
    assert_eq!(mains, [110.0, 0.0, -110.0, -220.0, -330.0, -440.0]);
}

#[test]
fn jump_index_under_jitter_lands_on_the_item() {
    let mut c = controller(options(), 1_000);
    let mut rng = Lcg::new(99);
    c.jump_index(250);
    while c.tick(rng.gen_dt()).is_some() {}

    let view = c.view();
    assert_eq!(view.move_delta(), 250.0 * 110.0);
    assert_eq!(view.cur_index(), 250);
    let head = view.head().unwrap();
    assert_eq!(head.index(), 250);
    assert_eq!(head.content(), "item 250");
    assert!(head.position().main.abs() < 1e-6);
}

#[test]
fn reset_returns_move_delta_to_exactly_zero() {
    let mut c = controller(options(), 10);
    c.on_drag(Vec2::main(120.0));
    c.on_drag(Vec2::main(250.0));
    c.on_drag(Vec2::main(-45.5));
    assert_eq!(c.view().move_delta(), 324.5);

    c.reset();
    let deltas = run_to_end(&mut c, FRAME);

    assert_eq!(deltas.iter().sum::<f64>(), -324.5);
    assert_eq!(c.view().move_delta(), 0.0);
}

#[test]
fn reset_under_jittered_frames_lands_exactly_on_zero() {
    for seed in 0..200 {
        let mut rng = Lcg::new(seed);
        let mut c = controller(options(), 10);
        for _ in 0..5 {
            let delta = (rng.next_u64() % 4000) as f64 * 0.137 - 274.0;
            c.on_drag(Vec2::main(delta));
        }

        c.reset();
        while c.tick(rng.gen_dt()).is_some() {}
        assert_eq!(c.view().move_delta(), 0.0, "seed {seed}");
        assert_eq!(c.view().reset_distance(), 0.0);

        // A second reset has nowhere to go.
        c.reset();
        let travelled: f64 = run_to_end(&mut c, FRAME).iter().sum();
        assert_eq!(travelled, 0.0, "seed {seed}");
        assert_eq!(c.view().move_delta(), 0.0);
    }
}

#[test]
fn jump_after_jittered_moves_lands_exactly_on_the_item() {
    let mut rng = Lcg::new(45);
    let mut c = controller(options(), 10);
    c.jump_delta(123.456);
    while c.tick(rng.gen_dt()).is_some() {}
    assert_eq!(c.view().move_delta(), 123.456);

    c.jump_index(7);
    while c.tick(rng.gen_dt()).is_some() {}
    assert_eq!(c.view().move_delta(), 770.0);

    c.settle();
    assert_eq!(run_to_end(&mut c, FRAME).iter().sum::<f64>(), 0.0);
}

#[test]
fn drag_cancels_a_running_motion() {
    let mut c = controller(options(), 10);
    c.jump_index(5);
    assert!(c.tick(FRAME).is_some());
    assert!(c.is_animating());

    c.on_drag(Vec2::main(10.0));

    assert!(!c.is_animating());
    assert_eq!(c.tick(FRAME), None);
}

#[test]
fn new_motion_preempts_the_running_one() {
    let mut c = controller(options(), 10);
    let first = c.jump_delta(200.0);
    for _ in 0..4 {
        assert_eq!(c.tick(FRAME), Some(12.5));
    }

    let second = c.jump_delta(-30.0);
    assert!(!c.is_current(first));
    assert!(c.is_current(second));
    run_to_end(&mut c, FRAME);

    // The first jump stopped after 50 of its 200.
    assert_eq!(c.view().move_delta(), 20.0);
}

#[test]
fn scroll_is_scaled_by_clamped_sensitivity() {
    let mut c = controller(options(), 10);
    c.on_scroll(Vec2::main(3.0));
    assert_eq!(c.view().move_delta(), 30.0);

    let mut c = controller(options().with_scroll_sensitivity(-4.0), 10);
    assert_eq!(c.on_scroll(Vec2::main(-300.0)), 0);
    assert_eq!(c.view().move_delta(), 0.0);
}

#[test]
fn release_after_drag_coasts_with_scaled_speed() {
    let mut c = controller(options().with_elasticity(0.125), 10);
    c.on_begin_drag(Vec2::ZERO, 1.0);
    c.on_drag(Vec2::main(200.0));
    let token = c.on_end_drag(Vec2::main(200.0), 1.5).unwrap();
    assert!(c.is_current(token));

    let deltas = run_to_end(&mut c, 1.0 / 16.0);

    // 400/s scaled by 0.125, once per frame for five frames.
    assert_eq!(deltas, [50.0; 5]);
    assert_eq!(c.view().move_delta(), 450.0);
}

#[test]
fn settle_on_release_follows_the_coast() {
    let opts = options()
        .with_elasticity(0.125)
        .with_settle_on_release(true);
    let mut c = controller(opts, 10);
    c.on_begin_drag(Vec2::ZERO, 1.0);
    c.on_drag(Vec2::main(200.0));
    c.on_end_drag(Vec2::main(200.0), 1.5);

    let deltas = run_to_end(&mut c, 1.0 / 16.0);

    // Coast to 450, then settle on the slot boundary at 440.
    assert_eq!(deltas, [50.0, 50.0, 50.0, 50.0, 50.0, -2.5, -2.5, -2.5, -2.5]);
    assert_eq!(c.view().move_delta(), 440.0);
}

#[test]
fn release_without_movement_does_not_start_a_motion() {
    let mut c = controller(options(), 10);
    c.on_begin_drag(Vec2::ZERO, 1.0);
    assert_eq!(c.on_end_drag(Vec2::ZERO, 1.2), None);
    assert!(!c.is_animating());

    let mut c = controller(options().with_settle_on_release(true), 10);
    c.on_begin_drag(Vec2::ZERO, 1.0);
    c.on_drag(Vec2::main(70.0));
    c.on_end_drag(Vec2::main(0.0), 1.0);
    assert!(c.is_animating());
    run_to_end(&mut c, FRAME);
    assert_eq!(c.view().move_delta(), 110.0);
}

#[test]
fn set_content_cancels_motion_and_resets_the_view() {
    let mut c = controller(options(), 10);
    c.jump_index(4);
    c.tick(FRAME);

    c.set_content(30, |_: usize, _: &mut String| {}, Some("Row")).unwrap();

    assert!(!c.is_animating());
    assert_eq!(c.view().move_delta(), 0.0);
    assert_eq!(c.view().item_count(), 30);
    assert_eq!(c.view().head().unwrap().name(), "Row0");
}

#[test]
fn motion_on_a_static_list_runs_without_moving_the_view() {
    let mut c = controller(options(), 4);
    assert!(!c.view().is_scrollable());

    c.jump_delta(80.0);
    let deltas = run_to_end(&mut c, FRAME);

    assert_eq!(deltas.iter().sum::<f64>(), 80.0);
    assert_eq!(c.view().move_delta(), 0.0);
    assert_eq!(c.view().head().unwrap().position().main, 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn public_value_types_are_serde() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<MotionFrame>();
    assert_serde::<MotionToken>();
    assert_serde::<Motion>();
    assert_serde::<DragSample>();
}

#[test]
fn non_finite_frame_time_is_skipped() {
    let mut c = controller(options(), 10);
    c.jump_delta(50.0);
    assert_eq!(c.tick(f64::NAN), None);
    assert!(c.is_animating());
    assert_eq!(c.view().move_delta(), 0.0);
}
