use loopscroll::{LoopOptions, LoopScroll, Size, Spacing, Vec2};
use loopscroll_adapter::Controller;

fn main() -> Result<(), loopscroll::LoopError> {
    // Example: a controller driving animated jumps and a fling without holding any UI objects.
    //
    // An adapter would:
    // - forward drag/wheel events to on_begin_drag/on_drag/on_end_drag/on_scroll
    // - start jumps in response to commands
    // - call tick(dt) once per frame
    // - copy node positions and contents into its own widgets
    let opts = LoopOptions::new(Size::new(550.0, 300.0), Size::new(100.0, 280.0))
        .with_spacing(Spacing::new(10.0, 0.0))
        .with_settle_on_release(true);
    let mut view = LoopScroll::new(opts, |_slot: usize, _name: &str| String::new())?;
    view.set_content(
        10_000,
        |index: usize, text: &mut String| *text = format!("row {index}"),
        None,
    )?;
    let mut c = Controller::new(view);

    let dt = 1.0 / 60.0;
    c.jump_index(2_000);
    let mut frames = 0;
    while c.tick(dt).is_some() {
        frames += 1;
    }
    println!(
        "jump: frames={frames} state={:?} head={:?}",
        c.view().state(),
        c.view().head().map(|n| n.content())
    );

    // A short drag upward, released quickly: coasts, then settles on a slot boundary.
    c.on_begin_drag(Vec2::ZERO, 10.0);
    for _ in 0..5 {
        c.on_drag(Vec2::main(24.0));
    }
    c.on_end_drag(Vec2::main(120.0), 10.1);
    while let Some(delta) = c.tick(dt) {
        println!("tick delta={delta:.2} move_delta={:.2}", c.view().move_delta());
    }

    c.reset();
    while c.tick(dt).is_some() {}
    println!("after reset: state={:?}", c.view().state());
    Ok(())
}
