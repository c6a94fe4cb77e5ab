// Example: a 1,000-row list rendered through a pool of six labels.
use loopscroll::{LoopOptions, LoopScroll, Size, Spacing, Vec2};

#[derive(Debug, Default)]
struct Label {
    text: String,
}

fn main() -> Result<(), loopscroll::LoopError> {
    let opts = LoopOptions::new(Size::new(550.0, 300.0), Size::new(100.0, 280.0))
        .with_spacing(Spacing::new(10.0, 0.0))
        .with_center(true);

    let mut v = LoopScroll::new(opts, |_slot: usize, _name: &str| Label::default())?;
    v.set_content(
        1_000,
        |index: usize, label: &mut Label| label.text = format!("row {index}"),
        None,
    )?;
    println!("layout={:?}", v.layout());

    // Simulate a drag toward later rows, then back past the start of the list.
    for delta in [40.0, 75.0, 230.0, -500.0] {
        let recycled = v.on_move(Vec2::main(delta));
        let rows: Vec<&str> = v.nodes().map(|n| n.content().text.as_str()).collect();
        println!(
            "delta={delta} recycled={recycled} state={:?} rows={rows:?}",
            v.state()
        );
    }
    Ok(())
}
