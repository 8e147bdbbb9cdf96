use resistor_toolkit::colors::{band_diagram, color_code, BandStyle};
use resistor_toolkit::{Resistor, Schematic, Toolkit};

fn main() -> resistor_toolkit::Result<()> {
    let inventory = [
        2200.0, 4700.0, 10_000.0, 22_000.0, 47_000.0, 100_000.0, 220_000.0, 470_000.0,
        1_000_000.0,
    ];
    let mut kit = Toolkit::new(&inventory)?;
    kit.brute_force(3, 0.0);

    println!("{}", kit.inventory(4));

    println!("====== Closest builds to 150KΩ ======");
    for r in kit.closest(150_000.0, 10, 0.1, 3)? {
        println!("{} = {}", r, r.algebraic());
    }

    println!("\n====== Least-covered gap among 2-part builds ======");
    let (below, mid, above) = kit.biggest_gap(2)?;
    println!("between {} and {}; worth stocking {}", below, above, mid);

    println!("\n====== Schematic of (100Ω + 10Ω) | 100Ω ======");
    let a = Resistor::new(100.0)?;
    let b = Resistor::new(10.0)?;
    let net = a.series(&b).parallel(&a);
    println!("{}", Schematic::new(&net).with_equivalent());

    println!("\n====== Color code for 4.7KΩ ±1% ======");
    let code = color_code(&Resistor::new(4700.0)?, 4)?;
    println!("{}", band_diagram(&code, BandStyle::Letters)?);

    Ok(())
}
