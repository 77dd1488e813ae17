use atomview::{AtomModel, Element};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Headless driver: builds an atom for an element symbol, steps the orbital
/// animation for a number of frames, then shows the flattened arrangement.
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "C".to_string());
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    let Some(element) = Element::by_symbol(&symbol) else {
        eprintln!("unknown element symbol: {symbol}");
        std::process::exit(1);
    };

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut atom = match AtomModel::from_element_with_rng(&element, None, None, &mut rng) {
        Ok(atom) => atom,
        Err(err) => {
            eprintln!("failed to build {}: {err}", element.name());
            std::process::exit(1);
        }
    };

    println!(
        "{} ({}): {} nucleons (radius {:.3}), {} electrons",
        element.name(),
        element.symbol(),
        atom.nucleons().len(),
        atom.nucleus_radius(),
        atom.electrons().len(),
    );

    for frame in 0..frames {
        atom.update(frame as f32 / 60.0);
    }
    if let Some(electron) = atom.electrons().first() {
        let p = electron.position;
        println!(
            "electron 0 after {frames} frames: ({:.3}, {:.3}, {:.3})",
            p.x, p.y, p.z
        );
    }

    atom.arrange_electrons_2d();
    println!("flattened arrangement:");
    for electron in atom.electrons() {
        println!(
            "  shell {} r={:.2} at ({:+.2}, {:+.2})",
            electron.shell, electron.orbit_radius, electron.position.x, electron.position.y
        );
    }
}
