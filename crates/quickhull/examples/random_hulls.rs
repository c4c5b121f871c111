//! Print hull sizes and areas for a few random clouds.
//!
//! Usage:
//!   cargo run -p quickhull --example random_hulls -- disk
//!   cargo run -p quickhull --example random_hulls -- square

use quickhull::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let shape = match mode.as_str() {
        "disk" => CloudShape::Disk { radius: 1.0 },
        "square" => CloudShape::Square { half_width: 1.0 },
        _ => {
            eprintln!("usage: random_hulls [disk|square]");
            return;
        }
    };
    for (i, &count) in [10usize, 100, 1_000, 10_000].iter().enumerate() {
        let cfg = CloudCfg {
            count,
            shape,
            grid: None,
        };
        let pts = draw_cloud(cfg, ReplayToken::new(2025, i as u64));
        match HullResult::construct_from_source(pts) {
            Ok(r) => println!(
                "{mode} sample {i}: n={count}, hull={}, area={:.6}",
                r.hull().len(),
                r.area()
            ),
            Err(e) => eprintln!("{mode} sample {i}: {e}"),
        }
    }
}
