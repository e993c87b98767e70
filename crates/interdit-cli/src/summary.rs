use std::path::Path;

use console::Style;
use interdit_core::consts::SAMPLE_BYTES;
use interdit_core::slice::Orientation;
use interdit_core::volume::Volume;

struct Styles {
    header: Style,
    label: Style,
    value: Style,
    plane: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            plane: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_volume_summary(path: &Path, volume: &Volume) {
    let s = Styles::new();
    let (nx, ny, nz) = volume.dims();
    let (min, max) = volume.value_range();
    let total_mb = (volume.len() * SAMPLE_BYTES) as f64 / (1024.0 * 1024.0);

    println!();
    println!("  {}", s.path.apply_to(path.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{nx} x {ny} x {nz}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Value range"),
        s.value.apply_to(format!("{min} .. {max}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Data size"),
        s.value.apply_to(format!("{total_mb:.1} MB"))
    );
    println!();

    println!("  {}", s.header.apply_to("Planes"));
    for &orientation in Orientation::ALL {
        let (w, h) = orientation.plane_size(volume);
        println!(
            "    {:<12}{}",
            s.plane.apply_to(orientation),
            s.value
                .apply_to(format!("{} slices of {w} x {h}", orientation.depth(volume)))
        );
    }
}
