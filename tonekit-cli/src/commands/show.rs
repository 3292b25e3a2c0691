use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use tonekit::{Argb, ColorRole, Mode};

use super::LoadedTheme;
use crate::output;

fn swatch(color: Argb) -> Cell {
    Cell::new("      ").bg(Color::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    })
}

pub fn role_table(loaded: &LoadedTheme, mode: Mode) -> Table {
    let scheme = loaded.theme.scheme(mode);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Role", "Property", "Palette", "Tone", "Hex", ""]);

    for role in ColorRole::ALL {
        let (palette, tone) = role.source(mode);
        let color = scheme.get(role);
        table.add_row(vec![
            Cell::new(role.name()),
            Cell::new(format!("{}-{}", loaded.prefixes.scheme, role.kebab_name())),
            Cell::new(palette.name()),
            Cell::new(tone),
            Cell::new(color.to_hex()),
            swatch(color),
        ]);
    }
    table
}

pub fn execute(loaded: &LoadedTheme, mode: Mode) {
    output::status("Scheme", format!("{mode} from source {}", loaded.theme.source));
    println!("{}", role_table(loaded, mode));

    for group in &loaded.theme.custom_colors {
        let roles = group.get(mode);
        output::status(
            "Custom",
            format!(
                "{} {} (on {}, container {}, on container {})",
                group.color.name,
                roles.color,
                roles.on_color,
                roles.color_container,
                roles.on_color_container
            ),
        );
    }
}
