use super::ui;
use crate::core::profiles::Profile;
use comfy_table::{Cell, CellAlignment, Color};

pub fn display_profiles() -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Key"),
        ui::header_cell("Analysis Type"),
        ui::header_cell("Input"),
        ui::header_cell("Description"),
        ui::header_cell("Example"),
    ]);

    for profile in Profile::ALL {
        let fields = profile.input_fields();
        if fields.is_empty() {
            table.add_row(vec![
                Cell::new(profile.key()),
                Cell::new(profile.display_name()),
                ui::na_cell(),
                Cell::new("Dataset only").fg(Color::DarkGrey),
                Cell::new(""),
            ]);
            continue;
        }
        for (i, field) in fields.iter().enumerate() {
            let (key, name) = if i == 0 {
                (profile.key(), profile.display_name())
            } else {
                ("", "")
            };
            table.add_row(vec![
                Cell::new(key),
                Cell::new(name),
                Cell::new(field.key),
                Cell::new(field.label),
                Cell::new(ui::format_number(field.example)).set_alignment(CellAlignment::Right),
            ]);
        }
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Analysis Types", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str("\n\n");
    output.push_str(&ui::style_text(
        "Pass inputs with --input key=value or --inputs-file <yaml>.",
        ui::StyleType::Subtle,
    ));
    output
}

pub fn run() {
    println!("{}", display_profiles());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_profile_and_input() {
        let output = display_profiles();

        for profile in Profile::ALL {
            assert!(output.contains(profile.key()));
            for field in profile.input_fields() {
                assert!(output.contains(field.key), "missing {}", field.key);
            }
        }
    }
}
