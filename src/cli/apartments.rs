//! Apartments subcommand: the resident registry menu session.

use super::menu::Menu;
use super::prompt::Prompter;
use crate::apartments::{Apartment, Building, Resident};
use crate::error::{CliResult, RecordError};
use crate::output;
use std::io::{BufRead, Write};

const MENU: Menu<'static> = Menu {
    title: "Apartment registry",
    items: &[
        ("1", "Add apartment"),
        ("2", "Delete apartment"),
        ("3", "Add resident"),
        ("4", "Evict resident"),
        ("5", "Show apartments"),
        ("6", "Show residents"),
        ("7", "Exit"),
    ],
    exit_key: "7",
};

/// Run the registry session until the user exits.
pub fn run<R: BufRead, W: Write>(house: &mut Building, p: &mut Prompter<R, W>) -> CliResult<()> {
    MENU.run(p, |choice, p| match choice {
        "1" => add_apartment(house, p),
        "2" => delete_apartment(house, p),
        "3" => add_resident(house, p),
        "4" => evict_resident(house, p),
        "5" => show_apartments(house, p),
        "6" => show_residents(house, p),
        _ => Ok(()),
    })
}

fn ask_existing<R: BufRead, W: Write>(house: &Building, p: &mut Prompter<R, W>) -> CliResult<u32> {
    let num = p.ask_count("Apartment number: ", "Apartment number")?;
    if !house.contains(num) {
        return Err(RecordError::not_found("apartment", num).into());
    }
    Ok(num)
}

fn add_apartment<R: BufRead, W: Write>(house: &mut Building, p: &mut Prompter<R, W>) -> CliResult<()> {
    let num = p.ask_count("Apartment number: ", "Apartment number")?;
    let lvl = p.ask_count("Floor: ", "Floor")?;
    let category = p.ask("Apartment type: ")?;

    if let Some(old) = house.register_apartment(Apartment::new(num, lvl, category.trim()))? {
        output::write_warning(
            p.out(),
            &format!(
                "Apartment №{} replaced; {} resident(s) removed.",
                num,
                old.occupants.len()
            ),
        )?;
    }
    output::write_success(p.out(), &format!("Apartment №{} added.", num))?;
    Ok(())
}

fn delete_apartment<R: BufRead, W: Write>(
    house: &mut Building,
    p: &mut Prompter<R, W>,
) -> CliResult<()> {
    let num = p.ask_count("Apartment number to delete: ", "Apartment number")?;
    match house.demolish_apartment(num)? {
        Some(_) => output::write_success(p.out(), &format!("Apartment №{} deleted.", num))?,
        None => return Err(RecordError::not_found("apartment", num).into()),
    }
    Ok(())
}

fn add_resident<R: BufRead, W: Write>(house: &mut Building, p: &mut Prompter<R, W>) -> CliResult<()> {
    let num = ask_existing(house, p)?;
    let name = p.ask("Resident name: ")?;
    let age = p.ask_count("Age: ", "Age")?;

    let name = name.trim();
    house.settle_resident(num, Resident::new(name, age))?;
    output::write_success(
        p.out(),
        &format!("Resident {}, {} years old, added to apartment №{}.", name, age, num),
    )?;
    Ok(())
}

fn evict_resident<R: BufRead, W: Write>(
    house: &mut Building,
    p: &mut Prompter<R, W>,
) -> CliResult<()> {
    let num = ask_existing(house, p)?;
    let name = p.ask("Name of resident to evict: ")?;

    let evicted = house.evict_resident(num, &name)?;
    if evicted.is_empty() {
        return Err(RecordError::not_found("resident", name.trim()).into());
    }
    output::write_success(
        p.out(),
        &format!("Resident {} evicted from apartment №{}.", name.trim(), num),
    )?;
    Ok(())
}

fn show_apartments<R: BufRead, W: Write>(house: &Building, p: &mut Prompter<R, W>) -> CliResult<()> {
    output::write_heading(p.out(), "Apartments")?;
    let out = p.out();
    for apt in house.show_apartments() {
        writeln!(
            out,
            "Apartment №{} (floor {}, type: {})",
            apt.num, apt.lvl, apt.category
        )?;
        if !apt.occupants.is_empty() {
            writeln!(out, "  Residents:")?;
            for r in &apt.occupants {
                writeln!(out, "    - {}, age {}", r.full_name, r.years_old)?;
            }
        }
    }
    Ok(())
}

fn show_residents<R: BufRead, W: Write>(house: &Building, p: &mut Prompter<R, W>) -> CliResult<()> {
    output::write_heading(p.out(), "Residents")?;
    let out = p.out();
    for r in house.show_residents() {
        writeln!(out, "{}, age {}", r.full_name, r.years_old)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session(house: &mut Building, input: &str) -> String {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(house, &mut p).unwrap();
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_register_settle_and_list() {
        let dir = tempdir().unwrap();
        let mut house = Building::new(JsonStore::open(dir.path().join("house_data.json")).unwrap());

        let out = session(
            &mut house,
            "1\n-5\n5\n2\nstudio\n3\n5\nIvanov\nforty\n40\n5\n6\n7\n",
        );

        assert!(out.contains("Apartment number cannot be negative"));
        assert!(out.contains("Age must be a whole number"));
        assert!(out.contains("Apartment №5 (floor 2, type: studio)"));
        assert!(out.contains("    - Ivanov, age 40"));
        assert_eq!(house.show_residents().len(), 1);
    }

    #[test]
    fn test_resident_for_missing_apartment() {
        let dir = tempdir().unwrap();
        let mut house = Building::new(JsonStore::open(dir.path().join("house_data.json")).unwrap());

        let out = session(&mut house, "3\n9\n7\n");
        assert!(out.contains("apartment '9' not found"));
    }

    #[test]
    fn test_evict_unknown_resident() {
        let dir = tempdir().unwrap();
        let mut house = Building::new(JsonStore::open(dir.path().join("house_data.json")).unwrap());

        let out = session(&mut house, "1\n1\n1\nloft\n4\n1\nNobody\n7\n");
        assert!(out.contains("resident 'Nobody' not found"));
    }
}
