#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with HOME pointed at a scratch dir so tests never touch the real
/// config file.
pub fn tb(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("tutorboard");
    cmd.env("HOME", home);
    cmd.env("APPDATA", home);
    cmd
}

/// Create a unique scratch directory inside the system temp dir.
pub fn scratch_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorboard", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path.to_string_lossy().to_string()
}

/// Write the three fixture sheets into `<scratch>/schedule` and return
/// (source_dir, data_dir), with the data dir created empty.
pub fn setup_sheets(scratch: &str) -> (String, String) {
    let source = PathBuf::from(scratch).join("schedule");
    let data = PathBuf::from(scratch).join("data");
    fs::create_dir_all(&source).expect("create source dir");
    fs::create_dir_all(&data).expect("create data dir");

    fs::write(source.join("print_schedule.csv"), print_schedule_csv()).expect("write grid sheet");
    fs::write(source.join("schedule.csv"), schedule_csv()).expect("write schedule sheet");
    fs::write(source.join("tutor_info.csv"), tutor_info_csv()).expect("write info sheet");

    (
        source.to_string_lossy().to_string(),
        data.to_string_lossy().to_string(),
    )
}

/// One grid row: a label cell followed by 28 slot cells, all `n` except the
/// given (column, code) overrides.
pub fn grid_row(label: &str, staffed: &[(usize, &str)]) -> String {
    let mut cells = vec!["n".to_string(); 28];
    for (col, code) in staffed {
        cells[*col] = code.to_string();
    }
    format!("{label},{}", cells.join(","))
}

/// The print schedule sheet: five 6-row weekday blocks at their fixed row
/// offsets (4, 13, 22, 31, 40), sheet row order MAE, CEE, hidden, BENG, ECE,
/// CMPE. Monday is scenario material: MAE staffs slots 2-3, so the open
/// range is [2, 4).
pub fn print_schedule_csv() -> String {
    let mut lines = vec!["Print Schedule".to_string(); 4];

    // Monday (rows 4..10)
    lines.push(grid_row("MAE", &[(2, "MA"), (3, "MA")]));
    lines.push(grid_row("CEE", &[(2, "CE")]));
    lines.push(grid_row("", &[]));
    lines.push(grid_row("BENG", &[]));
    lines.push(grid_row("ECE", &[(3, "EL")]));
    lines.push(grid_row("CMPE", &[(2, "CP"), (3, "CP")]));
    // Filler rows must not be empty lines: the CSV reader skips those.
    lines.extend(vec![",,".to_string(); 3]);

    // Tuesday (rows 13..19): open range [2, 6)
    lines.push(grid_row("MAE", &[(4, "MA"), (5, "MA")]));
    lines.push(grid_row("CEE", &[]));
    lines.push(grid_row("", &[]));
    lines.push(grid_row("BENG", &[(2, "B")]));
    lines.push(grid_row("ECE", &[]));
    lines.push(grid_row("CMPE", &[(2, "CP"), (3, "CP")]));
    lines.extend(vec![",,".to_string(); 3]);

    // Wednesday through Friday: fully closed days.
    for _ in 0..3 {
        for label in ["MAE", "CEE", "", "BENG", "ECE", "CMPE"] {
            lines.push(grid_row(label, &[]));
        }
        lines.extend(vec![",,".to_string(); 3]);
    }

    lines.join("\n")
}

/// The per-(tutor, weekday) sheet: 11 header rows, then
/// `[name, weekday, major, slot0..slot27]`.
pub fn schedule_csv() -> String {
    let mut lines = vec!["Schedule".to_string(); 11];

    lines.push(tutor_row("Jane Doe", "Monday", "CMPE", &[(2, "cp"), (3, "cp")]));
    lines.push(tutor_row("John Smith", "Monday", "MAE", &[(2, "ma"), (3, "ma")]));
    // Same tutor, different casing: must merge into the "Jane Doe" record.
    lines.push(tutor_row("jane doe", "Tuesday", "CMPE", &[(2, "cp"), (3, "cp")]));
    // Nameless rows are skipped.
    lines.push(tutor_row("", "Monday", "ECE", &[(2, "el")]));

    lines.join("\n")
}

/// One schedule-sheet row; slot cells default to `n`, blank before the first
/// override so blank-cell normalization gets exercised.
pub fn tutor_row(name: &str, weekday: &str, major: &str, staffed: &[(usize, &str)]) -> String {
    let mut cells = vec!["n".to_string(); 28];
    for (col, code) in staffed {
        cells[*col] = code.to_string();
    }
    if let Some(first) = staffed.first() {
        for cell in cells.iter_mut().take(first.0) {
            cell.clear();
        }
    }
    format!("{name},{weekday},{major},{}", cells.join(","))
}

/// The tutor info sheet: 1 header row, then name at column 0, academic class
/// at column 3, profile image at column 9. "Ghost" never appears in the
/// schedule sheet and must not be added.
pub fn tutor_info_csv() -> String {
    [
        "Tutor Info,,,,,,,,,",
        "Jane Doe,,,Junior,,,,,,jane.png",
        "John Smith,,,Senior,,,,,,",
        "Ghost,,,Freshman,,,,,,ghost.png",
    ]
    .join("\n")
}
