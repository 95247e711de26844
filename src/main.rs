use std::env;
use std::fs;
use std::process;

use serde::Serialize;

use fretwork::report::{FamilyReport, FretboardReport, PitchReport, ScaleChordsReport, ScaleReport};
use fretwork::{Fretboard, TheoryError};

const USAGE: &str = "\
Usage: fretwork <command> [options]

Commands:
  list                 List the scale catalog
  pitches              List the twelve pitch classes
  scale <id> [tonic]   Describe a scale (default tonic: c)
  chords <id> [tonic]  Stack chords on each scale degree
  frets <id> [tonic]   Map a scale onto the fretboard

Options:
  --tuning <file>      YAML tuning file for the frets command
  --yaml               Emit the report as YAML";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let mut yaml = false;
    let mut tuning_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut args_iter = args.into_iter();
    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "--yaml" => yaml = true,
            "--tuning" => match args_iter.next() {
                Some(path) => tuning_path = Some(path),
                None => {
                    eprintln!("--tuning requires a file path");
                    process::exit(1);
                }
            },
            _ => positional.push(arg),
        }
    }

    if positional.is_empty() {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let command = positional[0].clone();
    let tonic = positional
        .get(2)
        .cloned()
        .unwrap_or_else(|| "c".to_string());

    // Run the command
    let output = match command.as_str() {
        "list" => render(&FamilyReport::all(), yaml, |f| render_families(f)),
        "pitches" => render(&PitchReport::all(), yaml, |p| render_pitches(p)),
        "scale" => {
            let id = require_scale_id(&positional);
            let report = ok_or_exit(fretwork::describe_scale(id, &tonic));
            render(&report, yaml, render_scale)
        }
        "chords" => {
            let id = require_scale_id(&positional);
            let report = ok_or_exit(fretwork::describe_chords(id, &tonic));
            render(&report, yaml, render_chords)
        }
        "frets" => {
            let id = require_scale_id(&positional);
            let fretboard = load_fretboard(tuning_path.as_deref());
            let report = ok_or_exit(fretwork::describe_fretboard(id, &tonic, &fretboard));
            render(&report, yaml, render_frets)
        }
        _ => {
            eprintln!("Unknown command '{command}'");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    print!("{output}");
}

fn require_scale_id(positional: &[String]) -> &str {
    match positional.get(1) {
        Some(id) => id,
        None => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }
}

fn ok_or_exit<T>(result: Result<T, TheoryError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn load_fretboard(tuning_path: Option<&str>) -> Fretboard {
    match tuning_path {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading tuning file '{path}': {e}");
                    process::exit(1);
                }
            };
            ok_or_exit(Fretboard::from_yaml(&source))
        }
        None => Fretboard::standard(),
    }
}

fn render<T: Serialize>(value: &T, yaml: bool, text: impl FnOnce(&T) -> String) -> String {
    if yaml {
        match serde_yaml::to_string(value) {
            Ok(rendered) => rendered,
            Err(e) => {
                eprintln!("Error rendering YAML: {e}");
                process::exit(1);
            }
        }
    } else {
        text(value)
    }
}

fn join_numbers(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_families(families: &[FamilyReport]) -> String {
    let mut out = String::new();
    for family in families {
        out.push_str(&format!("{} [{}]\n", family.name, join_numbers(&family.steps)));
        for mode in &family.modes {
            out.push_str(&format!("  {:<24} {}\n", mode.id, mode.name));
        }
        out.push('\n');
    }
    out
}

fn render_pitches(pitches: &[PitchReport]) -> String {
    let mut out = String::new();
    for pitch in pitches {
        out.push_str(&format!("{:>2}  {:<3} {}\n", pitch.index, pitch.id, pitch.name));
    }
    out
}

fn render_scale(report: &ScaleReport) -> String {
    let tonic = report
        .notes
        .first()
        .cloned()
        .unwrap_or_else(|| report.tonic.clone());
    let mut out = String::new();
    out.push_str(&format!("{} {} [{}]\n", tonic, report.name, report.family));
    out.push_str(&format!(
        "kind:      {}\n",
        report.kind.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("steps:     {}\n", join_numbers(&report.steps)));
    out.push_str(&format!("semitones: {}\n", join_numbers(&report.semitones)));
    out.push_str(&format!("intervals: {}\n", report.intervals.join(" ")));
    out.push_str(&format!("number:    {}\n", report.number));
    out.push_str(&format!("formula:   {}\n", report.formula.join(" ")));
    out.push_str(&format!("notes:     {}\n", report.notes.join(" ")));
    out
}

fn render_chords(report: &ScaleChordsReport) -> String {
    let mut out = render_scale(&report.scale);
    out.push('\n');
    // Columns: root, name, formula, notes.
    for chord in &report.chords {
        out.push_str(&format!(
            "{:<4} {:<16} {:<20} {}\n",
            chord.root,
            chord.name,
            chord.formula.join(" "),
            chord.notes.join(" ")
        ));
    }
    out
}

fn render_frets(report: &FretboardReport) -> String {
    let mut out = render_scale(&report.scale);
    out.push('\n');

    // Fret number header, then one row per string. The tonic is starred.
    let mut header = String::from("    ");
    for fret in 0..=report.num_frets {
        header.push_str(&format!("{fret:>4}"));
    }
    out.push_str(&header);
    out.push('\n');

    for lane in &report.strings {
        let mut row = format!("{:>3} ", lane.open);
        for fret in 0..=report.num_frets {
            let cell = match lane.markers.iter().find(|m| m.fret == fret) {
                Some(marker) if marker.tonic => format!("{}*", marker.note),
                Some(marker) => marker.note.clone(),
                None => "·".to_string(),
            };
            row.push_str(&format!("{cell:>4}"));
        }
        out.push_str(&row);
        out.push('\n');
    }
    out
}
