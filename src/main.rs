// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{debug, Level};

use fretwise::config::validate_config;
use fretwise::fretboard::{
    diagonal_pentatonic, markers, one_fret_rule, position_fret, Inversion, Marker, ScaleForm,
    Selection, ShapeFilter, TrainingMode, TriadShape,
};
use fretwise::fretboard::triads::positions_for;
use fretwise::music::{harmonize, Key, Note, Tuning, MAX_FRET, STRING_COUNT};
use fretwise::quiz::{FindNoteQuiz, IdentifyNoteQuiz, IntervalQuiz, QuizFilter};

fn print_usage() {
    println!("Fretwise - Guitar Fretboard Trainer");
    println!();
    println!("Usage: fretwise [OPTIONS] [--json]");
    println!();
    println!("Options:");
    println!("  --positions <KEY> <FORM>       Show scale form FORM (0-6) in KEY");
    println!("  --one-fret <FRET>              List the seven keys anchored at FRET");
    println!("  --diagonal <KEY>               Show both diagonal pentatonic sets");
    println!("  --caged <KEY> [SHAPE]          Show CAGED shapes (all, or C/A/G/E/D)");
    println!("  --triads <KEY> <INV> <SHAPE>   Show triad INV (0-2) on shape SHAPE (0-15)");
    println!("  --harmonize <KEY>              List the diatonic chords of KEY");
    println!("  --quiz <KIND> <KEY> [SEED]     Generate an identify/find/interval quiz");
    println!("  --config <FILE>                Show the view stored in a trainer file");
    println!("  --config <FILE> --quiz <KIND>  Quiz in the file's key, region, strings and seed");
    println!("  --json                         Print JSON instead of text");
    println!("  --help                         Show this help message");
    println!();
    println!("Set FRETWISE_LOG=debug for engine diagnostics.");
}

fn init_logging() {
    let level = env::var("FRETWISE_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn arg<'a>(args: &'a [String], index: usize, option: &str, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires {}", option, what))
}

fn parse_note(text: &str) -> Result<Note> {
    Ok(text.parse::<Note>()?)
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T> {
    text.parse()
        .map_err(|_| anyhow!("Invalid {}: {}", what, text))
}

/// Plain text neck, high E on top
fn render_grid(markers: &[Marker]) -> String {
    let mut out = String::from("   ");
    for fret in 0..=MAX_FRET {
        out.push_str(&format!("{:^4}", fret));
    }
    out.push('\n');

    for string in 0..STRING_COUNT {
        let open = Tuning::STANDARD.open_note(string);
        out.push_str(&format!("{:<2} ", open.sharp_name()));
        for fret in 0..=MAX_FRET {
            let cell = markers
                .iter()
                .find(|m| m.position.string == string && m.position.fret == fret)
                .map(|m| format!("{:-^3}", m.label))
                .unwrap_or_else(|| "---".to_string());
            out.push_str(&cell);
            out.push(if fret == 0 { '‖' } else { '|' });
        }
        out.push('\n');
    }
    out
}

fn show(title: &str, selection: &Selection, json: bool) -> Result<()> {
    let markers = markers(selection);
    if json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
    } else {
        println!("{}", title);
        println!("{}", render_grid(&markers));
    }
    Ok(())
}

fn show_positions(root: Note, form: ScaleForm, json: bool) -> Result<()> {
    let selection = Selection {
        form,
        ..Selection::new(root, TrainingMode::ScalePositions)
    };
    let key = Key::major(root);
    let title = format!(
        "{} - {}, first finger at fret {}",
        key,
        form,
        position_fret(root, form)
    );
    show(&title, &selection, json)
}

fn show_one_fret(fret: u8, json: bool) -> Result<()> {
    let table = one_fret_rule(fret);
    if json {
        let rows: Vec<_> = table
            .iter()
            .map(|(form, key)| json!({ "form": form, "root": key.root(), "key": key.to_string() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("First finger at fret {}:", fret);
    for (form, key) in table {
        println!("  {:<22} {}", form.to_string(), key);
    }
    Ok(())
}

fn show_diagonal(root: Note, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&diagonal_pentatonic(root))?);
        return Ok(());
    }
    let key = Key::major(root);
    for set in 0..2 {
        let selection = Selection {
            diagonal_set: set,
            ..Selection::new(root, TrainingMode::DiagonalPentatonic)
        };
        show(&format!("{} - diagonal pentatonic {}", key, set + 1), &selection, false)?;
    }
    Ok(())
}

fn show_caged(root: Note, filter: ShapeFilter, json: bool) -> Result<()> {
    let selection = Selection {
        shape_filter: filter,
        ..Selection::new(root, TrainingMode::Caged)
    };
    let shapes = match filter {
        ShapeFilter::All => "CAGED".to_string(),
        ShapeFilter::Only(shape) => format!("{} shape", shape),
    };
    show(&format!("{} - {}", Key::major(root), shapes), &selection, json)
}

fn show_triads(root: Note, inversion: Inversion, shape: TriadShape, json: bool) -> Result<()> {
    let voicings = positions_for(root, inversion, shape);
    if json {
        println!("{}", serde_json::to_string_pretty(&voicings)?);
        return Ok(());
    }
    let selection = Selection {
        inversion,
        triad_shape: shape,
        ..Selection::new(root, TrainingMode::Triads)
    };
    let title = format!("{} {} - {}", root, shape, inversion.name());
    show(&title, &selection, false)?;
    if voicings.is_empty() {
        println!("No placement fits on the neck.");
    }
    for voicing in &voicings {
        let names: Vec<String> = voicing
            .notes
            .iter()
            .map(|note| format!("{} ({})", note.note_name, note.interval))
            .collect();
        println!("  {}", names.join("  "));
    }
    Ok(())
}

fn show_harmony(root: Note, json: bool) -> Result<()> {
    let chords = harmonize(root);
    if json {
        println!("{}", serde_json::to_string_pretty(&chords)?);
        return Ok(());
    }
    println!("{}:", Key::major(root));
    for chord in &chords {
        println!("  {:<5} {:<4} {:?}", chord.numeral, chord.name, chord.quality);
    }
    Ok(())
}

fn run_quiz(
    kind: &str,
    key: &Key,
    filter: &QuizFilter,
    rng: &mut StdRng,
    json: bool,
) -> Result<()> {
    debug!(kind, %key, ?filter, "generating quiz");

    match kind {
        "identify" => match IdentifyNoteQuiz::generate(key, filter, rng) {
            Some(quiz) if json => println!("{}", serde_json::to_string_pretty(&quiz)?),
            Some(quiz) => println!("Find every {} in {}", quiz.name, key),
            None => println!("No quiz available for this filter."),
        },
        "find" => match FindNoteQuiz::generate(key, filter, rng) {
            Some(quiz) if json => println!("{}", serde_json::to_string_pretty(&quiz)?),
            Some(quiz) => {
                println!("Which note is at {}?", quiz.position);
                println!("  {}", quiz.choices.join("  "));
                println!("Answer: {}", quiz.answer);
            }
            None => println!("No quiz available for this filter."),
        },
        "interval" => match IntervalQuiz::generate(key, filter, rng) {
            Some(quiz) if json => println!("{}", serde_json::to_string_pretty(&quiz)?),
            Some(quiz) => {
                println!("Which degree of {} is at {}?", key, quiz.position);
                println!("Answer: {}", quiz.label());
            }
            None => println!("No quiz available for this filter."),
        },
        other => {
            return Err(anyhow!(
                "Unknown quiz kind: {} (expected identify, find or interval)",
                other
            ))
        }
    }
    Ok(())
}

fn show_config(path: &str, quiz: Option<&str>, json: bool) -> Result<()> {
    let file = validate_config(path)?;
    let selection = file.selection()?;
    let filter = file.quiz_filter()?;
    if let Some(kind) = quiz {
        return run_quiz(kind, &selection.key(), &filter, &mut file.quiz_rng(), json);
    }
    let title = format!(
        "{} - {:?} (quiz frets {}-{})",
        selection.key(),
        selection.mode,
        filter.region.start(),
        filter.region.end()
    );
    show(&title, &selection, json)
}

fn main() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    if args.len() < 2 {
        println!("Fretwise - Guitar Fretboard Trainer");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let option = args[1].as_str();
    match option {
        "--positions" => {
            let root = parse_note(arg(&args, 2, option, "a key")?)?;
            let form = ScaleForm::from_index(parse_number(
                arg(&args, 3, option, "a form index")?,
                "form index",
            )?)?;
            show_positions(root, form, json)?;
        }
        "--one-fret" => {
            let fret: u8 = parse_number(arg(&args, 2, option, "a fret")?, "fret")?;
            if fret > MAX_FRET {
                return Err(anyhow!("Fret {} is past the last fret ({})", fret, MAX_FRET));
            }
            show_one_fret(fret, json)?;
        }
        "--diagonal" => {
            let root = parse_note(arg(&args, 2, option, "a key")?)?;
            show_diagonal(root, json)?;
        }
        "--caged" => {
            let root = parse_note(arg(&args, 2, option, "a key")?)?;
            let filter = match args.get(3) {
                Some(shape) => shape.parse::<ShapeFilter>()?,
                None => ShapeFilter::All,
            };
            show_caged(root, filter, json)?;
        }
        "--triads" => {
            let root = parse_note(arg(&args, 2, option, "a key")?)?;
            let inversion = Inversion::from_index(parse_number(
                arg(&args, 3, option, "an inversion index")?,
                "inversion index",
            )?)?;
            let shape = TriadShape::from_index(parse_number(
                arg(&args, 4, option, "a shape index")?,
                "shape index",
            )?)?;
            show_triads(root, inversion, shape, json)?;
        }
        "--harmonize" => {
            let root = parse_note(arg(&args, 2, option, "a key")?)?;
            show_harmony(root, json)?;
        }
        "--quiz" => {
            let kind = arg(&args, 2, option, "a quiz kind")?;
            let root = parse_note(arg(&args, 3, option, "a key")?)?;
            let mut rng = match args.get(4) {
                Some(seed) => StdRng::seed_from_u64(parse_number::<u64>(seed, "seed")?),
                None => StdRng::from_entropy(),
            };
            run_quiz(kind, &Key::major(root), &QuizFilter::full(), &mut rng, json)?;
        }
        "--config" => {
            let path = arg(&args, 2, option, "a file path")?;
            let quiz = match args.get(3).map(String::as_str) {
                Some("--quiz") => Some(arg(&args, 4, "--config FILE --quiz", "a quiz kind")?),
                Some(other) => return Err(anyhow!("Unexpected argument after --config: {}", other)),
                None => None,
            };
            show_config(path, quiz, json)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
