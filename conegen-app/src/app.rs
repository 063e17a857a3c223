//! Application state and interactive run loop.

use crate::Args;
use crate::menu::{self, Command};
use conegen_core::{Cone, Vec3};
use conegen_data::{save_ply, save_points, save_settings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Set up console logging. RUST_LOG overrides the default level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Run the interactive loop until exit or end of input.
pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    init_tracing();

    let center = args.center.as_deref().map(to_vec3).unwrap_or(Vec3::ZERO);
    let normal = args.normal.as_deref().map(to_vec3).unwrap_or(Vec3::Z);
    let mut cone = Cone::new(args.radius, args.height, center, normal);
    if let Err(e) = cone.validate() {
        // Degenerate parameters are allowed; the samples just collapse.
        warn!("Degenerate cone parameters: {}", e);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Region parameters: {cone}");

    let count = match args.count {
        Some(count) => count,
        None => match prompt_usize(&mut input, "Number of points: ")? {
            Some(count) => count,
            None => return Ok(()),
        },
    };
    let mut points = cone.sample_points(count, &mut rng);
    info!("Generated initial batch of {} points", points.len());

    loop {
        menu::print_menu();
        let Some(choice) = prompt_usize(&mut input, "Choice: ")? else {
            break;
        };
        let Some(command) = Command::from_choice(choice) else {
            println!("Invalid choice!");
            continue;
        };

        match command {
            Command::PrintPoint => {
                if points.is_empty() {
                    println!("No points stored");
                    continue;
                }
                let text = format!("Point index (0-{}): ", points.len() - 1);
                let Some(index) = prompt_usize(&mut input, &text)? else {
                    break;
                };
                if index < points.len() {
                    println!("Point {}: {}", index, points[index]);
                } else {
                    println!("Index out of range!");
                }
            }

            Command::AddPoint => {
                let Some(p) = prompt_vec3(&mut input, "New point coordinates (x y z): ")? else {
                    break;
                };
                points.push(p);
                println!("Point added. Total points: {}", points.len());
            }

            Command::Save => {
                let result = save_points(&points, &args.points_file)
                    .and_then(|_| save_settings(&cone, &args.settings_file));
                match result {
                    Ok(()) => println!(
                        "Saved {} points to {} and settings to {}",
                        points.len(),
                        args.points_file.display(),
                        args.settings_file.display()
                    ),
                    Err(e) => println!("Save failed: {e}"),
                }
            }

            Command::ShowParams => {
                println!("{cone}");
                println!("apex: {}", cone.apex());
            }

            Command::Rotate => {
                let Some(axis) = prompt_vec3(&mut input, "Rotation axis (x y z): ")? else {
                    break;
                };
                let Some(degrees) = prompt_f64(&mut input, "Angle in degrees: ")? else {
                    break;
                };
                match cone.try_rotate(axis, degrees.to_radians()) {
                    Ok(()) => {
                        points = cone.sample_points(points.len(), &mut rng);
                        println!("Rotated and resampled. {cone}");
                    }
                    Err(e) => println!("Rotation rejected: {e}"),
                }
            }

            Command::Reconfigure => {
                let Some(radius) = prompt_f64(&mut input, "Radius: ")? else {
                    break;
                };
                let Some(height) = prompt_f64(&mut input, "Height: ")? else {
                    break;
                };
                let Some(new_center) = prompt_vec3(&mut input, "Base center (x y z): ")? else {
                    break;
                };
                let Some(new_normal) = prompt_vec3(&mut input, "Axis direction (x y z): ")? else {
                    break;
                };
                cone.set_params(radius, height, new_center, new_normal);
                if let Err(e) = cone.validate() {
                    warn!("Degenerate cone parameters: {}", e);
                }
                points = cone.sample_points(points.len(), &mut rng);
                println!("Reconfigured and resampled. {cone}");
            }

            Command::ExportPly => {
                match save_ply(&points, &args.ply_file) {
                    Ok(()) => println!(
                        "Exported {} points to {}",
                        points.len(),
                        args.ply_file.display()
                    ),
                    Err(e) => println!("Export failed: {e}"),
                }
            }

            Command::Quit => break,
        }
    }

    Ok(())
}

fn to_vec3(values: &[f64]) -> Vec3 {
    Vec3::new(values[0], values[1], values[2])
}

/// Print a prompt and read one trimmed line. `None` means end of input.
fn prompt_line(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt until a valid number is entered or input ends.
fn prompt_f64(input: &mut impl BufRead, text: &str) -> io::Result<Option<f64>> {
    loop {
        match prompt_line(input, text)? {
            None => return Ok(None),
            Some(line) => match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Invalid number: {line}"),
            },
        }
    }
}

/// Prompt until a valid index/count is entered or input ends.
fn prompt_usize(input: &mut impl BufRead, text: &str) -> io::Result<Option<usize>> {
    loop {
        match prompt_line(input, text)? {
            None => return Ok(None),
            Some(line) => match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Invalid number: {line}"),
            },
        }
    }
}

/// Prompt for three whitespace-separated coordinates on one line.
fn prompt_vec3(input: &mut impl BufRead, text: &str) -> io::Result<Option<Vec3>> {
    loop {
        match prompt_line(input, text)? {
            None => return Ok(None),
            Some(line) => {
                let coords: Result<Vec<f64>, _> =
                    line.split_whitespace().map(str::parse).collect();
                match coords {
                    Ok(values) if values.len() == 3 => return Ok(Some(to_vec3(&values))),
                    _ => println!("Expected three numbers, got: {line}"),
                }
            }
        }
    }
}
