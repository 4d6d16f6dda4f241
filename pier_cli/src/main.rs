//! # Pierstat CLI Application
//!
//! Terminal front end for the marine bridge pier evaluation engine.
//! Prompts for geometry, material, and hazards (with sensible defaults),
//! runs one evaluation, and prints a formatted report plus a JSON dump
//! of the result for programmatic use.

use std::io::{self, BufRead, Write};

use pier_core::calculations::pier::{calculate, PierInput, PierResult};
use pier_core::geometry::Geometry;
use pier_core::loads::{EvaluationOptions, HazardInput};
use pier_core::materials::Material;
use pier_core::units::{KiloNewtonMeters, KiloNewtons, MegaPascals, Newtons, NewtonMeters, Pascals};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_material(default: Material) -> Material {
    print!("Material (concrete/steel) [{}]: ", default.display_name());
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    Material::from_str_flexible(trimmed).unwrap_or(default)
}

fn main() {
    println!("Pierstat CLI - Marine Bridge Pier Evaluation");
    println!("============================================");
    println!();

    println!("Structure:");
    let pier_diameter_m = prompt_f64("  Pier diameter (m) [4.0]: ", 4.0);
    let pier_height_m = prompt_f64("  Pier height (m) [30.0]: ", 30.0);
    let deck_length_m = prompt_f64("  Deck length (m) [200.0]: ", 200.0);
    let deck_width_m = prompt_f64("  Deck width (m) [15.0]: ", 15.0);
    let deck_thickness_m = prompt_f64("  Deck thickness (m) [2.5]: ", 2.5);
    let material = prompt_material(Material::Concrete);

    println!();
    println!("Hazards:");
    let wind_speed_ms = prompt_f64("  Wind speed (m/s) [35.0]: ", 35.0);
    let water_depth_m = prompt_f64("  Water depth (m) [4.0]: ", 4.0);
    let seismic_acceleration_g = prompt_f64("  Seismic intensity (g) [0.15]: ", 0.15);

    let input = PierInput {
        label: "CLI-Demo".to_string(),
        geometry: Geometry {
            deck_length_m,
            deck_width_m,
            deck_thickness_m,
            pier_height_m,
            pier_diameter_m,
        },
        material,
        hazards: HazardInput {
            wind_speed_ms,
            water_depth_m,
            seismic_acceleration_g,
        },
    };

    println!();
    println!("Evaluating {} pier...", material.display_name());
    println!();

    match calculate(&input, &EvaluationOptions::default()) {
        Ok(result) => print_report(&input, &result),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_report(input: &PierInput, result: &PierResult) {
    let kn = |n: f64| KiloNewtons::from(Newtons(n)).0;
    let mpa = |pa: f64| MegaPascals::from(Pascals(pa)).0;

    println!("═══════════════════════════════════════");
    println!("  PIER EVALUATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Pier:     ⌀{:.1} m × {:.1} m, {}",
        input.geometry.pier_diameter_m,
        input.geometry.pier_height_m,
        input.material.display_name()
    );
    println!(
        "  Deck:     {:.0} × {:.0} × {:.1} m",
        input.geometry.deck_length_m, input.geometry.deck_width_m, input.geometry.deck_thickness_m
    );
    println!(
        "  Hazards:  wind {:.0} m/s, depth {:.1} m, seismic {:.2} g",
        input.hazards.wind_speed_ms, input.hazards.water_depth_m, input.hazards.seismic_acceleration_g
    );
    println!();
    println!("Forces:");
    println!("  Wind     = {:.1} kN", kn(result.wind_force_n));
    println!("  Wave     = {:.1} kN", kn(result.wave_force_n));
    println!("  Seismic  = {:.1} kN", kn(result.seismic_force_n));
    println!("  Buoyancy = {:.1} kN", kn(result.buoyancy_force_n));
    println!(
        "  M_base   = {:.1} kN·m",
        KiloNewtonMeters::from(NewtonMeters(result.base_moment_nm)).0
    );
    println!();
    println!("Stresses (per pier):");
    println!("  Axial    = {:.2} MPa", mpa(result.axial_stress_pa));
    println!("  Bending  = {:.2} MPa", mpa(result.bending_stress_pa));
    println!("  Combined = {:.2} MPa", mpa(result.combined_stress_pa));
    println!(
        "  Yield    = {:.2} MPa",
        mpa(input.material.properties().yield_strength_pa)
    );
    println!();
    println!("Deflected shape (δ_max = {:.3} m):", result.max_deflection_m);
    print_deflection_sketch(result);
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", result.status.banner());
    println!("  Utilization: {:.1}%", result.utilization_percent());
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for programmatic use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

/// Draw the deflection profile sideways: one row per sampled band, base at
/// the bottom, displacement scaled to a fixed column width.
fn print_deflection_sketch(result: &PierResult) {
    const ROWS: usize = 12;
    const WIDTH: usize = 32;

    let profile = &result.deflection_profile;
    if profile.len() < 2 || result.max_deflection_m <= 0.0 {
        println!("  (no lateral load - pier remains vertical)");
        return;
    }

    let step = (profile.len() - 1) as f64 / (ROWS - 1) as f64;
    for row in (0..ROWS).rev() {
        let sample = profile[(row as f64 * step).round() as usize];
        let columns =
            ((sample.displacement_m / result.max_deflection_m) * (WIDTH - 1) as f64).round() as usize;
        println!(
            "  {:>6.1} m |{}█",
            sample.height_m,
            " ".repeat(columns.min(WIDTH - 1))
        );
    }
    println!("           +{}→ δ", "-".repeat(WIDTH));
}
