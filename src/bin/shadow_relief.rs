use log::warn;
use shadow_relief::config::{load_config, RuntimeConfig};
use shadow_relief::image::io::{load_square_target, save_grayscale_f32, write_json_file};
use shadow_relief::mesh::{save_obj, ExportOptions, Mesh};
use shadow_relief::report::{RunReport, TimingBreakdown};
use shadow_relief::{Annealer, Direction, TargetSet};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let grid_size = config.validate().map_err(|e| e.to_string())?;
    let mut timings = TimingBreakdown::default();

    let start = Instant::now();
    let photos = config
        .photos
        .iter()
        .map(|path| load_square_target(path, grid_size))
        .collect::<Result<Vec<_>, _>>()?;
    let targets = TargetSet::new(photos).map_err(|e| e.to_string())?;
    timings.push("load_targets", elapsed_ms(start));

    let start = Instant::now();
    let mut annealer = Annealer::new(targets, config.solver.clone()).map_err(|e| e.to_string())?;
    annealer.run();
    timings.push("anneal", elapsed_ms(start));

    if annealer.height_field().is_flat() {
        warn!("final height field is flat; the mesh holds only the floor");
    }

    let start = Instant::now();
    let mesh = Mesh::skyline(annealer.height_field(), &ExportOptions::from(&config.geometry));
    save_obj(&mesh, &config.output)?;
    timings.push("export_mesh", elapsed_ms(start));

    if let Some(dir) = &config.shadow_preview_dir {
        for d in Direction::ALL {
            let path = dir.join(format!("shadow_{}.png", d.label()));
            save_grayscale_f32(annealer.shadow_map().slice(d), &path)?;
        }
        println!("Shadow previews written to {}", dir.display());
    }

    let report = build_report(&config, grid_size, &annealer, &mesh, timings);
    print_summary(&report);
    println!("Mesh written to {}", config.output.display());
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn build_report(
    config: &RuntimeConfig,
    grid_size: usize,
    annealer: &Annealer,
    mesh: &Mesh,
    timings: TimingBreakdown,
) -> RunReport {
    let height = annealer.height_field();
    RunReport {
        grid_size,
        radius: config.solver.radius,
        stats: annealer.stats().clone(),
        final_terms: annealer.terms(),
        lit_fraction: annealer.shadow_map().lit_fraction(),
        min_height: height.min(),
        max_height: height.max(),
        vertex_count: mesh.vertices().len(),
        face_count: mesh.faces().len(),
        timings,
    }
}

fn print_summary(report: &RunReport) {
    let stats = &report.stats;
    println!("Run summary");
    println!("  grid: {0}x{0}, radius {1}", report.grid_size, report.radius);
    println!(
        "  objective: {:.6} -> {:.6}",
        stats.initial_objective, stats.final_objective
    );
    println!(
        "  iterations: {} (improved {}, accepted {}, rejected {}, illegal {})",
        stats.iterations, stats.improved, stats.accepted, stats.rejected, stats.illegal
    );
    println!("  final temperature: {:.6}", stats.final_temperature);
    println!(
        "  heights: {}..{}, {} vertices, {} faces",
        report.min_height, report.max_height, report.vertex_count, report.face_count
    );
    for stage in &report.timings.stages {
        println!("  {}: {:.1} ms", stage.label, stage.elapsed_ms);
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn usage() -> String {
    "Usage: shadow_relief <config.json>".to_string()
}
