use pano_register::config::align::{self, AlignToolConfig};
use pano_register::image::io::{load_gray_image, load_rgb_image, save_planar_image, write_json_file};
use pano_register::image::PlanarImage;
use pano_register::PairAligner;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = align::load_config(Path::new(&config_path))?;

    let a = load_input(&config, &config.input_a)?;
    let b = load_input(&config, &config.input_b)?;
    let aligner = PairAligner::new(config.params.clone());

    if let Some(path) = &config.output.prepared_a {
        save_planar_image(&aligner.prepare(&a), path)?;
    }
    if let Some(path) = &config.output.prepared_b {
        save_planar_image(&aligner.prepare(&b), path)?;
    }

    let report = aligner.align(&a, &b);
    write_json_file(&config.output.report, &report)?;

    println!(
        "corners=({}, {}) matches={} inliers={} registered={} iterations={} latency_ms={:.3}",
        report.corners_a,
        report.corners_b,
        report.matches.len(),
        report.inliers,
        report.registered,
        report.ransac_iterations,
        report.timings.total_ms
    );
    if let Some(h) = report.homography {
        for row in h {
            println!("  [{:>12.6} {:>12.6} {:>12.6}]", row[0], row[1], row[2]);
        }
    }
    println!("Saved report to {}", config.output.report.display());
    Ok(())
}

fn load_input(config: &AlignToolConfig, path: &Path) -> Result<PlanarImage, String> {
    if config.grayscale {
        load_gray_image(path)
    } else {
        load_rgb_image(path)
    }
}

fn usage() -> String {
    "Usage: align_pair <config.json>".to_string()
}
