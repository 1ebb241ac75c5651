// IconGen - tests/e2e_generate.rs
//
// End-to-end tests for the generation pipeline.
//
// These run the real resvg renderer and the real ico/icns encoders against
// the SVG fixtures on disk, then read every output back to check sizes,
// entry counts and slot identifiers.

use icongen::core::icns_packer::icon_type_for_slot;
use icongen::core::pipeline::{run, GenerateConfig};
use icongen::util::error::{IconGenError, RenderError};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

const SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Default setup, reading fixtures and writing into `output_dir`.
fn config_for(output_dir: &Path) -> GenerateConfig {
    GenerateConfig {
        input_dir: fixtures_dir(),
        output_dir: output_dir.to_path_buf(),
        load_system_fonts: false,
        ..Default::default()
    }
}

fn read_ico(path: &Path) -> ico::IconDir {
    ico::IconDir::read(File::open(path).expect("open ico")).expect("read ico")
}

fn read_icns(path: &Path) -> icns::IconFamily {
    icns::IconFamily::read(BufReader::new(File::open(path).expect("open icns")))
        .expect("read icns")
}

// =============================================================================
// Full run
// =============================================================================

/// A default run produces 7 PNGs, one ICO and one ICNS per source.
#[test]
fn e2e_full_run_produces_all_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("assets");

    let sets = run(&config_for(&out)).unwrap();
    assert_eq!(sets.len(), 2);

    for name in ["tray-icon", "tray-icon-recording"] {
        for size in SIZES {
            let png = out.join(format!("{name}-{size}.png"));
            assert_eq!(
                image::image_dimensions(&png).unwrap(),
                (size, size),
                "{}",
                png.display()
            );
        }
        assert!(out.join(format!("{name}.ico")).is_file());
        assert!(out.join(format!("{name}.icns")).is_file());
    }

    let pngs = fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "png"))
        .count();
    assert_eq!(pngs, 14);
}

/// The ICO holds the four smallest sizes with 16px first.
#[test]
fn e2e_ico_contains_four_smallest_sizes() {
    let tmp = tempfile::tempdir().unwrap();
    let sets = run(&config_for(tmp.path())).unwrap();

    let icon_dir = read_ico(&sets[0].ico_path);
    let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    assert_eq!(sizes, vec![16, 32, 64, 128]);
    assert_eq!(icon_dir.entries()[0].height(), 16);
}

/// The ICNS holds all seven sizes at their slot identifiers.
#[test]
fn e2e_icns_contains_every_slot() {
    let tmp = tempfile::tempdir().unwrap();
    let sets = run(&config_for(tmp.path())).unwrap();

    let set = &sets[0];
    assert_eq!(
        set.icns_slots,
        vec!["icp4", "icp5", "icp6", "ic07", "ic08", "ic09", "ic10"]
    );

    let family = read_icns(&set.icns_path);
    let available = family.available_icons();
    assert_eq!(available.len(), 7);
    for (slot, size) in set.icns_slots.iter().zip(SIZES) {
        let icon_type = icon_type_for_slot(slot).unwrap();
        assert!(available.contains(&icon_type), "missing {slot}");
        let image = family.get_icon_with_type(icon_type).unwrap();
        assert_eq!((image.width(), image.height()), (size, size), "{slot}");
    }
}

/// Re-running over unchanged inputs reproduces every file byte for byte.
#[test]
fn e2e_rerun_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("assets");
    let config = config_for(&out);

    run(&config).unwrap();
    let snapshot = |dir: &Path| {
        let mut files: Vec<(PathBuf, Vec<u8>)> = fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let path = e.unwrap().path();
                let bytes = fs::read(&path).unwrap();
                (path, bytes)
            })
            .collect();
        files.sort();
        files
    };
    let first = snapshot(&out);

    run(&config).unwrap();
    let second = snapshot(&out);

    assert_eq!(first.len(), 18);
    assert_eq!(first, second);
}

// =============================================================================
// Failure handling
// =============================================================================

/// A missing second source aborts after the first source's outputs are
/// written, and nothing is packed for the missing one.
#[test]
fn e2e_missing_source_aborts_and_keeps_prior_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("src");
    let out = tmp.path().join("assets");
    fs::create_dir(&input).unwrap();
    fs::copy(
        fixtures_dir().join("tray-icon.svg"),
        input.join("tray-icon.svg"),
    )
    .unwrap();

    let config = GenerateConfig {
        input_dir: input,
        ..config_for(&out)
    };
    let result = run(&config);
    assert!(
        matches!(
            result,
            Err(IconGenError::Render(RenderError::SourceRead { .. }))
        ),
        "expected SourceRead, got {result:?}"
    );

    assert!(out.join("tray-icon.ico").is_file());
    assert!(out.join("tray-icon.icns").is_file());
    assert!(!out.join("tray-icon-recording.ico").exists());
    assert!(!out.join("tray-icon-recording.icns").exists());
    assert!(!out.join("tray-icon-recording-16.png").exists());
}

/// Missing first source: nothing is produced for it at all.
#[test]
fn e2e_missing_first_source_produces_no_containers() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("assets");
    let config = GenerateConfig {
        input_dir: tmp.path().join("empty"),
        ..config_for(&out)
    };

    assert!(run(&config).is_err());
    assert!(out.is_dir(), "output directory is created up front");
    assert!(!out.join("tray-icon.ico").exists());
    assert!(!out.join("tray-icon.icns").exists());
}

/// An output path that is a regular file cannot become the output directory.
#[test]
fn e2e_unwritable_output_dir_returns_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("assets");
    fs::write(&out, b"in the way").unwrap();

    let result = run(&config_for(&out));
    assert!(
        matches!(result, Err(IconGenError::Io { .. })),
        "expected Io, got {result:?}"
    );
}
