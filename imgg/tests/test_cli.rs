// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command; // Run programs
use tempfile::NamedTempFile;

const SCENE: &str = r##"{
    "width": 160,
    "height": 90,
    "background": "#abc",
    "commands": [
        {"op": "title", "text": "Demo"},
        {"op": "line", "x0": 10, "y0": 80, "x1": 150, "y1": 80},
        {"op": "rect", "x": 20, "y": 30, "w": 30, "h": 40, "style": {"fill_color": "#336699"}},
        {"op": "text", "x": 100, "y": 50, "text": "label", "align": "cc", "rot": 90}
    ]
}"##;

fn scene_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn png_size(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    (reader.info().width, reader.info().height)
}

fn png_pixel(path: &Path, x: u32, y: u32) -> [u8; 4] {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba);
    let i = ((y * info.width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

const RING_SCENE: &str = r##"{
    "width": 100,
    "height": 100,
    "commands": [
        {"op": "wedge", "x": 50, "y": 50, "ro": 40, "ri": 20, "phi": 0.0, "psi": 1.5707964,
         "style": {"fill_color": "#0000ff"}}
    ]
}"##;

#[rustfmt::skip]
mod test_render {
    use crate::*;

    #[test]
    fn test_render_scene() -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(SCENE);
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("chart.png");

        Command::cargo_bin("imgg")?
            .arg("render")
            .arg("--scene").arg(scene.path())
            .arg("--output").arg(&output)
            .assert()
            .success();

        assert_eq!(png_size(&output), (160, 90));
        Ok(())
    }

    #[rstest]
    #[case(Some(320), None, (320, 90))]
    #[case(None, Some(40), (160, 40))]
    #[case(Some(50), Some(60), (50, 60))]
    fn test_render_size_override(
        #[case] width: Option<u32>,
        #[case] height: Option<u32>,
        #[case] expected: (u32, u32),
    ) -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(SCENE);
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("chart.png");

        let mut cmd = Command::cargo_bin("imgg")?;
        cmd.arg("render")
            .arg("-s").arg(scene.path())
            .arg("-o").arg(&output)
            .arg("--ppi").arg("144");
        if let Some(width) = width {
            cmd.arg("--width").arg(width.to_string());
        }
        if let Some(height) = height {
            cmd.arg("--height").arg(height.to_string());
        }
        cmd.assert().success();

        assert_eq!(png_size(&output), expected);
        Ok(())
    }

    #[rstest]
    #[case(RING_SCENE.to_string(), false, [0, 0, 255, 255])]
    #[case(RING_SCENE.to_string(), true, [255, 255, 255, 255])]
    #[case(RING_SCENE.replacen("{", r#"{"inner_radius": true,"#, 1), false, [255, 255, 255, 255])]
    fn test_render_inner_radius(
        #[case] scene_json: String,
        #[case] flag: bool,
        #[case] near_center: [u8; 4],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(&scene_json);
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("ring.png");

        let mut cmd = Command::cargo_bin("imgg")?;
        cmd.arg("render")
            .arg("--scene").arg(scene.path())
            .arg("--output").arg(&output);
        if flag {
            cmd.arg("--inner-radius");
        }
        cmd.assert().success();

        assert_eq!(png_pixel(&output, 56, 56), near_center);
        assert_eq!(png_pixel(&output, 70, 70), [0, 0, 255, 255]);
        Ok(())
    }

    #[test]
    fn test_render_missing_scene() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        Command::cargo_bin("imgg")?
            .arg("render")
            .arg("--scene").arg(dir.path().join("missing.json"))
            .arg("--output").arg(dir.path().join("out.png"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to read scene file"));
        Ok(())
    }

    #[test]
    fn test_render_invalid_scene() -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(r#"{"width": 10, "commands": [{"op": "nope"}]}"#);
        let dir = tempfile::tempdir()?;
        Command::cargo_bin("imgg")?
            .arg("render")
            .arg("--scene").arg(scene.path())
            .arg("--output").arg(dir.path().join("out.png"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse scene file"));
        Ok(())
    }

    #[test]
    fn test_render_bad_font_fails() -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(SCENE);
        let font = scene_file("not a font");
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("chart.png");
        Command::cargo_bin("imgg")?
            .arg("render")
            .arg("--scene").arg(scene.path())
            .arg("--output").arg(&output)
            .arg("--font").arg(font.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load font"));
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_render_bad_background() -> Result<(), Box<dyn std::error::Error>> {
        let scene = scene_file(SCENE);
        let dir = tempfile::tempdir()?;
        Command::cargo_bin("imgg")?
            .arg("render")
            .arg("--scene").arg(scene.path())
            .arg("--output").arg(dir.path().join("out.png"))
            .arg("--background").arg("not-a-color")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid background color"));
        Ok(())
    }

    #[test]
    fn test_check_font_bundled() -> Result<(), Box<dyn std::error::Error>> {
        Command::cargo_bin("imgg")?
            .arg("check-font")
            .env_remove("IMGG_FONT_PATH")
            .assert()
            .success()
            .stdout(predicate::str::contains("DejaVu Sans Mono (2048 units/em)"));
        Ok(())
    }

    #[test]
    fn test_check_font_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        Command::cargo_bin("imgg")?
            .arg("check-font")
            .arg("--font").arg("/nonexistent/font.ttf")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to load font"));
        Ok(())
    }
}
