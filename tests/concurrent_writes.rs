//! Torn-write safety under concurrent writers targeting one destination.
//!
//! Each writer renders a distinct image and commits it to the same path.
//! After every race the destination must decode completely and equal one
//! writer's full output — never a mixture — and no staging files may be
//! left behind.

use image::{Rgb, RgbImage};
use resize_image::{OutputFormat, SizeSpec, persist, pipeline};
use std::thread;
use tempfile::TempDir;

const WRITERS: usize = 8;
const ROUNDS: usize = 5;

#[test]
fn concurrent_writers_never_leave_a_partial_file() {
    let tmp = TempDir::new().unwrap();

    // One distinct solid-color source per writer, pre-rendered so the race
    // is purely over the commit step
    let spec = SizeSpec::parse("16x16").unwrap();
    let outputs: Vec<Vec<u8>> = (0..WRITERS)
        .map(|i| {
            let src = tmp.path().join(format!("src-{i}.png"));
            let color = Rgb([(i * 29) as u8, (i * 53) as u8, (i * 97) as u8]);
            RgbImage::from_pixel(64, 48, color).save(&src).unwrap();
            pipeline::render(&src, spec, OutputFormat::Png).unwrap()
        })
        .collect();

    let dst = tmp.path().join("contended").join("out.png");
    for round in 0..ROUNDS {
        thread::scope(|s| {
            for bytes in &outputs {
                let dst = &dst;
                s.spawn(move || persist::commit(bytes, dst).unwrap());
            }
        });

        let written = std::fs::read(&dst).unwrap();
        assert!(
            outputs.iter().any(|o| *o == written),
            "round {round}: destination matches no writer's output"
        );

        let img = image::load_from_memory(&written).unwrap();
        assert_eq!((img.width(), img.height()), (16, 16));

        let stray: Vec<_> = std::fs::read_dir(dst.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name != "out.png")
            .collect();
        assert!(stray.is_empty(), "round {round}: stray files {stray:?}");
    }
}

#[test]
fn racing_writers_with_identical_content_converge() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src.png");
    RgbImage::from_pixel(32, 32, Rgb([120, 10, 240]))
        .save(&src)
        .unwrap();

    let spec = SizeSpec::parse("8x8").unwrap();
    let bytes = pipeline::render(&src, spec, OutputFormat::Png).unwrap();
    let dst = tmp.path().join("out.png");

    thread::scope(|s| {
        for _ in 0..WRITERS {
            let (bytes, dst) = (&bytes, &dst);
            s.spawn(move || persist::commit(bytes, dst).unwrap());
        }
    });

    assert_eq!(std::fs::read(&dst).unwrap(), bytes);
}
