//! Image fixtures shared by the integration tests.
#![allow(dead_code)]

use image::{GrayImage, Luma};
use std::path::{Path, PathBuf};

/// Version 1, level L symbol encoding `HELLO`, one character per module.
pub const HELLO_MATRIX: &str = include_str!("../../../../fixtures/hello_v1l.txt");

/// Renders a module matrix (`#` dark, anything else light) with a quiet zone.
pub fn render_matrix(matrix: &str, module_px: u32, quiet: u32) -> GrayImage {
    let rows: Vec<&str> = matrix.lines().filter(|l| !l.trim().is_empty()).collect();
    let side = (rows.len() as u32 + 2 * quiet) * module_px;
    let mut img = GrayImage::from_pixel(side, side, Luma([255]));
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.chars().enumerate() {
            if cell != '#' {
                continue;
            }
            let x0 = (c as u32 + quiet) * module_px;
            let y0 = (r as u32 + quiet) * module_px;
            for dy in 0..module_px {
                for dx in 0..module_px {
                    img.put_pixel(x0 + dx, y0 + dy, Luma([0]));
                }
            }
        }
    }
    img
}

pub fn hello_png(dir: &Path) -> PathBuf {
    let path = dir.join("hello.png");
    render_matrix(HELLO_MATRIX, 8, 4).save(&path).unwrap();
    path
}

pub fn blank_png(dir: &Path) -> PathBuf {
    let path = dir.join("blank.png");
    GrayImage::from_pixel(160, 120, Luma([255])).save(&path).unwrap();
    path
}

pub fn corrupt_file(dir: &Path) -> PathBuf {
    let path = dir.join("corrupt.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not really a png").unwrap();
    path
}
