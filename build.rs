use std::env;
use std::f64;
use std::fmt::{Display, Write};
use std::fs;
use std::path::Path;

// Must match the constants in src/trig/core.rs.
const FULL_TURN: usize = 1024;
const TRIG_UNITY: usize = 128;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    gen_arcsin_table(out_dir);
    gen_magnitude_correction(out_dir);

    println!("cargo:rerun-if-changed=build.rs");
}

/// Arcsine table for the binary-search sine projection: entry `i` is the
/// angle, in divisions of a 1024-division turn, whose sine is `i / 128`.
fn gen_arcsin_table(out_dir: &Path) {
    let mut table = [0i32; TRIG_UNITY];
    for (i, x) in table.iter_mut().enumerate() {
        let sine = i as f64 / TRIG_UNITY as f64;
        let divs = f64::asin(sine) * FULL_TURN as f64 / (2.0 * f64::consts::PI);
        *x = divs.round() as i32;
    }

    write_table(&out_dir.join("arcsin_table.rs"), &table);
}

/// Correction steps for the square-root-free magnitude approximation.
/// Entry `m` covers the ratio `max/min = 1 + m/8` and holds how many
/// increments of `min/16` close the gap to `sqrt(max^2 + min^2)`.
fn gen_magnitude_correction(out_dir: &Path) {
    let mut table = [0u32; 25];
    for (m, x) in table.iter_mut().enumerate() {
        let ratio = 1.0 + m as f64 / 8.0;
        let steps = 16.0 * (f64::sqrt(ratio * ratio + 1.0) - ratio);
        *x = steps.round() as u32;
    }

    write_table(&out_dir.join("magnitude_correction.rs"), &table);
}

fn write_table<T>(file_path: &Path, table: &[T])
where
    T: Display + NumericSuffix,
{
    let mut out = String::new();

    out.push('[');
    let mut first = true;
    for x in table {
        write!(out, "{}", x).unwrap();
        if first {
            first = false;
            // add type suffix to first element to ensure we don't accidentally use the wrong type
            out.push_str(T::SUFFIX);
        }
        out.push_str(",\n");
    }
    out.push(']');

    fs::write(file_path, out).unwrap();
}

trait NumericSuffix {
    const SUFFIX: &'static str;
}

impl NumericSuffix for i32 {
    const SUFFIX: &'static str = "i32";
}

impl NumericSuffix for u32 {
    const SUFFIX: &'static str = "u32";
}
