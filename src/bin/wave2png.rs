// wave2png - Render a simulated frame to a PNG for offline preview
//
// Runs the wave sim for N frames while sweeping a synthetic pointer
// across the field, then rasterizes the final frame's polylines into a
// grayscale image. Useful for eyeballing tuning changes without a
// browser build.
//
// Usage: cargo run --bin wave2png -- <out.png> [--width N] [--height N] [--frames N] [--seed F]

use std::env;

use wave_engine::WaveSim;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <out.png> [--width N] [--height N] [--frames N] [--seed F]",
            args[0]
        );
        std::process::exit(1);
    }

    // Parse arguments
    let out_path = &args[1];
    let mut width = 800u32;
    let mut height = 600u32;
    let mut frames = 240usize;
    let mut seed = 0.42f64;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => { width = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(800); i += 2; }
            "--height" => { height = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(600); i += 2; }
            "--frames" => { frames = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(240); i += 2; }
            "--seed" => { seed = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(0.42); i += 2; }
            _ => i += 1,
        }
    }

    println!("Simulating {}x{} for {} frames (seed {})...", width, height, frames, seed);

    let mut sim = WaveSim::new(width as f32, height as f32, seed);

    // Diagonal pointer sweep to excite the field
    for frame in 0..frames {
        let t = frame as f32 / frames.max(1) as f32;
        sim.pointer_move(width as f32 * t, height as f32 * (0.25 + 0.5 * t));
        sim.tick(frame as f64 * 16.666);
    }

    println!("  Rasterizing {} lines...", sim.cols());
    let mut buf = vec![0u8; (width * height) as usize];
    for col in 0..sim.cols() {
        let mut prev: Option<(f32, f32)> = None;
        for row in 0..sim.rows() {
            let p = sim.drawn(col, row);
            if let Some(q) = prev {
                draw_line(&mut buf, width, height, q, p);
            }
            prev = Some(p);
        }
    }

    image::save_buffer(out_path, &buf, width, height, image::ColorType::L8)
        .expect("Failed to write PNG");

    println!("Done!");
}

// Bresenham segment on rounded endpoints
fn draw_line(buf: &mut [u8], w: u32, h: u32, from: (f32, f32), to: (f32, f32)) {
    let (mut x0, mut y0) = (from.0.round() as i32, from.1.round() as i32);
    let (x1, y1) = (to.0.round() as i32, to.1.round() as i32);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && x0 < w as i32 && y0 >= 0 && y0 < h as i32 {
            buf[(y0 * w as i32 + x0) as usize] = 255;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
