use std::hint::black_box;
use std::time::Instant;

use vernissage_texture::{TextureCache, TextureStyle, generate};

fn bench_generate_each_style() {
    println!("--- generate (uncached) ---");
    for style in TextureStyle::ALL {
        let iterations = 5;
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(generate(style.key()));
        }
        let per_iter = start.elapsed() / iterations;
        println!("  {:<16} {:>10.2?}/texture", style.key(), per_iter);
    }
}

fn bench_cache_hits() {
    println!("--- cache hits ---");
    let mut cache = TextureCache::new();
    for style in TextureStyle::ALL {
        cache.get(style.key());
    }

    let iterations = 100_000;
    let start = Instant::now();
    for i in 0..iterations {
        let style = TextureStyle::ALL[i % TextureStyle::ALL.len()];
        black_box(cache.get(style.key()));
    }
    let elapsed = start.elapsed();
    println!(
        "  {} lookups in {:.2?} ({:.0} ns/lookup)",
        iterations,
        elapsed,
        elapsed.as_nanos() as f64 / iterations as f64
    );
}

fn main() {
    println!("=== Texture Generation Benchmarks ===\n");
    bench_generate_each_style();
    println!();
    bench_cache_hits();
    println!("\n=== Done ===");
}
