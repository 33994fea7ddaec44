//! Throughput benchmark for the hot textkit transforms.
//!
//! Generates a synthetic workload resembling the real call sites (search
//! paths, translated templates, lap times, XML-escaped names) and reports
//! rates per transform.

use std::time::Instant;

use textkit::{
    insert_values, split, split_path_with_drive_letters, time_to_string, utf8_to_wide, version_to_int,
    xml_decode, xml_encode,
};

const ITERATIONS: usize = 200_000;

fn bench<T>(name: &str, count: usize, mut f: impl FnMut(usize) -> T) {
    let start = Instant::now();
    for i in 0..count {
        std::hint::black_box(f(i));
    }
    let elapsed = start.elapsed();
    let per_sec = count as f64 / elapsed.as_secs_f64();
    println!("{name:<24} {count:>8} calls in {elapsed:>10.2?} ({per_sec:>12.0}/s)");
}

fn main() {
    let paths: Vec<String> = (0..64)
        .map(|i| format!("data/karts/kart{i}:data/tracks/track{i}/:c:/addons{i}"))
        .collect();
    let templates: Vec<String> = (0..64)
        .map(|i| format!("Player %s finished lap %d of track{i} in %s"))
        .collect();
    let names: Vec<String> = (0..64)
        .map(|i| format!("Törtel & the \"Snail\" {i} ☺"))
        .collect();
    let versions: Vec<String> = (0..64)
        .map(|i| format!("{}.{}.{}-rc{}", i % 10, i % 7, i % 5, 1 + i % 8))
        .collect();

    bench("split", ITERATIONS, |i| split(&paths[i % paths.len()], '/'));
    bench("split_path (drives)", ITERATIONS, |i| {
        split_path_with_drive_letters(&paths[i % paths.len()], true)
    });
    bench("insert_values", ITERATIONS, |i| {
        insert_values(&templates[i % templates.len()], &["tux", "3", "01:05.50"])
    });
    bench("time_to_string", ITERATIONS, |i| {
        time_to_string(i as f32 * 0.37, 3, true, false)
    });
    bench("xml_encode", ITERATIONS, |i| {
        xml_encode(&utf8_to_wide(&names[i % names.len()]))
    });

    let escaped: Vec<String> = names.iter().map(|n| xml_encode(&utf8_to_wide(n))).collect();
    bench("xml_decode", ITERATIONS, |i| xml_decode(&escaped[i % escaped.len()]));
    bench("version_to_int", ITERATIONS, |i| {
        version_to_int(&versions[i % versions.len()])
    });
}
