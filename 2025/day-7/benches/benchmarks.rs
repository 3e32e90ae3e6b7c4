use aoc2025_day_7::{part1, part2};

const INPUT: &str = include_str!("../sample.txt");

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(INPUT)).unwrap();
}
