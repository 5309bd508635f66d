//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for ColorString construction, parsing and wrapping

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinted_string::{Color, ColorString, WrapOptions, wrap_text};

fn tagged_input(sections: usize) -> String {
    (0..sections)
        .map(|i| format!("{{{}}}section {} text, ", Color::ALL[i % 16], i))
        .collect()
}

fn prose(words: usize) -> String {
    (0..words)
        .map(|i| if i % 7 == 6 { "sentence. " } else { "word " })
        .collect()
}

// Benchmark appending runs
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut string = ColorString::new();
                for i in 0..size {
                    string.append(black_box("chunk "), Some(Color::ALL[i % 16]), None);
                }
                black_box(string);
            });
        });
    }
    group.finish();
}

// Benchmark parsing tagged input
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000].iter() {
        let input = tagged_input(*size);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(ColorString::parse(black_box(input.as_str())).unwrap()));
        });
    }
    group.finish();
}

// Benchmark wrapping prose
fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    let options = WrapOptions::new(80).with_indentation(4);

    for size in [100, 1000, 10000].iter() {
        let text = prose(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(wrap_text(black_box(text), &options).unwrap()));
        });
    }
    group.finish();
}

// Benchmark hard breaks of an unbreakable token
fn bench_wrap_hard_break(c: &mut Criterion) {
    let text = "x".repeat(10000);
    let options = WrapOptions::new(80);
    c.bench_function("wrap_hard_break", |b| {
        b.iter(|| black_box(wrap_text(black_box(&text), &options).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_parse,
    bench_wrap,
    bench_wrap_hard_break
);
criterion_main!(benches);
