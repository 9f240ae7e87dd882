// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eigenbridge_params::field::FieldTag;
use eigenbridge_params::method::PresetMethod;
use eigenbridge_params::params::EigenParams;
use eigenbridge_params::value::FieldValue;
use std::hint::black_box;

fn configured_params(num_target_shifts: usize) -> EigenParams {
    let mut params = EigenParams::new();
    params.n = 100_000;
    params.num_evals = 10;
    params.set_method(PresetMethod::DefaultMinTime);

    let shifts: Vec<f64> = (0..num_target_shifts).map(|i| i as f64 * 0.5).collect();
    params
        .set_field(FieldTag::NumTargetShifts, FieldValue::Int(num_target_shifts as i64))
        .expect("shift count is in range");
    params
        .set_field(FieldTag::TargetShifts, FieldValue::RealArray(shifts))
        .expect("shift slot matches the count");
    params
}

fn bench_get_all_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all_fields");

    for num_shifts in [0_usize, 16, 1024] {
        let params = configured_params(num_shifts);
        group.throughput(Throughput::Elements(FieldTag::ALL.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("shifts", num_shifts),
            &num_shifts,
            |b, _| {
                b.iter(|| {
                    for tag in FieldTag::ALL {
                        let value = params.get_member(black_box(tag.as_raw()));
                        black_box(value).expect("every field is readable");
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_set_all_fields(c: &mut Criterion) {
    let params = configured_params(16);

    // Writing back the current values leaves the record unchanged between
    // iterations.
    let values: Vec<(i32, FieldValue)> = FieldTag::ALL
        .iter()
        .map(|tag| {
            let value = params
                .get_field(*tag)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", tag, e));
            (tag.as_raw(), value)
        })
        .collect();

    let mut group = c.benchmark_group("set_all_fields");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("write_back", |b| {
        let mut params = params.clone();
        b.iter(|| {
            for (label, value) in &values {
                params
                    .set_member(black_box(*label), value.clone())
                    .expect("written values came from the record");
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_get_all_fields, bench_set_all_fields);
criterion_main!(benches);
