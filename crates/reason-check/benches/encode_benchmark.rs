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

use criterion::{criterion_group, criterion_main, Criterion};
use reason_check::cause::{encode, Cause, CauseTag};
use reason_check::check::{is_true, not_null};
use std::hint::black_box;

struct LongTag;

impl CauseTag for LongTag {
    fn name(&self) -> &str {
        "A_RATHER_LONG_USER_DEFINED_ROOT_CAUSE_CONSTANT"
    }
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_builtin", |b| {
        b.iter(|| encode(Some(black_box(&Cause::ConditionNotSatisfied))))
    });
    c.bench_function("encode_default", |b| b.iter(|| encode(black_box(None))));
    c.bench_function("encode_long_user_tag", |b| {
        b.iter(|| encode(Some(black_box(&LongTag))))
    });
}

fn bench_checks(c: &mut Criterion) {
    c.bench_function("not_null_pass", |b| {
        b.iter(|| not_null(black_box(Some(42u64))))
    });
    c.bench_function("is_true_fail", |b| b.iter(|| is_true(black_box(false))));
}

criterion_group!(benches, bench_encode, bench_checks);
criterion_main!(benches);
