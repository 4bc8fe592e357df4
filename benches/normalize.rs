//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
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

use criterion::{black_box, Criterion};
use slicewise::{normalize_index, Slice};

pub fn bench_normalize_index(c: &mut Criterion) {
    c.bench_function("normalize 1000 mixed-sign indices", |b| {
        b.iter(|| {
            for i in -500isize..500 {
                let _ = black_box(normalize_index(black_box(i), 1000));
            }
        });
    });
}

pub fn bench_slice_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Slice");

    group.bench_function("normalize", |b| {
        let spec = Slice::new(-900, 900, 3);
        b.iter(|| black_box(black_box(spec).indices(1000)));
    });

    // Walking the designated indices
    for step in [1isize, 7, -1, -7] {
        group.bench_function(format!("walk_step_{step}"), |b| {
            let indices = Slice::FULL.with_step(step).indices(10_000).unwrap();
            b.iter(|| black_box(indices.iter().sum::<usize>()));
        });
    }

    group.finish();
}
