use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scratch_collections::ExpandableQueue;
use std::collections::VecDeque;

fn bench_queue(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs ExpandableQueue (Enqueue 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ExpandableQueue<i32>", |b| {
            b.iter(|| {
                let mut q: ExpandableQueue<i32> = ExpandableQueue::new();
                for i in 0..n {
                    q.enqueue(black_box(i as i32));
                }
                q
            })
        });
        group.finish();
    }

    {
        // Steady state: the live region keeps wrapping without reallocating.
        let mut group = c.benchmark_group("VecDeque vs ExpandableQueue (Rolling 12 of 16)");
        let mut d_std: VecDeque<i32> = (0..12).collect();
        let mut q_small: ExpandableQueue<i32> = (0..12).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    d_std.push_back(black_box(i as i32));
                    black_box(d_std.pop_front());
                }
            })
        });

        group.bench_function("ExpandableQueue<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    q_small.enqueue(black_box(i as i32));
                    let _ = black_box(q_small.dequeue());
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_queue);
criterion_main!(benches);
