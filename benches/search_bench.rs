// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use linippet::fuzzy::{align, score, search, CancelToken};
use linippet::snippet::Snippet;

const TEMPLATES: &[&str] = &[
    "docker run -d -p ${{port}} ${{image}}",
    "sudo docker-compose up -d --build ${{service}}",
    "git branch -a | rg ${{pattern}}",
    "git rebase -i ${{branch}}",
    "cat ~/.aws/config",
    "column -t -s ',' ${{csv_file}} | awk '{print $1, $2}' | sort",
    "kubectl get pods -n ${{namespace}} -o wide",
    "find . -name '${{glob}}' -type f -mtime -${{days:7}}",
    "ssh -i ~/.ssh/${{key}} ${{user}}@${{host}}",
    "tar -czvf ${{archive}}.tar.gz ${{dir}}",
];

fn candidates(count: usize) -> Vec<Snippet> {
    (0..count)
        .map(|i| Snippet {
            id: format!("{i:08x}"),
            snippet: format!("{} # {}", TEMPLATES[i % TEMPLATES.len()], i),
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for count in [100usize, 500, 1_000, 5_000] {
        let snippets = candidates(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &snippets, |b, snippets| {
            let cancel = CancelToken::new();
            b.iter(|| black_box(search(&cancel, black_box("docker"), snippets)));
        });
    }
    group.finish();
}

fn bench_multi_term(c: &mut Criterion) {
    let snippets = candidates(1_000);
    let cancel = CancelToken::new();
    let mut group = c.benchmark_group("multi_term");
    for query in ["git br", "c aws", "k get pods wide"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| black_box(search(&cancel, query, &snippets)));
        });
    }
    group.finish();
}

fn bench_single_pair(c: &mut Criterion) {
    let text = TEMPLATES[5];
    c.bench_function("align_and_score", |b| {
        b.iter(|| {
            let positions = align(black_box("awk"), black_box(text));
            black_box(positions.map(|p| score("awk", text, &p)))
        });
    });
}

criterion_group!(benches, bench_search, bench_multi_term, bench_single_pair);
criterion_main!(benches);
