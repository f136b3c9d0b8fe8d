use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sarf_core::{
    conjugate, from_buckwalter, ConjugationParams, Gender, Numerus, Person, Stem, Stem1Context,
    Tense, VerbRoot, Vowel,
};
use sarf_reverse::ReverseConjugator;

fn full_table(root: &VerbRoot, stem: Stem, context: Option<Stem1Context>) {
    for tense in [Tense::Perfect, Tense::Present] {
        for person in Person::ALL {
            for gender in Gender::ALL {
                for numerus in Numerus::ALL {
                    let mut params = ConjugationParams::new(stem, tense)
                        .person(person)
                        .gender(gender)
                        .numerus(numerus);
                    params.stem1_context = context;
                    let _ = conjugate(root, &params);
                }
            }
        }
    }
}

fn bench_conjugate(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugate_table");
    let context = Some(Stem1Context::new(Vowel::Fatha, Vowel::Kasra));

    for (name, root) in [("sound", "كتب"), ("hollow", "بيع"), ("defective", "رمي")] {
        let root: VerbRoot = root.parse().unwrap();
        group.bench_function(BenchmarkId::new("stem1", name), |b| {
            b.iter(|| full_table(&root, Stem::new(1).unwrap(), context))
        });
        group.bench_function(BenchmarkId::new("stem10", name), |b| {
            b.iter(|| full_table(&root, Stem::new(10).unwrap(), None))
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = ReverseConjugator::default();
    let mut group = c.benchmark_group("analyze");

    for text in ["yuEd", "qAla", "Aisotakotaba"] {
        let form = from_buckwalter(text).unwrap();
        group.bench_function(BenchmarkId::new("form", text), |b| {
            b.iter(|| analyzer.analyze(&form))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conjugate, bench_analyze);
criterion_main!(benches);
