use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sourcemap::{deserialize, serialize, MethodSource, Source};
use sourcemap_reflect::{ClassEntity, FunctionEntity, Namespace, ReflectConfig, Reflector};

fn populated_namespace(classes: usize) -> Namespace {
    let mut namespace = Namespace::new(ReflectConfig::default());
    for i in 0..classes {
        namespace.add_class(
            ClassEntity::new(format!("App\\Class{i}"))
                .with_methods((0..10).map(|m| FunctionEntity::new(format!("method{m}"))).collect()),
        );
    }
    namespace
}

fn bench_describe(c: &mut Criterion) {
    let namespace = populated_namespace(10);
    let source = MethodSource::new(namespace.reflect_method("App\\Class5", "method5").unwrap());

    c.bench_function("describe_method", |b| {
        b.iter(|| black_box(source.describe().unwrap()));
    });
}

fn bench_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("restore");

    for size in [100, 1000, 10_000].iter() {
        let namespace = populated_namespace(*size);
        let class = format!("App\\Class{}", size / 2);
        let source = MethodSource::new(namespace.reflect_method(&class, "method5").unwrap());
        let bytes = serialize(&source).unwrap();

        group.bench_with_input(BenchmarkId::new("method", size), size, |b, _| {
            b.iter(|| black_box(deserialize(&bytes, &namespace).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_describe, bench_restore);
criterion_main!(benches);
