use criterion::{black_box, criterion_group, criterion_main, Criterion};
use withbem_classnames::{classes, conditional, resolve, ClassSpec};

fn resolve_flat(c: &mut Criterion) {
    let specs: Vec<ClassSpec> = vec!["card".into(), "card--active".into(), "px-2".into()];

    c.bench_function("resolve_flat", |b| b.iter(|| resolve(black_box(&specs))));
}

fn resolve_nested(c: &mut Criterion) {
    let specs = vec![
        ClassSpec::from("card"),
        classes![
            "card__item",
            conditional! { "selected" => true, "disabled" => false, "variant" => "primary" },
            classes![None::<&str>, "  me-2 d-flex  "],
        ],
    ];

    c.bench_function("resolve_nested", |b| b.iter(|| resolve(black_box(&specs))));
}

fn resolve_json(c: &mut Criterion) {
    let source = r#"["card", {"selected": true, "size": 3}, [null, false, "me-2"]]"#;

    c.bench_function("resolve_json", |b| {
        b.iter(|| {
            let spec = ClassSpec::from_json(black_box(source)).unwrap();
            spec.resolve()
        })
    });
}

criterion_group!(benches, resolve_flat, resolve_nested, resolve_json);
criterion_main!(benches);
