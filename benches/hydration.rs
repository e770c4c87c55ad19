use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edubot_lib::dispatch::{build_variables, FormState};
use edubot_lib::personalization::{build_system_instruction, BaseRole};
use edubot_lib::profile::{Language, StudentProfile};
use edubot_lib::templates::{hydrate, TemplateRegistry};
use edubot_lib::tools::ToolId;

fn bench_hydration(c: &mut Criterion) {
    let registry = TemplateRegistry::new();
    let profile = StudentProfile::default();
    let form = FormState {
        query: "Why does ice float?".to_string(),
        ..FormState::for_profile(&profile)
    };
    let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();

    let template = registry.get(ToolId::DoubtSolver).unwrap();
    let vars = build_variables(ToolId::DoubtSolver, &form, &profile, today);

    c.bench_function("hydrate_doubt_solver", |b| {
        b.iter(|| hydrate(black_box(template.body()), black_box(&vars)))
    });

    c.bench_function("build_and_hydrate_all_tools", |b| {
        b.iter(|| {
            for template in registry.iter() {
                let vars = build_variables(template.tool(), &form, &profile, today);
                black_box(hydrate(template.body(), &vars));
            }
        })
    });

    c.bench_function("system_instruction_tamil", |b| {
        b.iter(|| build_system_instruction(BaseRole::Tutor, black_box(&profile), Language::Tamil))
    });
}

criterion_group!(benches, bench_hydration);
criterion_main!(benches);
