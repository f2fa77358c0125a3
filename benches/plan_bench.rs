// ABOUTME: Criterion benchmarks for plan generation and rendering
// ABOUTME: Measures classification, the full engine pipeline and Markdown/JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planner.
//!
//! Measures free-text classification, end-to-end plan generation across
//! equipment mixes, and rendering of a generated plan.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitplan::form::PlanForm;
use fitplan::render::{render_json, render_markdown, try_generate_plan_text, OutputFormat};
use fitplan::{PlanRecommender, RecommendationEngine, UserProfile};
use fitplan_intelligence::{PlannerConfig, ProfileClassification};

/// Equipment descriptions from empty to every group mentioned
const EQUIPMENT_MIXES: [(&str, &str); 4] = [
    ("none", ""),
    ("single", "dumbbells"),
    ("three", "dumbbells, resistance band, treadmill"),
    ("all", "dumbbell barbell band machine treadmill cycle bodyweight"),
];

fn engine() -> RecommendationEngine {
    RecommendationEngine::with_config(PlannerConfig::default())
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for (label, equipment) in EQUIPMENT_MIXES {
        group.bench_with_input(
            BenchmarkId::new("classify", label),
            &equipment,
            |b, equipment| {
                b.iter(|| {
                    ProfileClassification::classify(
                        black_box(equipment),
                        black_box("lose weight"),
                        black_box("non-veg"),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_generate_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_plan");
    let engine = engine();

    for (label, equipment) in EQUIPMENT_MIXES {
        for goal in ["lose", "gain muscle"] {
            let profile = UserProfile::new(82.0, 176.0)
                .with_goal(goal)
                .with_equipment(equipment)
                .with_diet_preferences("veg")
                .with_wearables(true)
                .with_medical_history("hypertension");
            group.bench_with_input(
                BenchmarkId::new(goal.replace(' ', "_"), label),
                &profile,
                |b, profile| b.iter(|| engine.generate_plan(black_box(profile))),
            );
        }
    }

    let profiles: Vec<UserProfile> = (0..100_u32)
        .map(|i| UserProfile::new(45.0 + f64::from(i % 60), 150.0 + f64::from(i % 45)))
        .collect();
    group.throughput(Throughput::Elements(profiles.len() as u64));
    group.bench_function("batch_100_profiles", |b| {
        b.iter(|| {
            for profile in black_box(&profiles) {
                let _ = engine.generate_plan(profile);
            }
        });
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let engine = engine();
    let profile = UserProfile::new(90.0, 170.0)
        .with_goal("lose")
        .with_equipment("dumbbells, treadmill")
        .with_medical_history("diabetes");
    let plan = engine.generate_plan(&profile).unwrap();

    group.bench_function("markdown", |b| {
        b.iter(|| render_markdown(black_box("Student"), black_box(&plan)));
    });
    group.bench_function("json", |b| b.iter(|| render_json(black_box(&plan))));
    group.bench_function("form_to_markdown", |b| {
        b.iter(|| {
            try_generate_plan_text(
                &engine,
                black_box(PlanForm::default()),
                OutputFormat::Markdown,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_generate_plan,
    bench_rendering
);
criterion_main!(benches);
