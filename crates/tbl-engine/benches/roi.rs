//! ROI engine benchmarks
//!
//! - Full calculation across projection horizons
//! - Discounting helpers
//! - Summary formatting and template rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use tbl_common::{AnalysisInput, CommonParameters, Project, ProjectData, ProjectInfo};
use tbl_engine::format::ResultsSummary;
use tbl_engine::report::render_template;
use tbl_engine::roi::{compute_project, present_value_of_constant};

fn sample_data(years: u32) -> ProjectData {
    let mut data = ProjectData::default();
    data.financial.operational_efficiencies = 10_000.0;
    data.financial.cost_reductions = 5_000.0;
    data.financial.initial_investment = 20_000.0;
    data.financial.maintenance_costs = 2_000.0;
    data.environmental.energy.reduction = 1_000.0;
    data.environmental.waste.reduction = 2.5;
    data.social.turnover.total_turnover_cost = 90_000.0;
    data.social.turnover_composition.employee_satisfaction_impact = 5.0;
    data.common = CommonParameters::new(8.0, years);
    data
}

// ============ CALCULATION BENCHMARKS ============

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_roi");
    group.measurement_time(Duration::from_secs(5));

    for years in [1u32, 5, 10, 30].iter() {
        group.throughput(Throughput::Elements(u64::from(*years)));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, &years| {
            let data = sample_data(years);
            b.iter(|| compute_project(black_box(&data)));
        });
    }

    group.finish();
}

fn bench_discounting(c: &mut Criterion) {
    let mut group = c.benchmark_group("discounting");

    group.bench_function("present_value_30y", |b| {
        b.iter(|| present_value_of_constant(black_box(13_000.0), black_box(30), black_box(0.08)));
    });

    group.finish();
}

// ============ PRESENTATION BENCHMARKS ============

fn bench_presentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");

    let data = sample_data(10);
    let results = compute_project(&data);

    group.bench_function("summary", |b| {
        b.iter(|| ResultsSummary::from(black_box(&results)));
    });

    let project = Project::new("Bench Project", "Benchmark fixture", None);
    let input = AnalysisInput {
        results: results.clone(),
        inputs: data,
        project: ProjectInfo::from(&project),
    };
    group.bench_function("template_report", |b| {
        b.iter(|| render_template(black_box(&input)));
    });

    group.finish();
}

criterion_group!(calculation, bench_compute, bench_discounting);
criterion_group!(presentation, bench_presentation);
criterion_main!(calculation, presentation);
