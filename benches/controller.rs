//! Criterion benchmarks for the controller's event handlers.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use colorcycle::page_model::{PageModel, PageShape};
use colorcycle::time::millis;
use colorcycle::validation::check_name;
use colorcycle::{Controller, DemoConfig};

fn bench_color_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_trigger");
    group.throughput(Throughput::Elements(1));
    group.bench_function("on_color_trigger", |b| {
        let mut ctl = Controller::new(DemoConfig::default(), 42);
        b.iter(|| black_box(ctl.on_color_trigger()));
    });
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let names = ["Al", "Ada Lovelace", "R2D2", "", "  Grace   Hopper  "];
    c.bench_function("check_name", |b| {
        b.iter(|| {
            for n in names {
                black_box(check_name(black_box(n)));
            }
        })
    });
}

fn bench_page_session(c: &mut Criterion) {
    c.bench_function("page_session", |b| {
        b.iter(|| {
            let mut page =
                PageModel::mount(DemoConfig::default(), 7, PageShape::default()).unwrap();
            for _ in 0..10 {
                page.click_trigger();
            }
            page.type_name("Al");
            page.submit();
            page.advance(millis(3300));
            black_box(page.get_state().click_count)
        })
    });
}

criterion_group!(benches, bench_color_trigger, bench_validation, bench_page_session);
criterion_main!(benches);
