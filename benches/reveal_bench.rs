use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_site::reveal::{PageLayout, Viewport};
use portfolio_site::{render_home, Easing, PortfolioContent, RevealPage, SectionId, SiteConfig};

fn layout() -> PageLayout {
    PageLayout::stacked(&[
        (SectionId::Hero, 900.0),
        (SectionId::Skills, 600.0),
        (SectionId::Projects, 800.0),
        (SectionId::Contact, 700.0),
    ])
    .with_items(SectionId::Projects, 3)
}

fn bench_scroll_and_sample(c: &mut Criterion) {
    let config = SiteConfig::default();

    c.bench_function("scroll_through_page_60fps", |b| {
        b.iter(|| {
            let mut page = RevealPage::new(layout(), &config);
            page.mount(Viewport::new(0.0, 800.0), 0.0);
            // 2 seconds of frames while scrolling to the bottom
            for frame in 0..120 {
                let t = frame as f64 / 60.0;
                page.update_viewport(Viewport::new(t * 1100.0, 800.0), t);
                black_box(page.frame(t));
            }
        })
    });
}

fn bench_easing(c: &mut Criterion) {
    c.bench_function("ease_out_1000_samples", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                sum += Easing::EaseOut.apply(black_box(i as f64 / 1000.0));
            }
            sum
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let content = PortfolioContent::default();
    let config = SiteConfig::default();
    c.bench_function("render_home", |b| {
        b.iter(|| render_home(black_box(&content), &config).unwrap())
    });
}

criterion_group!(benches, bench_scroll_and_sample, bench_easing, bench_render);
criterion_main!(benches);
