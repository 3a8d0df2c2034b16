use criterion::{Criterion, black_box, criterion_group, criterion_main};

use perkhub_theme::{CompanySettings, CompanyTheme, InMemoryStyleSink, apply_theme, hex_to_hsl};

fn bench_hex_to_hsl(c: &mut Criterion) {
    let inputs = ["#0f766e", "#FFFFFF", "#000000", "#FF0001", "#9D4EDD"];

    c.bench_function("hex_to_hsl", |b| {
        b.iter(|| {
            for hex in inputs {
                let _ = hex_to_hsl(black_box(hex));
            }
        })
    });
}

fn bench_derive_and_apply(c: &mut Criterion) {
    let settings = CompanySettings {
        primary_color: Some("#1E3A5F".to_string()),
        secondary_color: Some("#3A86FF".to_string()),
        accent_color: Some("#FFB703".to_string()),
        company_name: Some("Acme Corp".to_string()),
        logo_url: Some("https://cdn.example.com/acme.svg".to_string()),
        hero_title: None,
        hero_subtitle: None,
    };

    c.bench_function("derive_company_theme", |b| {
        b.iter(|| CompanyTheme::derive(black_box(&settings)))
    });

    c.bench_function("apply_company_theme", |b| {
        let theme = CompanyTheme::derive(&settings).theme;
        let mut sink = InMemoryStyleSink::new();
        b.iter(|| apply_theme(black_box(&theme), &mut sink))
    });
}

criterion_group!(benches, bench_hex_to_hsl, bench_derive_and_apply);
criterion_main!(benches);
