//! Benchmarks for region extraction.
//!
//! - open: parse a 10-page document and compute page geometry
//! - page: interpret one dense page
//! - region: extract a quarter-page region from every page

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lopdf::{Object, Stream, dictionary};
use regiontext::{Document, PointSpace, Region, TextOptions, extract_text};

/// Build a PDF where each content stream becomes one page.
fn build_pdf(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
        });
        kids.push(Object::Reference(page_id));
    }
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => count }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save benchmark PDF");
    buf
}

/// 50 lines of text filling the page.
fn dense_page(page: usize) -> Vec<u8> {
    let mut content = String::from("BT /F1 10 Tf 14 TL 50 750 Td\n");
    for line in 0..50 {
        content.push_str(&format!(
            "(Page {page} line {line}: the quick brown fox jumps over the lazy dog) '\n"
        ));
    }
    content.push_str("ET\n");
    content.into_bytes()
}

fn fixture() -> Vec<u8> {
    let pages: Vec<Vec<u8>> = (1..=10).map(dense_page).collect();
    build_pdf(&pages)
}

fn bench_open(c: &mut Criterion) {
    let pdf = fixture();
    c.bench_function("open/10_pages", |b| {
        b.iter(|| Document::open(black_box(&pdf)).expect("open"));
    });
}

fn bench_page(c: &mut Criterion) {
    let pdf = fixture();
    let doc = Document::open(&pdf).expect("open");
    c.bench_function("page/interpret_dense", |b| {
        b.iter(|| doc.page(black_box(0)).expect("page"));
    });
}

fn bench_region(c: &mut Criterion) {
    let pdf = fixture();
    let doc = Document::open(&pdf).expect("open");
    let region = Region::<PointSpace>::new(0.0, 0.0, 306.0, 396.0);
    let options = TextOptions::default();
    c.bench_function("region/quarter_page_all_pages", |b| {
        b.iter(|| extract_text(&doc, black_box(&region), &options).expect("extract"));
    });
}

criterion_group!(benches, bench_open, bench_page, bench_region);
criterion_main!(benches);
