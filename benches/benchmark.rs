use beast_comments::extract::{AnnotationExtractor, ExtractConfig};
use beast_comments::model::Table;
use beast_comments::model::set_transform::transform_sets;
use beast_comments::parse_annotation;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const VERTEX_COMMENTS: &[(&str, &str)] = &[
    (
        "short",
        "&height_median=47.571176094511124,posterior=1.0,rate=0.0012",
    ),
    (
        "hpd",
        "&height=47.09,height_95%_HPD={40.05717565800388,70.61032474932166},\
         height_median=47.571176094511124,height_range={38.1,81.7},length=3.2,",
    ),
    (
        "discrete",
        "&state=Otago,state.prob=0.61,state.set={Otago,Canterbury,Southland,Westland},\
         state.set.prob={0.61,0.2,0.15,0.04},height_95%_HPD={1.05,2.61}",
    ),
];

const NUM_VERTICES: usize = 500;

fn parse_comments(c: &mut Criterion) {
    for (name, comment) in VERTEX_COMMENTS {
        c.bench_function(name, |b| {
            b.iter(|| parse_annotation(black_box(comment)).unwrap());
        });
    }
}

fn discrete_table() -> Table {
    let (_, comment) = VERTEX_COMMENTS[2];
    let config = ExtractConfig::default().with_set_transform(false);
    let mut extractor = AnnotationExtractor::new(config);
    for i in 0..NUM_VERTICES {
        extractor.add_comment(comment, &format!("v{i}")).unwrap();
    }
    extractor.into_table()
}

fn extract_tree(c: &mut Criterion) {
    let (_, comment) = VERTEX_COMMENTS[2];
    c.bench_function("extract", |b| {
        b.iter(|| {
            let mut extractor = AnnotationExtractor::new(ExtractConfig::default());
            for i in 0..NUM_VERTICES {
                extractor.add_comment(comment, &format!("v{i}")).unwrap();
            }
            extractor.into_rows()
        });
    });

    let table = discrete_table();
    c.bench_function("transform_sets", |b| {
        b.iter(|| {
            let mut table = table.clone();
            transform_sets(&mut table);
            table
        });
    });
}

criterion_group!(parsing, parse_comments);
criterion_group! {
    name = table;
    config = Criterion::default().sample_size(20);
    targets = extract_tree
}
criterion_main!(parsing, table);
