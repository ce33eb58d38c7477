use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ncei_daily::{
    catalog, parse_observations, Attributes, DataVariable, Dataset, DatasetWriter, NetcdfWriter,
    VariableMode,
};

fn year_of_core_data() -> (String, Vec<String>) {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut csv = String::from("\"STATION\",\"DATE\",\"PRCP\",\"SNOW\",\"SNWD\",\"TMAX\",\"TMIN\"\n");
    for day in 0..366 {
        let date = start + Duration::days(day);
        csv.push_str(&format!(
            "\"USW00094728\",\"{}\",\"{:.1}\",\"0\",\"0\",\"{:.1}\",\"{:.1}\"\n",
            date.format("%Y-%m-%d"),
            (day % 7) as f64 * 0.8,
            10.0 + (day % 30) as f64,
            (day % 30) as f64 - 5.0
        ));
    }
    let variables = ["TMIN", "TMAX", "PRCP", "SNOW", "SNWD"].map(String::from).to_vec();
    (csv, variables)
}

fn bench_catalog(c: &mut Criterion) {
    let codes = catalog::all_codes(VariableMode::All);
    c.bench_function("catalog_lookup_all", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(catalog::lookup(black_box(code), VariableMode::All).unwrap());
            }
        })
    });
}

fn bench_parse_and_write(c: &mut Criterion) {
    let (csv, variables) = year_of_core_data();
    c.bench_function("parse_observations_year", |b| {
        b.iter(|| parse_observations("USW00094728", black_box(&csv), &variables).unwrap())
    });

    let dataset = parse_observations("USW00094728", &csv, &variables).unwrap();
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("bench.nc");
    c.bench_function("write_netcdf_year", |b| {
        b.iter(|| NetcdfWriter.write(black_box(&dataset), &path).unwrap())
    });

    let wide = Dataset {
        time: dataset.time.clone(),
        variables: (0..150)
            .map(|i| DataVariable {
                name: format!("v{i}"),
                values: vec![Some(1.0); dataset.len()],
                attributes: Attributes::new(),
            })
            .collect(),
        attributes: Attributes::new(),
    };
    c.bench_function("write_netcdf_wide", |b| {
        b.iter(|| NetcdfWriter.write(black_box(&wide), &path).unwrap())
    });
}

criterion_group!(benches, bench_catalog, bench_parse_and_write);
criterion_main!(benches);
