criterion::criterion_main!(tokenize::benches, decode::benches);

use syb_tsv::record;

fn benchid(base: KvPairs, last: KvPairs) -> String {
    format!("{base},{last}")
}

#[derive(Clone, Copy, Debug)]
struct KvPair<'a>(&'a str, &'a str);

impl std::fmt::Display for KvPair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{k}={v}", k = self.0, v = self.1)
    }
}

#[derive(Clone, Copy, Debug)]
struct KvPairs<'a>(&'a [KvPair<'a>]);

impl std::fmt::Display for KvPairs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut delim = "";
        for pair in self.0 {
            write!(f, "{delim}{pair}")?;
            delim = ",";
        }
        Ok(())
    }
}

record! {
    #[derive(Debug, Default)]
    pub struct Visit {
        pub name: String => [tsv = "name"],
        pub age: u32 => [tsv = "age"],
        pub range: i64 => [tsv = "range"],
        pub active: bool => [tsv = ",col:3"],
        pub note: String => [tsv = "-"],
    }
}

/// Header plus `rows` data rows, every fifth one quoted
fn sample(rows: usize) -> String {
    let mut data = String::from("name\tage\trange\tactive\n");
    for i in 0..rows {
        match i % 5 {
            0 => data.push_str(&format!("\"visitor\t{i}\"\t{}\t-{i}\ttrue\n", i % 90)),
            _ => data.push_str(&format!("visitor {i}\t{}\t{i}\t0\n", i % 90)),
        }
    }
    data
}

const ROWS: [usize; 2] = [100, 10_000];

mod tokenize {
    criterion::criterion_group!(benches, bench_rows);

    use criterion::{black_box, Criterion};
    use syb_tsv::{dsv::Rows, ReaderConfig};

    fn bench_rows(c: &mut Criterion) {
        use super::{benchid, sample, KvPair, KvPairs, ROWS};

        for rows in ROWS {
            let data = sample(rows);
            let rows = rows.to_string();
            let id = benchid(
                KvPairs(&[KvPair("operation", "tokenize")]),
                KvPairs(&[KvPair("rows", &rows)]),
            );
            c.bench_function(&id, |bench| {
                bench.iter(|| {
                    let n = Rows::new(data.as_bytes(), ReaderConfig::default())
                        .map(|row| row.unwrap().len())
                        .sum::<usize>();
                    black_box(n)
                });
            });
        }
    }
}

mod decode {
    criterion::criterion_group!(benches, bench_decode, bench_records);

    use criterion::{black_box, Criterion};
    use syb_tsv::Reader;

    use super::{benchid, sample, KvPair, KvPairs, Visit, ROWS};

    fn bench_decode(c: &mut Criterion) {
        for rows in ROWS {
            let data = sample(rows);
            let rows = rows.to_string();
            let id = benchid(
                KvPairs(&[KvPair("operation", "decode"), KvPair("dest", "reused")]),
                KvPairs(&[KvPair("rows", &rows)]),
            );
            c.bench_function(&id, |bench| {
                bench.iter(|| {
                    let mut reader = Reader::new(data.as_bytes());
                    reader.read_header().unwrap();
                    let mut visit = Visit::default();
                    while reader.advance() {
                        reader.decode(&mut visit).unwrap();
                    }
                    black_box(visit)
                });
            });
        }
    }

    fn bench_records(c: &mut Criterion) {
        for rows in ROWS {
            let data = sample(rows);
            let rows = rows.to_string();
            let id = benchid(
                KvPairs(&[KvPair("operation", "decode"), KvPair("dest", "fresh")]),
                KvPairs(&[KvPair("rows", &rows)]),
            );
            c.bench_function(&id, |bench| {
                bench.iter(|| {
                    let mut reader = Reader::new(data.as_bytes());
                    reader.read_header().unwrap();
                    let total: u64 = reader
                        .records::<Visit>()
                        .map(|v| u64::from(v.unwrap().age))
                        .sum();
                    black_box(total)
                });
            });
        }
    }
}
