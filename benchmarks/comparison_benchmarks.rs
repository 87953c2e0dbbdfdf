#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: http-chars table scans vs the `http` crate vs `matches!`
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const HEADER_NAMES: &[&str] = &[
    "Host",
    "User-Agent",
    "Accept",
    "Accept-Encoding",
    "Accept-Language",
    "Cache-Control",
    "Connection",
    "Content-Type",
    "Content-Length",
    "X-Forwarded-For",
    "X-Request-Id",
    "Sec-Fetch-Mode",
];

const HEADER_VALUES: &[&str] = &[
    "api.example.com:8443",
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    "gzip, deflate, br, zstd",
    "en-US,en;q=0.5",
    "no-cache",
    "keep-alive",
    "application/json; charset=utf-8",
    "1048576",
    "203.0.113.195, 70.41.3.18, 150.172.238.178",
    "f058ebd6-02f7-4d3f-942e-904344e8cde5",
    "navigate",
];

/// Branching reference implementation of tchar
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

fn bench_token_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("token");

    group.bench_function("http_chars", |b| {
        b.iter(|| {
            for name in HEADER_NAMES {
                black_box(http_chars::index_of_invalid_token_char(black_box(*name)));
            }
        });
    });

    group.bench_function("http_crate", |b| {
        b.iter(|| {
            for name in HEADER_NAMES {
                black_box(http::HeaderName::from_bytes(black_box(name.as_bytes())).is_ok());
            }
        });
    });

    group.bench_function("matches", |b| {
        b.iter(|| {
            for name in HEADER_NAMES {
                black_box(black_box(name.as_bytes()).iter().position(|&c| !is_tchar(c)));
            }
        });
    });

    group.finish();
}

fn bench_field_value_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_value");

    group.bench_function("http_chars", |b| {
        b.iter(|| {
            for value in HEADER_VALUES {
                black_box(http_chars::index_of_invalid_field_value_char(black_box(*value)));
            }
        });
    });

    group.bench_function("http_crate", |b| {
        b.iter(|| {
            for value in HEADER_VALUES {
                black_box(http::HeaderValue::from_bytes(black_box(value.as_bytes())).is_ok());
            }
        });
    });

    group.bench_function("matches", |b| {
        b.iter(|| {
            for value in HEADER_VALUES {
                black_box(
                    black_box(value.as_bytes())
                        .iter()
                        .position(|&c| !(0x20..=0x7E).contains(&c)),
                );
            }
        });
    });

    group.finish();
}

fn bench_authority_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("authority");
    let input = "user:password@api.example.com:8443";

    group.bench_function("http_chars_scan", |b| {
        b.iter(|| http_chars::index_of_invalid_authority_char(black_box(input)));
    });

    group.bench_function("http_chars_check", |b| {
        b.iter(|| http_chars::check_authority(black_box(input.as_bytes())).unwrap());
    });

    group.bench_function("http_crate", |b| {
        b.iter(|| http::uri::Authority::try_from(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_invalid_early(c: &mut Criterion) {
    let mut group = c.benchmark_group("invalid_early");
    let long_bad = format!("X Bad{}", "-Header".repeat(64));

    group.bench_function("http_chars", |b| {
        b.iter(|| http_chars::index_of_invalid_token_char(black_box(long_bad.as_str())));
    });

    group.bench_function("http_crate", |b| {
        b.iter(|| http::HeaderName::from_bytes(black_box(long_bad.as_bytes())).is_err());
    });

    group.finish();
}

fn bench_utf16(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf16");
    let names: Vec<Vec<u16>> = HEADER_NAMES
        .iter()
        .map(|name| name.encode_utf16().collect())
        .collect();

    group.bench_function("http_chars", |b| {
        b.iter(|| {
            for name in &names {
                black_box(http_chars::index_of_invalid_token_char(black_box(name)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_token_all,
    bench_field_value_all,
    bench_authority_all,
    bench_invalid_early,
    bench_utf16
);

criterion_main!(benches);
