use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::runtime::Runtime;
use udpecho::client::ECHO_PAYLOAD;
use udpecho::common::spawn_echo_server;
use udpecho::counter::SourceCounter;

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_counter");

    // Spread adds over different numbers of distinct sources
    let source_counts = vec![1, 8, 64];

    for sources in source_counts {
        group.bench_with_input(BenchmarkId::new("add", sources), &sources, |b, &sources| {
            let counter = SourceCounter::new();
            let addrs: Vec<SocketAddr> = (0..sources)
                .map(|i| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 20000 + i as u16))
                .collect();
            let mut next = 0;
            b.iter(|| {
                counter.add(black_box(addrs[next % addrs.len()]));
                next += 1;
            });
        });
    }

    group.bench_function("add_take", |b| {
        let counter = SourceCounter::new();
        let source = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 20000);
        b.iter(|| {
            counter.add(black_box(source));
            black_box(counter.take())
        });
    });

    group.finish();
}

fn bench_echo_roundtrip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("echo_roundtrip");
    group.throughput(Throughput::Bytes(ECHO_PAYLOAD.len() as u64));

    group.bench_function("udp_loopback", |b| {
        b.to_async(&rt).iter(|| async {
            let (server_handle, addr, _counter) = spawn_echo_server().await.unwrap();

            let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
            socket.send_to(black_box(ECHO_PAYLOAD), addr).await.unwrap();

            let mut buffer = vec![0; 64];
            let (n, _) = socket.recv_from(&mut buffer).await.unwrap();
            assert_eq!(n, ECHO_PAYLOAD.len());

            server_handle.abort();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_counter, bench_echo_roundtrip);
criterion_main!(benches);
