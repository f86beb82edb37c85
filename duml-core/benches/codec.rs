use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use duml_core::{checksum, Packet, PacketFields};
use rand::{rngs::StdRng, SeedableRng};

fn packet_with_payload(len: usize) -> Packet {
    let mut rng = StdRng::seed_from_u64(0);
    let fields = PacketFields {
        source_raw: Some(0x2A),
        destination_raw: Some(0x28),
        command_type_raw: Some(0x40),
        command: Some(0x5B),
        command_payload: Some(Bytes::from(vec![0xA5u8; len])),
        ..Default::default()
    };

    match Packet::new(fields, &mut rng) {
        Ok(packet) => packet,
        Err(err) => panic!("bench packet: {err}"),
    }
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    let data = vec![0x5Au8; 1021];
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("checksum16_1kb", |b| {
        b.iter(|| black_box(checksum::checksum16(black_box(&data))));
    });
    group.bench_function("checksum8_header", |b| {
        b.iter(|| black_box(checksum::checksum8(black_box(&[0x55, 0x0E, 0x04]))));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let small = packet_with_payload(1).encode();
    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("decode_14b", |b| {
        b.iter(|| black_box(Packet::decode(&small).unwrap()));
    });

    let large = packet_with_payload(1010).encode();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("decode_1023b", |b| {
        b.iter(|| black_box(Packet::decode(&large).unwrap()));
    });

    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");

    let mut packet = packet_with_payload(256);
    group.bench_function("set_sequence_id_256b", |b| {
        let mut sequence = 0u16;
        b.iter(|| {
            sequence = sequence.wrapping_add(1);
            packet.set_sequence_id(sequence);
            black_box(packet.checksum());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_checksum, bench_decode, bench_mutation);
criterion_main!(benches);
