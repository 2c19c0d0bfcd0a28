//! Commit aggregation throughput across roster sizes.
//!
//! One full consensus round per iteration: every validator in the roster
//! submits the same state root for height 1 on a fresh KV, ending with
//! the Done transition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paracross_executor::adapters::{MemoryKv, NoopCoins};
use paracross_executor::domain::keys;
use paracross_executor::ports::inbound::{ExecContext, TransactionExecutor};
use paracross_executor::ports::outbound::KvStore;
use paracross_executor::ParacrossExecutor;
use paracross_types::{
    encode, ConfigArray, ConfigItem, ParacrossAction, ParacrossCommitAction, ParacrossNodeStatus,
};

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("node-{i:04}")).collect()
}

fn seed_roster(kv: &MemoryKv, title: &str, members: &[String]) {
    let item = ConfigItem {
        key: format!("paracross-nodes-{title}"),
        arr: Some(ConfigArray {
            value: members.to_vec(),
        }),
    };
    kv.put(&keys::config_nodes(title), &encode(&item).unwrap())
        .unwrap();
}

fn commit_action(title: &str, height: i64, state_hash: &str) -> ParacrossAction {
    ParacrossAction::Commit(ParacrossCommitAction {
        status: Some(ParacrossNodeStatus {
            title: title.to_string(),
            height,
            state_hash: state_hash.to_string(),
        }),
    })
}

fn consensus_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("consensus_round");
    let coins = NoopCoins;

    for size in [4usize, 16, 64, 256] {
        let members = roster(size);
        let executor = ParacrossExecutor::default();
        let action = commit_action("bench", 1, "root");

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let kv = MemoryKv::new();
                seed_roster(&kv, "bench", &members);
                for member in &members {
                    let ctx = ExecContext {
                        kv: &kv,
                        coins: &coins,
                        tx_hash: vec![0; 32],
                        from_addr: member.clone(),
                        block_time: 0,
                        block_height: 1,
                        exec_addr: "paracross".to_string(),
                    };
                    // Votes after Done fall on the stale Record path and
                    // are part of the measured round.
                    let receipt = executor.exec(&ctx, &action).unwrap();
                    black_box(receipt);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, consensus_round);
criterion_main!(benches);
