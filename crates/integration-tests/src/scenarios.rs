//! Multi-validator consensus rounds driven through the executor
//! entrypoint.

#[cfg(test)]
mod tests {
    use paracross_executor::adapters::{MemoryKv, NoopCoins};
    use paracross_executor::domain::keys;
    use paracross_executor::ports::inbound::{ExecContext, TransactionExecutor};
    use paracross_executor::ports::outbound::KvStore;
    use paracross_executor::{state, ParacrossExecutor, ParacrossResult};
    use paracross_types::{
        decode, encode, CommitLog, CommitStatus, ConfigArray, ConfigItem, DoneLog, LogKind,
        ParacrossAction, ParacrossCommitAction, ParacrossNodeStatus, Receipt,
    };

    const COINS: NoopCoins = NoopCoins;

    // =========================================================================
    // FIXTURES
    // =========================================================================

    /// One commit transaction: (submitter, title, height, state root).
    type Tx = (&'static str, &'static str, i64, &'static str);

    fn configure_roster(kv: &MemoryKv, title: &str, members: &[&str]) {
        let item = ConfigItem {
            key: format!("paracross-nodes-{title}"),
            arr: Some(ConfigArray {
                value: members.iter().map(|m| m.to_string()).collect(),
            }),
        };
        kv.put(&keys::config_nodes(title), &encode(&item).unwrap())
            .unwrap();
    }

    fn submit(
        executor: &ParacrossExecutor,
        kv: &MemoryKv,
        (from, title, height, hash): Tx,
    ) -> ParacrossResult<Receipt> {
        let ctx = ExecContext {
            kv,
            coins: &COINS,
            tx_hash: vec![0xCD; 32],
            from_addr: from.to_string(),
            block_time: 1_600_000_000,
            block_height: 100,
            exec_addr: "paracross-exec".to_string(),
        };
        let action = ParacrossAction::Commit(ParacrossCommitAction {
            status: Some(ParacrossNodeStatus {
                title: title.to_string(),
                height,
                state_hash: hash.to_string(),
            }),
        });
        executor.exec(&ctx, &action)
    }

    /// Run a transaction stream over a fresh KV with the four-node
    /// roster, returning the KV and every receipt (None for rejections).
    fn run_stream(txs: &[Tx]) -> (MemoryKv, Vec<Option<Receipt>>) {
        let kv = MemoryKv::new();
        configure_roster(&kv, "game", &["A", "B", "C", "D"]);
        let executor = ParacrossExecutor::default();

        let receipts = txs
            .iter()
            .map(|tx| submit(&executor, &kv, *tx).ok())
            .collect();
        (kv, receipts)
    }

    fn log_kinds(receipt: &Receipt) -> Vec<LogKind> {
        receipt.logs.iter().map(|log| log.kind).collect()
    }

    // =========================================================================
    // THE FOUR-VALIDATOR ROUND
    // =========================================================================

    #[test]
    fn test_full_consensus_round() {
        let kv = MemoryKv::new();
        configure_roster(&kv, "game", &["A", "B", "C", "D"]);
        let executor = ParacrossExecutor::default();

        // Two matching votes: still committing, cursor parked.
        let r1 = submit(&executor, &kv, ("A", "game", 1, "h")).unwrap();
        assert_eq!(log_kinds(&r1), [LogKind::Commit]);
        let r2 = submit(&executor, &kv, ("B", "game", 1, "h")).unwrap();
        assert_eq!(log_kinds(&r2), [LogKind::Commit]);
        assert_eq!(state::get_cursor(&kv, "game").unwrap().height, 0);

        // The third vote crosses 2/3 of four: Done follows Commit in the
        // same receipt and the cursor advances.
        let r3 = submit(&executor, &kv, ("C", "game", 1, "h")).unwrap();
        assert_eq!(log_kinds(&r3), [LogKind::Commit, LogKind::Done]);
        assert_eq!(state::get_cursor(&kv, "game").unwrap().height, 1);

        let done: DoneLog = decode(&r3.logs[1].payload).unwrap();
        assert_eq!(done.counts, [3, 3, 4]);
        assert_eq!(done.title, "game");
        assert_eq!(done.height, 1);
        assert_eq!(done.state_hash, "h");

        // The straggler's vote is recorded but cannot disturb the
        // finalized state.
        let before = kv.dump();
        let r4 = submit(&executor, &kv, ("D", "game", 1, "h")).unwrap();
        assert_eq!(log_kinds(&r4), [LogKind::Record]);
        assert!(r4.kv.is_empty());
        assert_eq!(kv.dump(), before);

        // Skipping a height is a rejection: 3 is future while 2 is open.
        assert!(submit(&executor, &kv, ("A", "game", 3, "h")).is_err());

        // An outsider is a rejection at the open height too.
        assert!(submit(&executor, &kv, ("E", "game", 2, "h")).is_err());
        assert_eq!(kv.dump(), before);
    }

    #[test]
    fn test_plurality_winner_at_next_height() {
        let kv = MemoryKv::new();
        configure_roster(&kv, "game", &["A", "B", "C", "D"]);
        let executor = ParacrossExecutor::default();
        for node in ["A", "B", "C"] {
            submit(&executor, &kv, (node, "game", 1, "h")).unwrap();
        }

        // Height 2 splits: one vote for "x" first, then three for "y".
        submit(&executor, &kv, ("A", "game", 2, "x")).unwrap();
        submit(&executor, &kv, ("B", "game", 2, "y")).unwrap();
        let r3 = submit(&executor, &kv, ("C", "game", 2, "y")).unwrap();
        assert_eq!(log_kinds(&r3), [LogKind::Commit]);

        let r4 = submit(&executor, &kv, ("D", "game", 2, "y")).unwrap();
        assert_eq!(log_kinds(&r4), [LogKind::Commit, LogKind::Done]);

        let done: DoneLog = decode(&r4.logs[1].payload).unwrap();
        assert_eq!(done.counts, [3, 4, 4]);
        // "y" wins even though "x" arrived first.
        assert_eq!(done.state_hash, "y");
        assert_eq!(state::get_cursor(&kv, "game").unwrap().height, 2);

        // The dissenting vote stays in the frozen record.
        let stat = state::get_agg(&kv, "game", 2).unwrap().unwrap();
        assert_eq!(stat.commit_count(), 4);
        assert_eq!(stat.details.addrs.len(), stat.details.state_hash.len());
        assert!(stat.details.state_hash.contains(&"x".to_string()));
    }

    // =========================================================================
    // CROSS-TRANSACTION INVARIANTS
    // =========================================================================

    #[test]
    fn test_cursor_is_monotonic_across_heights() {
        let kv = MemoryKv::new();
        configure_roster(&kv, "game", &["A", "B", "C", "D"]);
        let executor = ParacrossExecutor::default();

        let mut last = 0;
        for height in 1..=5 {
            for node in ["A", "B", "C"] {
                submit(&executor, &kv, (node, "game", height, "h")).unwrap();
                let cursor = state::get_cursor(&kv, "game").unwrap().height;
                assert!(cursor >= last);
                last = cursor;
            }
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn test_done_record_stays_frozen() {
        let kv = MemoryKv::new();
        configure_roster(&kv, "game", &["A", "B", "C", "D"]);
        let executor = ParacrossExecutor::default();
        for node in ["A", "B", "C"] {
            submit(&executor, &kv, (node, "game", 1, "h")).unwrap();
        }
        let frozen = state::get_agg(&kv, "game", 1).unwrap().unwrap();
        assert_eq!(frozen.status, CommitStatus::Done);

        // Late vote, duplicate vote, and an open next height: none of
        // them touch the height-1 record.
        submit(&executor, &kv, ("D", "game", 1, "other")).unwrap();
        let _ = submit(&executor, &kv, ("A", "game", 1, "other"));
        submit(&executor, &kv, ("A", "game", 2, "h2")).unwrap();

        assert_eq!(state::get_agg(&kv, "game", 1).unwrap().unwrap(), frozen);
    }

    #[test]
    fn test_replay_is_byte_identical() {
        let stream: &[Tx] = &[
            ("A", "game", 1, "h"),
            ("B", "game", 1, "h"),
            ("E", "game", 1, "h"), // rejected: not a member
            ("C", "game", 1, "h"), // Done
            ("D", "game", 1, "h"), // Record
            ("A", "game", 2, "x"),
            ("B", "game", 2, "y"),
            ("B", "game", 2, "y"), // rejected: duplicate
            ("C", "game", 2, "y"),
            ("D", "game", 2, "y"), // Done
        ];

        let (kv1, receipts1) = run_stream(stream);
        let (kv2, receipts2) = run_stream(stream);

        assert_eq!(kv1.dump(), kv2.dump());
        assert_eq!(receipts1, receipts2);

        // The concatenated log stream is identical as well.
        let logs1: Vec<_> = receipts1.iter().flatten().flat_map(|r| &r.logs).collect();
        let logs2: Vec<_> = receipts2.iter().flatten().flat_map(|r| &r.logs).collect();
        assert_eq!(logs1, logs2);
    }

    #[test]
    fn test_commit_log_chain_reconstructs_record() {
        // The prev/current pairs in consecutive Commit logs chain: each
        // log's prev equals the previous log's current.
        let stream: &[Tx] = &[
            ("A", "game", 1, "h"),
            ("B", "game", 1, "h"),
            ("C", "game", 1, "h"),
        ];
        let (_, receipts) = run_stream(stream);

        let commits: Vec<CommitLog> = receipts
            .iter()
            .flatten()
            .map(|r| decode(&r.logs[0].payload).unwrap())
            .collect();

        assert!(commits[0].prev.is_none());
        for pair in commits.windows(2) {
            assert_eq!(pair[1].prev.as_ref(), Some(&pair[0].current));
        }
        assert_eq!(commits[2].current.commit_count(), 3);
    }
}
