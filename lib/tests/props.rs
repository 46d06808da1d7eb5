use ecaview_lib::{build_rule_table, generate, step, Pattern, Row, RuleTable};
use proptest::prelude::*;

fn row() -> impl Strategy<Value = Row> {
    prop::collection::vec(any::<bool>(), 0..64).prop_map(Row::from)
}

proptest! {
    /// Every rule maps exactly the 8 canonical patterns, in order.
    #[test]
    fn table_domain(rule in 0..=255i64) {
        let table = build_rule_table(rule).unwrap();
        let patterns: Vec<Pattern> = table.entries().map(|(p, _)| p).collect();
        prop_assert_eq!(patterns, Pattern::ALL.to_vec());
        prop_assert_eq!(table, build_rule_table(rule).unwrap());
        prop_assert_eq!(i64::from(table.rule_number()), rule);
    }

    #[test]
    fn out_of_range(rule in prop_oneof![i64::MIN..0, 256..i64::MAX]) {
        prop_assert!(build_rule_table(rule).is_err());
    }

    #[test]
    fn step_preserves_length(rule: u8, row in row()) {
        let next = step(&RuleTable::new(rule), &row);
        prop_assert_eq!(next.len(), row.len());
    }

    /// Rules 0 and 255 forget the previous row entirely.
    #[test]
    fn constant_rules(row in row()) {
        let dead = step(&RuleTable::new(0), &row);
        prop_assert!(dead.iter().all(|s| !s.is_alive()));
        let alive = step(&RuleTable::new(255), &row);
        prop_assert_eq!(alive.population(), row.len());
    }

    #[test]
    fn deterministic(rule: u8, row in row(), k in 0..32usize) {
        let table = RuleTable::new(rule);
        let first: Vec<Row> = generate(table, row.clone()).take(k).collect();
        let second: Vec<Row> = generate(table, row).take(k).collect();
        prop_assert_eq!(first.len(), k);
        prop_assert_eq!(first, second);
    }

    /// Mirroring a rule mirrors its evolution.
    #[test]
    fn mirrored(rule: u8, row in row()) {
        let table = RuleTable::new(rule);
        let reversed: Row = row.iter().rev().copied().collect();
        let next: Row = step(&table, &row).iter().rev().copied().collect();
        prop_assert_eq!(step(&table.mirrored(), &reversed), next);
    }
}
