use ecaview_lib::{generate, step, Config, Error as EcaError, InitRow, Row, RuleTable};
use std::error::Error;

#[test]
fn default() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    let mut gen = config.generator()?;
    assert_eq!(gen.rule(), &RuleTable::new(110));
    for row in gen.by_ref().take(config.height) {
        assert_eq!(row.len(), config.width);
    }
    assert_eq!(gen.generation(), Some(config.height as u64 - 1));
    Ok(())
}

#[test]
fn seeded() -> Result<(), Box<dyn Error>> {
    let config = Config::new("W30", 64, 32).set_seed(Some(2019));
    let first: Vec<Row> = config.generator()?.take(100).collect();
    let second: Vec<Row> = config.generator()?.take(100).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let table: RuleTable = "110".parse()?;
    let initial_row: Row = "..o.oo.o...ooo.o..o.".parse()?;
    let first: Vec<Row> = generate(table, initial_row.clone()).take(50).collect();
    let second: Vec<Row> = generate(table, initial_row).take(50).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn rows_follow_step() -> Result<(), Box<dyn Error>> {
    let config = Config::new(45, 33, 10).set_seed(Some(7));
    let table = config.rule_table()?;
    let rows: Vec<Row> = config.generator()?.take(20).collect();
    assert_eq!(rows[0], config.initial_row()?);
    for pair in rows.windows(2) {
        assert_eq!(pair[1], step(&table, &pair[0]));
    }
    Ok(())
}

#[test]
fn far_generation() -> Result<(), Box<dyn Error>> {
    let config = Config::new(110, 32, 10).set_init(InitRow::Center);
    let mut gen = config.generator()?;
    let row = gen.nth(10_000).ok_or("the generator stopped")?;
    assert_eq!(row.len(), 32);
    assert_eq!(gen.generation(), Some(10_000));
    Ok(())
}

#[test]
fn dead_stays_dead() -> Result<(), Box<dyn Error>> {
    // Rule 110 has no birth from an empty neighborhood.
    let config = Config::new(110, 20, 10).set_init(InitRow::Dead);
    for row in config.generator()?.take(10) {
        assert_eq!(row.population(), 0);
    }
    Ok(())
}

#[test]
fn rule_errors() {
    assert_eq!(
        Config::new(-3, 10, 10).generator().err(),
        Some(EcaError::RuleOutOfRange(-3))
    );
    assert_eq!(
        Config::new("xyz", 10, 10).generator().err(),
        Some(EcaError::ParseRuleError(String::from("xyz")))
    );
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn Error>> {
    let config = Config::new("W90", 120, 60)
        .set_init(InitRow::Center)
        .set_scale(2)
        .set_seed(Some(1));
    let json = serde_json::to_string(&config)?;
    let new_config: Config = serde_json::from_str(&json)?;
    assert_eq!(new_config, config);

    let partial: Config = serde_json::from_str(r#"{"rule_string": "30", "init": "center"}"#)?;
    assert_eq!(
        partial,
        Config::default()
            .set_rule_string(30)
            .set_init(InitRow::Center)
    );
    Ok(())
}
