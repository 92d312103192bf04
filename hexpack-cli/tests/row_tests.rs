use tempfile::tempdir;

use hexpack_cli::commands::row;
use hexpack_core::assembler::PackageAssembler;
use hexpack_core::checksum::crc8;
use hexpack_core::store::ConfigStore;

fn session_assembler(config_path: &str) -> PackageAssembler {
    PackageAssembler::from_records(ConfigStore::new(config_path).load().last_session)
}

#[test]
fn add_rows_persists_session() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    row::add(config, Some("01"), Some("x")).unwrap();
    row::add(config, Some("0203"), Some("y")).unwrap();

    let asm = session_assembler(config);
    assert_eq!(asm.rows().len(), 2);
    assert_eq!(asm.package().payload.as_ref(), &[0x01, 0x02, 0x03]);
    assert_eq!(asm.checksum(), crc8(&[0x01, 0x02, 0x03]));
}

#[test]
fn add_normalizes_dirty_values() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    row::add(config, Some("a1 zz b2"), None).unwrap();

    let asm = session_assembler(config);
    assert_eq!(asm.rows()[0].value, "A1B2");
    assert!(!asm.rows()[0].invalid);
}

#[test]
fn set_updates_value_and_description() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    row::add(config, Some("01"), Some("old")).unwrap();
    row::set(config, 0, Some("ABC"), Some("new")).unwrap();

    let asm = session_assembler(config);
    assert_eq!(asm.rows()[0].value, "ABC");
    assert!(asm.rows()[0].invalid);
    assert_eq!(asm.rows()[0].description, "new");
    // Odd trailing digit excluded from the derived bytes
    assert_eq!(asm.package().payload.as_ref(), &[0xAB]);
}

#[test]
fn remove_recomputes_checksum() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    row::add(config, Some("01"), None).unwrap();
    row::add(config, Some("02"), None).unwrap();
    row::remove(config, 0).unwrap();

    let asm = session_assembler(config);
    assert_eq!(asm.rows().len(), 1);
    assert_eq!(asm.package().payload.as_ref(), &[0x02]);
    assert_eq!(asm.checksum(), crc8(&[0x02]));
}

#[test]
fn remove_out_of_range_is_an_error() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    row::add(config, Some("01"), None).unwrap();
    assert!(row::remove(config, 5).is_err());

    // Session untouched
    assert_eq!(session_assembler(config).rows().len(), 1);
}

#[test]
fn set_out_of_range_is_an_error() {
    let td = tempdir().unwrap();
    let config = td.path().join("hexpack.json");
    let config = config.to_str().unwrap();

    assert!(row::set(config, 0, Some("01"), None).is_err());
}
