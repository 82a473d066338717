//! Error type tests.

use std::io;
use std::path::PathBuf;

use pipesim_core::common::{LoadError, SimError, WidthError};

#[test]
fn width_error_message() {
    let err = WidthError { value: 0x200, bits: 9 };
    assert_eq!(err.to_string(), "value 0x200 does not fit in 9 bits");
}

#[test]
fn load_errors_carry_line_numbers() {
    let err = LoadError::Parse {
        line: 12,
        message: "unknown mnemonic 'NOP'".to_owned(),
    };
    assert_eq!(err.to_string(), "line 12: unknown mnemonic 'NOP'");

    let err = LoadError::Width {
        line: 3,
        source: WidthError { value: 300, bits: 8 },
    };
    assert!(err.to_string().starts_with("line 3: "));
}

#[test]
fn sim_error_wraps_load_error_transparently() {
    let load = LoadError::Io {
        path: PathBuf::from("missing.s"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    let text = load.to_string();
    let err: SimError = load.into();
    assert_eq!(err.to_string(), text);
    assert!(matches!(err, SimError::Load(LoadError::Io { .. })));
}

#[test]
fn cycle_limit_message() {
    let err = SimError::CycleLimitExceeded { cycles: 1000 };
    assert_eq!(err.to_string(), "no HALT after 1000 cycles");
}

#[test]
fn unreadable_config_names_path_and_keeps_io_source() {
    use std::error::Error as _;

    let err = SimError::ConfigIo {
        path: PathBuf::from("run.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "could not read configuration 'run.json': denied");
    let source = err.source().and_then(|s| s.downcast_ref::<io::Error>());
    assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::PermissionDenied));
}
