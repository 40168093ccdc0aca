use crate::evaluator::Evaluator;
use crate::numfmt::NumberFormat;
use crate::program::{Program, ProgramError};

#[test]
fn test_json_format() {
    let program = Program::from(["3", "4.5", "+", "√"]);
    let json = program.to_json().unwrap();
    assert_eq!(json, r#"["3","4.5","+","√"]"#);
    assert_eq!(Program::from_json(&json).unwrap(), program);
}

#[test]
fn test_json_rejects_non_lists() {
    match Program::from_json(r#"{"program": ["3"]}"#) {
        Err(ProgramError::Json(_)) => (),
        other => panic!("expected json error, got {:?}", other),
    }
    match Program::from_json(r#"[3, "+"]"#) {
        Err(ProgramError::Json(_)) => (),
        other => panic!("expected json error, got {:?}", other),
    }
}

#[test]
fn test_save_and_load() -> Result<(), ProgramError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("calc.json");

    let mut brain = Evaluator::new();
    brain.push_operand(10.0);
    brain.push_operand(2.0);
    brain.perform_operation("÷");
    brain.program().save(&path)?;

    let mut restored = Evaluator::new();
    restored.load_program(&Program::load(&path)?)?;
    assert_eq!(restored.evaluate(), Some(5.0));
    assert_eq!(restored.program(), brain.program());
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    match Program::load(dir.path().join("nope.json")) {
        Err(ProgramError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_parse_line() {
    let program = Program::parse_line("  3 4\t+   √ ");
    assert_eq!(program, Program::from(["3", "4", "+", "√"]));
    assert_eq!(program.to_string(), "3 4 + √");
    assert!(Program::parse_line("   ").is_empty());
}

#[test]
fn test_comma_locale_program() {
    let mut brain = Evaluator::with_format(NumberFormat::comma());
    brain.set_program(&Program::from(["1.000,5", "0,5", "+"]));
    assert_eq!(brain.evaluate(), Some(1001.0));
    brain.push_operand(0.25);
    assert_eq!(brain.program(), Program::from(["1000,5", "0,5", "+", "0,25"]));
}

#[test]
fn test_non_finite_roundtrip() {
    let mut brain = Evaluator::new();
    brain.push_operand(1.0);
    brain.push_operand(0.0);
    brain.perform_operation("÷");
    brain.push_operand(f64::NAN);

    let mut restored = Evaluator::new();
    restored.load_program(&brain.program()).unwrap();
    assert_eq!(restored.ops(), brain.ops());
    assert_eq!(restored.program(), Program::from(["1", "0", "÷", "NaN"]));
}
