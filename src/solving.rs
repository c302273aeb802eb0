use clingo::{Control, Part, ShowType, SolveMode, Symbol};
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolvingError {
    #[error("clingo error")]
    Clingo(#[from] clingo::ClingoError),
    #[error("io error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolvingError>;

/// Collects the shown symbols of every stable model of the program in
/// `lp_file`, in enumeration order.
///
/// `limit` caps enumeration; `0` enumerates all models.
pub fn collect_models(lp_file: impl AsRef<Path>, limit: usize) -> Result<Vec<Vec<Symbol>>> {
    let program = read_to_string(lp_file)?;

    collect_models_str(&program, limit)
}

/// Same as [`collect_models`], with the program given as source text.
pub fn collect_models_str(program: &str, limit: usize) -> Result<Vec<Vec<Symbol>>> {
    let mut ctl = Control::new(vec![limit.to_string()])?;

    ctl.add("base", &[], program)
        .and_then(|_| Part::new("base", &[]))
        .and_then(|p| ctl.ground(&[p]))?;
    log::debug!("grounded base part");

    let mut models = vec![];
    let mut handle = ctl.solve(SolveMode::YIELD, &[])?;
    loop {
        handle.resume()?;
        match handle.model()? {
            Some(model) => models.push(model.symbols(ShowType::SHOWN)?),
            None => break,
        }
    }
    handle.close()?;
    log::debug!("collected {:?} models", models.len());

    Ok(models)
}
