use clingo::Symbol;
use itertools::Itertools;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{ACTIVE, HOLDS, INACTIVE, OCCURS};

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("clingo error")]
    Clingo(#[from] clingo::ClingoError),
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Which fluents of a model a query keeps.
///
/// `occurs` atoms match every selection; `holds` atoms match `Active` and
/// `Inactive` through their status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    Active,
    Inactive,
}

impl Selection {
    fn keeps(&self, atom: &Symbol) -> bool {
        let name = match atom.name() {
            Ok(name) => name,
            _ => return false,
        };

        match name {
            OCCURS => true,
            HOLDS => match self {
                Self::All => true,
                Self::Active => has_tag(atom, ACTIVE),
                Self::Inactive => has_tag(atom, INACTIVE),
            },
            _ => false,
        }
    }
}

/// The status tag sits in the second argument of a `holds` atom, which is
/// itself a function whose second argument names the tag.
fn has_tag(atom: &Symbol, tag: &str) -> bool {
    atom.arguments()
        .ok()
        .and_then(|args| args.get(1).copied())
        .and_then(|state| state.arguments().ok())
        .and_then(|args| args.get(1).copied())
        .map_or(false, |sym| sym.name().map(|n| n == tag).unwrap_or(false))
}

/// The trailing argument of a fluent is always its time step.
fn time_step(atom: &Symbol) -> Option<i32> {
    atom.arguments().ok()?.last()?.number().ok()
}

/// Groups the selected fluents of one model by time step.
///
/// Atoms without a numeric trailing argument are skipped. Each bucket is
/// sorted by the printed form of the atom.
pub fn fluents_by_time(
    model: &[Symbol],
    selection: Selection,
) -> Result<BTreeMap<i32, Vec<String>>> {
    let mut by_time: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for atom in model.iter().filter(|atom| selection.keeps(atom)) {
        match time_step(atom) {
            Some(t) => by_time.entry(t).or_default().push(atom.to_string()?),
            None => log::debug!("skipping fluent without time step: {:?}", atom),
        }
    }

    Ok(by_time
        .into_iter()
        .map(|(t, fluents)| (t, fluents.into_iter().sorted().collect()))
        .collect())
}

/// Prints the selected fluents of every model, grouped by ascending time
/// step, one atom per line and a blank line after each time step.
///
/// `at` restricts the output to a single time step.
pub fn print_fluents(models: &[Vec<Symbol>], selection: Selection, at: Option<i32>) -> Result<()> {
    for model in models {
        for (t, fluents) in fluents_by_time(model, selection)? {
            if at.is_none() || at == Some(t) {
                for fluent in fluents {
                    println!("{}", fluent);
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Prints the unfiltered solver output of every model.
pub fn print_raw(models: &[Vec<Symbol>]) -> Result<()> {
    for (i, model) in models.iter().enumerate() {
        println!("Model {}:", i + 1);
        for atom in model {
            println!("{}", atom.to_string()?);
        }
        println!("\n{}\n", "-".repeat(40));
    }

    Ok(())
}

/// Counts active and inactive fluents per time step, aggregated over all
/// models.
///
/// Both series are defined over the union of their time steps; a step with
/// fluents in only one series counts 0 in the other.
pub fn status_counts(models: &[Vec<Symbol>]) -> BTreeMap<i32, (usize, usize)> {
    let mut counts: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for atom in models.iter().flatten() {
        let active = Selection::Active.keeps(atom);
        let inactive = Selection::Inactive.keeps(atom);
        if !active && !inactive {
            continue;
        }

        if let Some(t) = time_step(atom) {
            let entry = counts.entry(t).or_default();
            if active {
                entry.0 += 1;
            }
            if inactive {
                entry.1 += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ACTIVE, HOLDS, INACTIVE, OCCURS};

    fn sym(name: &str) -> Symbol {
        Symbol::create_id(name, true).expect("symbol creation failed.")
    }

    fn holds(fluent: &str, tag: &str, t: i32) -> Symbol {
        let state = Symbol::create_function("state", &[sym(fluent), sym(tag)], true)
            .expect("symbol creation failed.");
        Symbol::create_function(HOLDS, &[sym(fluent), state, Symbol::create_number(t)], true)
            .expect("symbol creation failed.")
    }

    fn occurs(event: &str, t: i32) -> Symbol {
        Symbol::create_function(OCCURS, &[sym(event), Symbol::create_number(t)], true)
            .expect("symbol creation failed.")
    }

    #[test]
    fn groups_by_trailing_time_step() -> Result<()> {
        let model = vec![
            occurs("wave", 1),
            holds("greet", ACTIVE, 0),
            holds("idle", INACTIVE, 1),
        ];

        let by_time = fluents_by_time(&model, Selection::All)?;
        assert_eq!(by_time.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(by_time[&0], vec!["holds(greet,state(greet,active),0)"]);
        assert_eq!(
            by_time[&1],
            vec!["holds(idle,state(idle,inactive),1)", "occurs(wave,1)"]
        );
        Ok(())
    }

    #[test]
    fn buckets_are_sorted_by_printed_form() -> Result<()> {
        let model = vec![occurs("b", 0), occurs("a", 0), holds("c", ACTIVE, 0)];

        let by_time = fluents_by_time(&model, Selection::All)?;
        assert_eq!(
            by_time[&0],
            vec![
                "holds(c,state(c,active),0)",
                "occurs(a,0)",
                "occurs(b,0)",
            ]
        );
        Ok(())
    }

    #[test]
    fn active_selection_keeps_occurs_and_tagged_holds() -> Result<()> {
        let model = vec![
            holds("greet", ACTIVE, 0),
            holds("idle", INACTIVE, 0),
            occurs("wave", 0),
        ];

        let by_time = fluents_by_time(&model, Selection::Active)?;
        assert_eq!(
            by_time[&0],
            vec!["holds(greet,state(greet,active),0)", "occurs(wave,0)"]
        );

        let by_time = fluents_by_time(&model, Selection::Inactive)?;
        assert_eq!(
            by_time[&0],
            vec!["holds(idle,state(idle,inactive),0)", "occurs(wave,0)"]
        );
        Ok(())
    }

    #[test]
    fn untagged_holds_only_matches_all() -> Result<()> {
        // no status function in the second argument
        let stray = Symbol::create_function(
            HOLDS,
            &[sym("x"), sym("y"), Symbol::create_number(0)],
            true,
        )
        .expect("symbol creation failed.");
        let model = vec![stray];

        assert_eq!(fluents_by_time(&model, Selection::All)?.len(), 1);
        assert!(fluents_by_time(&model, Selection::Active)?.is_empty());
        assert!(fluents_by_time(&model, Selection::Inactive)?.is_empty());
        Ok(())
    }

    #[test]
    fn skips_fluents_without_numeric_time_step() -> Result<()> {
        let model = vec![
            Symbol::create_function(HOLDS, &[sym("x"), sym("later")], true)
                .expect("symbol creation failed."),
            sym(OCCURS),
            holds("greet", ACTIVE, 2),
        ];

        let by_time = fluents_by_time(&model, Selection::All)?;
        assert_eq!(by_time.keys().copied().collect::<Vec<_>>(), vec![2]);
        Ok(())
    }

    #[test]
    fn ignores_non_fluent_atoms() -> Result<()> {
        let model = vec![
            Symbol::create_function("step", &[Symbol::create_number(0)], true)
                .expect("symbol creation failed."),
            Symbol::create_number(7),
            holds("greet", ACTIVE, 0),
        ];

        let by_time = fluents_by_time(&model, Selection::All)?;
        assert_eq!(by_time[&0], vec!["holds(greet,state(greet,active),0)"]);
        Ok(())
    }

    #[test]
    fn counts_fill_missing_steps_with_zero() {
        let model = vec![holds("greet", ACTIVE, 0), holds("idle", INACTIVE, 2)];

        let counts = status_counts(&[model]);
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![(0, (1, 0)), (2, (0, 1))]
        );
    }

    #[test]
    fn counts_aggregate_over_models() {
        let first = vec![holds("greet", ACTIVE, 0), occurs("wave", 0)];
        let second = vec![holds("greet", ACTIVE, 0)];

        let counts = status_counts(&[first, second]);
        // occurs atoms count towards both series
        assert_eq!(counts[&0], (3, 1));
    }
}
