//! The verification entry point.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::info;

use lawful_strategy::TypeRegistry;
use lawful_types::{ContainerId, LawSettings, LawfulError, LawfulResult, Lawful};

use crate::case::{build_case, LawCase};

/// Every law case of one container, in capability-chain order.
#[derive(Debug, Clone)]
pub struct LawSuite {
    container: ContainerId,
    cases: Vec<LawCase>,
}

impl LawSuite {
    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn cases(&self) -> &[LawCase] {
        &self.cases
    }

    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(LawCase::name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&LawCase> {
        self.cases.iter().find(|case| case.name() == name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LawCase> {
        self.cases.iter()
    }
}

impl<'a> IntoIterator for &'a LawSuite {
    type Item = &'a LawCase;
    type IntoIter = std::slice::Iter<'a, LawCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

impl IntoIterator for LawSuite {
    type Item = LawCase;
    type IntoIter = std::vec::IntoIter<LawCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

/// Build one case per law reachable from `C`'s declared interfaces.
///
/// All cases are built before any is returned: an invalid engine setting, a
/// container that cannot be generated, an unresolvable law parameter or a
/// duplicate case name fails the whole call.
pub fn verify_laws<C: Lawful>(
    registry: &Rc<TypeRegistry>,
    settings: LawSettings,
) -> LawfulResult<LawSuite> {
    let descriptor = Rc::new(C::descriptor());
    let config = settings.engine.to_config()?;
    let settings = Rc::new(settings);

    let mut cases = Vec::new();
    let mut names = HashSet::new();
    for entry in descriptor.laws() {
        for law in &entry.laws {
            let case = build_case::<C>(registry, &descriptor, entry.interface, law, &settings, &config)?;
            if !names.insert(case.name().to_string()) {
                return Err(LawfulError::DuplicateCase(case.name().to_string()));
            }
            cases.push(case);
        }
    }

    info!(
        container = %descriptor.id(),
        cases = cases.len(),
        per_case = config.cases,
        "Law suite built"
    );
    Ok(LawSuite {
        container: descriptor.id(),
        cases,
    })
}
