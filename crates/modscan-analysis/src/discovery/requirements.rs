//! `REQUIRES` extraction.

use modscan_core::constants::REQUIRES_VAR;
use modscan_core::errors::RequirementsError;

use super::types::Requires;
use crate::parsers::syntax::{Expr, ModuleAst, Stmt, Target};

/// Requirements declared by the first top-level `REQUIRES = <collection>`.
///
/// Assignments to other targets, chained or annotated assignments, and
/// non-collection values are passed over. Returns `Ok(None)` when nothing
/// matches and an error when the chosen collection holds anything other
/// than string literals.
pub fn extract_requirements(ast: &ModuleAst) -> Result<Requires, RequirementsError> {
    for stmt in &ast.body {
        let Stmt::Assign { targets, value } = stmt else {
            continue;
        };
        let [Target::Name(id)] = targets.as_slice() else {
            continue;
        };
        if id != REQUIRES_VAR {
            continue;
        }
        let Expr::Collection { elements, .. } = value else {
            continue;
        };

        return elements
            .iter()
            .enumerate()
            .map(|(index, element)| match element {
                Expr::Str(dep) => Ok(dep.clone()),
                other => Err(RequirementsError::NonStringElement {
                    var: REQUIRES_VAR,
                    index,
                    kind: other.kind_name().to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some);
    }
    Ok(None)
}
