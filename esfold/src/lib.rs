pub mod monoidal;
mod test;

pub use esfold_ast as ast;
pub use esfold_core::{ConfigError, LawViolation, Monoid, MonoidAdapter, MonoidBuilder};
pub use monoidal::{MonoidReducer, Monoidal, MonoidalReducer};

use esfold_ast::Program;
use log::warn;

/// Folds `program` bottom-up with `reducer`'s table. Recursion depth follows
/// tree depth, see [`esfold_ast::reduce`].
pub fn reduce<R: MonoidalReducer>(reducer: &mut R, program: &Program) -> anyhow::Result<R::Output> {
    esfold_ast::reduce(&mut Monoidal(reducer), program)
}

/// Loads a Shift JSON tree and folds it. A tree containing a kind outside the
/// grammar is rejected with [`esfold_ast::AstError::UnknownKind`] before any
/// reducer method runs.
pub fn reduce_json<R: MonoidalReducer>(
    reducer: &mut R,
    tree: &serde_json::Value,
) -> anyhow::Result<R::Output> {
    let program = Program::from_json(tree).inspect_err(|err| warn!("{err}"))?;
    reduce(reducer, &program)
}
