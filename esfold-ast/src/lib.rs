pub mod err;
mod json;
pub mod kind;
pub mod ops;
pub mod reduce;
pub mod tree;

pub use err::AstError;
pub use kind::NodeKind;
pub use reduce::{reduce, Node, Reducer};
pub use tree::*;

use log::debug;
use serde::Deserialize;

impl Program {
    /// Loads a tree in the Shift JSON format.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AstError> {
        let program = json::program(value)?;
        debug!("loaded {} from json", program.kind());
        Ok(program)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let program = src.parse()?;
        Ok(program)
    }
}

impl std::str::FromStr for Program {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Every node is one level of JSON nesting, so serde_json's default
        // depth limit rejects ordinary programs. The stack grows on demand.
        let mut de = serde_json::Deserializer::from_str(s);
        de.disable_recursion_limit();
        let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        let program = Self::from_json(&value)?;
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_from_str() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let src = r#"{
            "type": "Script",
            "directives": [{ "type": "Directive", "rawValue": "use strict" }],
            "statements": [{ "type": "EmptyStatement" }]
        }"#;
        let program: Program = src.parse()?;
        assert_eq!(program.kind(), NodeKind::Script);
        let Program::Script(script) = program else {
            panic!("expected a script");
        };
        assert_eq!(script.directives[0].raw_value, "use strict");
        assert_eq!(script.statements, vec![Statement::Empty(Box::new(EmptyStatement))]);
        Ok(())
    }

    #[test]
    fn unknown_kind_surfaces_through_from_str() {
        let src = r#"{ "type": "Script", "directives": [], "statements": [{ "type": "ClassProperty" }] }"#;
        let err = src.parse::<Program>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<AstError>(),
            Some(&AstError::UnknownKind("ClassProperty".into()))
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!("{ \"type\": ".parse::<Program>().is_err());
        assert!(r#"{ "type": "EmptyStatement" } x"#.parse::<Program>().is_err());
    }

    /// `a + a + ... + a` with `operands` operands, as Shift JSON text.
    fn sum_chain(operands: usize) -> String {
        let ident = r#"{"type":"IdentifierExpression","name":"a"}"#;
        let mut expr = ident.to_owned();
        for _ in 1..operands {
            expr = format!(
                r#"{{"type":"BinaryExpression","left":{expr},"operator":"+","right":{ident}}}"#
            );
        }
        format!(
            r#"{{"type":"Script","directives":[],"statements":[{{"type":"ExpressionStatement","expression":{expr}}}]}}"#
        )
    }

    #[test]
    fn deeply_nested_program_from_str() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        // Loading recurses once per level; give debug builds room.
        let loaded = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| -> anyhow::Result<usize> {
                let program: Program = sum_chain(300).parse()?;
                let Program::Script(script) = program else {
                    anyhow::bail!("expected a script");
                };
                let mut depth = 0;
                let Statement::Expression(stmt) = &script.statements[0] else {
                    anyhow::bail!("expected an expression statement");
                };
                let mut expr = &stmt.expression;
                while let Expression::Binary(bin) = expr {
                    depth += 1;
                    expr = &bin.left;
                }
                Ok(depth)
            })?
            .join()
            .map_err(|_| anyhow::anyhow!("loader thread panicked"))??;
        assert_eq!(loaded, 299);
        Ok(())
    }
}
